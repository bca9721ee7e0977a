//! Tablas de precios y descuentos
//! 
//! Lista de precios base por (tipo de reparación × tipo de motor) y tasas
//! de descuento por tramo. Se construyen una sola vez por proceso.

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use crate::models::{EngineType, RepairType};

/// Precios por tipo de motor, en el orden de `EngineType::ALL`
type EnginePrices = [Decimal; 4];

/// Tasas de descuento por tramo (tramo 0..=3)
pub type DiscountTiers = [Decimal; 4];

lazy_static! {
    static ref PRICE_TABLE: HashMap<RepairType, EnginePrices> = {
        use RepairType::*;
        // Gasolina, Diésel, Híbrido, Eléctrico. Cero = servicio no ofrecido.
        HashMap::from([
            (BrakeSystem, [dec!(120000), dec!(120000), dec!(180000), dec!(220000)]),
            (CoolingSystem, [dec!(130000), dec!(130000), dec!(190000), dec!(230000)]),
            (Engine, [dec!(350000), dec!(450000), dec!(700000), dec!(800000)]),
            (Transmission, [dec!(210000), dec!(210000), dec!(300000), dec!(300000)]),
            (ElectricalSystem, [dec!(150000), dec!(150000), dec!(200000), dec!(250000)]),
            (ExhaustSystem, [dec!(100000), dec!(120000), dec!(450000), Decimal::ZERO]),
            (TiresAndWheels, [dec!(100000), dec!(100000), dec!(100000), dec!(100000)]),
            (SuspensionAndSteering, [dec!(180000), dec!(180000), dec!(210000), dec!(250000)]),
            (AirConditioningAndHeating, [dec!(150000), dec!(150000), dec!(180000), dec!(180000)]),
            (FuelSystem, [dec!(130000), dec!(140000), dec!(220000), Decimal::ZERO]),
            (WindshieldAndGlass, [dec!(80000), dec!(80000), dec!(80000), dec!(80000)]),
        ])
    };

    static ref DISCOUNT_TABLE: HashMap<EngineType, DiscountTiers> = HashMap::from([
        (EngineType::Gasoline, [dec!(0.05), dec!(0.10), dec!(0.15), dec!(0.20)]),
        (EngineType::Diesel, [dec!(0.07), dec!(0.12), dec!(0.17), dec!(0.22)]),
        (EngineType::Hybrid, [dec!(0.10), dec!(0.15), dec!(0.20), dec!(0.25)]),
        (EngineType::Electric, [dec!(0.08), dec!(0.13), dec!(0.18), dec!(0.23)]),
    ]);
}

fn engine_index(engine_type: EngineType) -> usize {
    match engine_type {
        EngineType::Gasoline => 0,
        EngineType::Diesel => 1,
        EngineType::Hybrid => 2,
        EngineType::Electric => 3,
    }
}

/// Precio base de la combinación; cero si no hay entrada en la tabla
pub fn base_price_or_zero(repair_type: RepairType, engine_type: EngineType) -> Decimal {
    PRICE_TABLE
        .get(&repair_type)
        .map(|prices| prices[engine_index(engine_type)])
        .unwrap_or(Decimal::ZERO)
}

/// Tasas por tramo del tipo de motor, si el motor tiene tabla
pub fn discount_tiers(engine_type: EngineType) -> Option<&'static DiscountTiers> {
    DISCOUNT_TABLE.get(&engine_type)
}

/// Tramo de descuento según la cantidad de reparaciones del último año.
/// `None` significa sin descuento.
pub fn tier_for_repair_count(repair_count: u32) -> Option<usize> {
    match repair_count {
        0 => None,
        1..=2 => Some(0),
        3..=5 => Some(1),
        6..=9 => Some(2),
        _ => Some(3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_repair_type_has_prices() {
        for repair_type in RepairType::ALL {
            assert!(PRICE_TABLE.contains_key(&repair_type), "{:?}", repair_type);
        }
    }

    #[test]
    fn test_prices_are_non_negative_whole_amounts() {
        for prices in PRICE_TABLE.values() {
            for price in prices {
                assert!(*price >= Decimal::ZERO);
                assert_eq!(price.fract(), Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_unsupported_cells_are_zero() {
        assert_eq!(
            base_price_or_zero(RepairType::ExhaustSystem, EngineType::Electric),
            Decimal::ZERO
        );
        assert_eq!(
            base_price_or_zero(RepairType::FuelSystem, EngineType::Electric),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_discount_tiers_ascending() {
        for engine_type in EngineType::ALL {
            let tiers = discount_tiers(engine_type).unwrap();
            assert!(tiers.windows(2).all(|w| w[0] < w[1]), "{:?}", engine_type);
            assert!(tiers.iter().all(|r| *r > Decimal::ZERO && *r < Decimal::ONE));
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier_for_repair_count(0), None);
        assert_eq!(tier_for_repair_count(1), Some(0));
        assert_eq!(tier_for_repair_count(2), Some(0));
        assert_eq!(tier_for_repair_count(3), Some(1));
        assert_eq!(tier_for_repair_count(5), Some(1));
        assert_eq!(tier_for_repair_count(6), Some(2));
        assert_eq!(tier_for_repair_count(9), Some(2));
        assert_eq!(tier_for_repair_count(10), Some(3));
        assert_eq!(tier_for_repair_count(250), Some(3));
    }
}
