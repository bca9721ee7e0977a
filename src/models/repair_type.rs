//! Catálogo de tipos de reparación
//! 
//! Once categorías fijas, identificadas por su código 1..=11.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepairType {
    BrakeSystem,
    CoolingSystem,
    Engine,
    Transmission,
    ElectricalSystem,
    ExhaustSystem,
    TiresAndWheels,
    SuspensionAndSteering,
    AirConditioningAndHeating,
    FuelSystem,
    WindshieldAndGlass,
}

impl RepairType {
    pub const ALL: [RepairType; 11] = [
        RepairType::BrakeSystem,
        RepairType::CoolingSystem,
        RepairType::Engine,
        RepairType::Transmission,
        RepairType::ElectricalSystem,
        RepairType::ExhaustSystem,
        RepairType::TiresAndWheels,
        RepairType::SuspensionAndSteering,
        RepairType::AirConditioningAndHeating,
        RepairType::FuelSystem,
        RepairType::WindshieldAndGlass,
    ];

    /// Código numérico del tipo (1..=11)
    pub fn code(&self) -> i32 {
        match self {
            RepairType::BrakeSystem => 1,
            RepairType::CoolingSystem => 2,
            RepairType::Engine => 3,
            RepairType::Transmission => 4,
            RepairType::ElectricalSystem => 5,
            RepairType::ExhaustSystem => 6,
            RepairType::TiresAndWheels => 7,
            RepairType::SuspensionAndSteering => 8,
            RepairType::AirConditioningAndHeating => 9,
            RepairType::FuelSystem => 10,
            RepairType::WindshieldAndGlass => 11,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Nombre comercial, tal como aparece en la lista de precios del taller
    pub fn name(&self) -> &'static str {
        match self {
            RepairType::BrakeSystem => "Reparaciones del Sistema de Frenos",
            RepairType::CoolingSystem => "Servicio del Sistema de Refrigeración",
            RepairType::Engine => "Reparaciones del Motor",
            RepairType::Transmission => "Reparaciones de la Transmisión",
            RepairType::ElectricalSystem => "Reparación del Sistema Eléctrico",
            RepairType::ExhaustSystem => "Reparaciones del Sistema de Escape",
            RepairType::TiresAndWheels => "Reparación de Neumáticos y Ruedas",
            RepairType::SuspensionAndSteering => "Reparaciones de la Suspensión y la Dirección",
            RepairType::AirConditioningAndHeating => {
                "Reparación del Sistema de Aire Acondicionado y Calefacción"
            }
            RepairType::FuelSystem => "Reparaciones del Sistema de Combustible",
            RepairType::WindshieldAndGlass => "Reparación y Reemplazo del Parabrisas y Cristales",
        }
    }

    /// Busca un tipo por su nombre comercial o por el identificador de la variante
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| {
            t.name().to_lowercase() == wanted || format!("{:?}", t).to_lowercase() == wanted
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_one_to_eleven() {
        let codes: Vec<i32> = RepairType::ALL.iter().map(|t| t.code()).collect();
        assert_eq!(codes, (1..=11).collect::<Vec<_>>());
    }

    #[test]
    fn test_from_code_out_of_range() {
        assert_eq!(RepairType::from_code(0), None);
        assert_eq!(RepairType::from_code(12), None);
        assert_eq!(RepairType::from_code(3), Some(RepairType::Engine));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            RepairType::from_name("reparaciones del motor"),
            Some(RepairType::Engine)
        );
        assert_eq!(RepairType::from_name("FuelSystem"), Some(RepairType::FuelSystem));
        assert_eq!(RepairType::from_name("Pintura"), None);
    }
}
