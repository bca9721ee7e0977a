use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{EngineType, RepairType};
use crate::services::pricing_tables::base_price_or_zero;
use crate::utils::validation::validate_non_negative_amount;

// Query de GET /api/pricing/base-cost
#[derive(Debug, Deserialize)]
pub struct BaseCostQuery {
    pub repair_type: i32,
    pub engine_type: String,
}

#[derive(Debug, Serialize)]
pub struct BaseCostResponse {
    pub repair_type: i32,
    pub engine_type: String,
    pub base_cost: Decimal,
}

// Query de GET /api/pricing/discount-rate
#[derive(Debug, Deserialize)]
pub struct DiscountRateQuery {
    pub repair_count: u32,
    pub engine_type: String,
}

#[derive(Debug, Serialize)]
pub struct DiscountRateResponse {
    pub repair_count: u32,
    pub engine_type: String,
    pub discount_rate: Decimal,
}

// Request de POST /api/pricing/discount
#[derive(Debug, Deserialize, Validate)]
pub struct DiscountRequest {
    pub vehicle_id: Uuid,
    pub engine_type: String,
    #[validate(custom = "validate_non_negative_amount")]
    pub repair_costs: Decimal,
    /// Fecha de referencia; por defecto, hoy
    pub as_of: Option<NaiveDate>,
}

/// Monto del descuento (no el precio final)
#[derive(Debug, Serialize)]
pub struct DiscountResponse {
    pub vehicle_id: Uuid,
    pub repair_costs: Decimal,
    pub discount_amount: Decimal,
    pub as_of: NaiveDate,
}

// Request de POST /api/pricing/quote
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub vehicle_id: Uuid,
    pub repair_type: i32,
    pub engine_type: String,
    pub as_of: Option<NaiveDate>,
}

/// Entrada de la lista de precios
#[derive(Debug, Serialize)]
pub struct RepairTypeResponse {
    pub code: i32,
    pub key: RepairType,
    pub name: &'static str,
    pub prices: Vec<EnginePrice>,
}

#[derive(Debug, Serialize)]
pub struct EnginePrice {
    pub engine_type: EngineType,
    pub base_cost: Decimal,
}

impl From<RepairType> for RepairTypeResponse {
    fn from(repair_type: RepairType) -> Self {
        Self {
            code: repair_type.code(),
            key: repair_type,
            name: repair_type.name(),
            prices: EngineType::ALL
                .into_iter()
                .map(|engine_type| EnginePrice {
                    engine_type,
                    base_cost: base_price_or_zero(repair_type, engine_type),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_repair_type_response_lists_all_engines() {
        let response = RepairTypeResponse::from(RepairType::Engine);
        assert_eq!(response.code, 3);
        assert_eq!(response.prices.len(), 4);
        assert_eq!(response.prices[2].engine_type, EngineType::Hybrid);
        assert_eq!(response.prices[2].base_cost, dec!(700000));
    }

    #[test]
    fn test_discount_request_rejects_negative_costs() {
        let request = DiscountRequest {
            vehicle_id: Uuid::new_v4(),
            engine_type: "Diesel".to_string(),
            repair_costs: dec!(-10),
            as_of: None,
        };
        assert!(request.validate().is_err());
    }
}
