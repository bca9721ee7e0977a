use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::validate_non_negative_amount;

// Request para registrar una reparación con todos sus campos
#[derive(Debug, Deserialize, Validate)]
pub struct RepairRequest {
    pub vehicle_id: Uuid,

    #[validate(range(min = 1, max = 11))]
    pub repair_type: i32,

    pub entry_date: NaiveDateTime,
    pub exit_date: Option<NaiveDateTime>,
    pub departure_date: Option<NaiveDateTime>,

    #[validate(custom = "validate_non_negative_amount")]
    pub repair_cost: Decimal,

    #[serde(default)]
    #[validate(custom = "validate_non_negative_amount")]
    pub discount_amount: Decimal,

    #[validate(custom = "validate_non_negative_amount")]
    pub total_cost: Decimal,
}

// Request para registrar una reparación cotizada por el taller
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRepairRequest {
    pub vehicle_id: Uuid,

    #[validate(range(min = 1, max = 11))]
    pub repair_type: i32,

    /// Fecha de ingreso; por defecto, ahora
    pub entry_date: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_repair_request_from_json() {
        let request: RepairRequest = serde_json::from_value(serde_json::json!({
            "vehicle_id": "550e8400-e29b-41d4-a716-446655440000",
            "repair_type": 3,
            "entry_date": "2025-03-01T09:30:00",
            "repair_cost": "450000",
            "total_cost": "396000"
        }))
        .unwrap();

        assert_eq!(request.discount_amount, Decimal::ZERO);
        assert_eq!(request.total_cost, dec!(396000));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_save_repair_request_rejects_unknown_type() {
        let request = SaveRepairRequest {
            vehicle_id: Uuid::new_v4(),
            repair_type: 12,
            entry_date: None,
        };
        assert!(request.validate().is_err());
    }
}
