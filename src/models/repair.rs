//! Modelo de Repair
//! 
//! `Repair` mapea la tabla `repairs`. `RepairRecord` es la vista inmutable
//! que consume el motor de precios para contar reparaciones recientes.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{EngineType, RepairType};

/// Reparación registrada en el taller
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Repair {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub repair_type: i32,
    pub entry_date: NaiveDateTime,
    pub exit_date: Option<NaiveDateTime>,
    pub departure_date: Option<NaiveDateTime>,
    pub repair_cost: Decimal,
    pub discount_amount: Decimal,
    pub total_cost: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Reparación junto a los datos del vehículo (listado detallado)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RepairDetails {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub engine_type: String,
    pub repair_type: i32,
    pub entry_date: NaiveDateTime,
    pub exit_date: Option<NaiveDateTime>,
    pub repair_cost: Decimal,
    pub discount_amount: Decimal,
    pub total_cost: Decimal,
}

/// Entrada del historial de reparaciones de un vehículo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairRecord {
    pub vehicle_id: Uuid,
    pub entry_date: NaiveDate,
    pub repair_type: Option<RepairType>,
    pub engine_type: Option<EngineType>,
}

impl RepairRecord {
    pub fn new(
        vehicle_id: Uuid,
        entry_date: NaiveDate,
        repair_type: RepairType,
        engine_type: EngineType,
    ) -> Self {
        Self {
            vehicle_id,
            entry_date,
            repair_type: Some(repair_type),
            engine_type: Some(engine_type),
        }
    }
}

/// Fila del historial tal como sale de la consulta (repairs JOIN vehicles)
#[derive(Debug, FromRow)]
pub struct RepairHistoryRow {
    pub vehicle_id: Uuid,
    pub entry_date: NaiveDateTime,
    pub repair_type: i32,
    pub engine_type: String,
}

impl From<RepairHistoryRow> for RepairRecord {
    fn from(row: RepairHistoryRow) -> Self {
        Self {
            vehicle_id: row.vehicle_id,
            entry_date: row.entry_date.date(),
            repair_type: RepairType::from_code(row.repair_type),
            engine_type: EngineType::parse(&row.engine_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_row_keeps_date_part_only() {
        let vehicle_id = Uuid::new_v4();
        let row = RepairHistoryRow {
            vehicle_id,
            entry_date: NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(17, 45, 0)
                .unwrap(),
            repair_type: 4,
            engine_type: "Diésel".to_string(),
        };

        let record = RepairRecord::from(row);
        assert_eq!(record.vehicle_id, vehicle_id);
        assert_eq!(record.entry_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(record.repair_type, Some(RepairType::Transmission));
        assert_eq!(record.engine_type, Some(EngineType::Diesel));
    }

    #[test]
    fn test_history_row_with_legacy_labels() {
        let row = RepairHistoryRow {
            vehicle_id: Uuid::new_v4(),
            entry_date: NaiveDate::from_ymd_opt(2023, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            repair_type: 42,
            engine_type: "Vapor".to_string(),
        };

        let record = RepairRecord::from(row);
        assert_eq!(record.repair_type, None);
        assert_eq!(record.engine_type, None);
    }
}
