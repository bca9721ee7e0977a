use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::repair::RepairHistoryRow;
use crate::models::{Repair, RepairDetails, RepairRecord};
use crate::services::history_store::HistoryStore;
use crate::utils::errors::{not_found_error, AppError, AppResult};

/// Fila a insertar o reemplazar en `repairs`
#[derive(Debug, Clone)]
pub struct RepairRow {
    pub vehicle_id: Uuid,
    pub repair_type: i32,
    pub entry_date: NaiveDateTime,
    pub exit_date: Option<NaiveDateTime>,
    pub departure_date: Option<NaiveDateTime>,
    pub repair_cost: Decimal,
    pub discount_amount: Decimal,
    pub total_cost: Decimal,
}

#[derive(Clone)]
pub struct RepairRepository {
    pool: PgPool,
}

impl RepairRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, repair: RepairRow) -> Result<Repair, AppError> {
        let repair = sqlx::query_as::<_, Repair>(
            r#"
            INSERT INTO repairs (id, vehicle_id, repair_type, entry_date, exit_date, departure_date,
                                 repair_cost, discount_amount, total_cost, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#
        )
        .bind(Uuid::new_v4())
        .bind(repair.vehicle_id)
        .bind(repair.repair_type)
        .bind(repair.entry_date)
        .bind(repair.exit_date)
        .bind(repair.departure_date)
        .bind(repair.repair_cost)
        .bind(repair.discount_amount)
        .bind(repair.total_cost)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(repair)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Repair>, AppError> {
        let repair = sqlx::query_as::<_, Repair>("SELECT * FROM repairs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(repair)
    }

    pub async fn find_all(&self) -> Result<Vec<Repair>, AppError> {
        let repairs = sqlx::query_as::<_, Repair>(
            "SELECT * FROM repairs ORDER BY entry_date DESC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(repairs)
    }

    pub async fn find_all_with_details(&self) -> Result<Vec<RepairDetails>, AppError> {
        let repairs = sqlx::query_as::<_, RepairDetails>(
            r#"
            SELECT r.id, r.vehicle_id, v.license_plate, v.brand, v.model, v.engine_type,
                   r.repair_type, r.entry_date, r.exit_date,
                   r.repair_cost, r.discount_amount, r.total_cost
            FROM repairs r
            JOIN vehicles v ON v.id = r.vehicle_id
            ORDER BY r.entry_date DESC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(repairs)
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM repairs WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    /// Reemplaza todos los campos de la reparación `id`
    pub async fn update(&self, id: Uuid, repair: RepairRow) -> Result<Repair, AppError> {
        sqlx::query_as::<_, Repair>(
            r#"
            UPDATE repairs
            SET vehicle_id = $2, repair_type = $3, entry_date = $4, exit_date = $5,
                departure_date = $6, repair_cost = $7, discount_amount = $8, total_cost = $9
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(repair.vehicle_id)
        .bind(repair.repair_type)
        .bind(repair.entry_date)
        .bind(repair.exit_date)
        .bind(repair.departure_date)
        .bind(repair.repair_cost)
        .bind(repair.discount_amount)
        .bind(repair.total_cost)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("Repair", &id.to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM repairs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Repair", &id.to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl HistoryStore for RepairRepository {
    async fn find_repairs_for_vehicle(&self, vehicle_id: Uuid) -> AppResult<Vec<RepairRecord>> {
        let rows = sqlx::query_as::<_, RepairHistoryRow>(
            r#"
            SELECT r.vehicle_id, r.entry_date, r.repair_type, v.engine_type
            FROM repairs r
            JOIN vehicles v ON v.id = r.vehicle_id
            WHERE r.vehicle_id = $1
            "#
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(RepairRecord::from).collect())
    }
}
