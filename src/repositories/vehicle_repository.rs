use crate::models::Vehicle;
use crate::utils::errors::{not_found_error, AppError};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

/// Datos para registrar un vehículo (ya validados)
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub vehicle_type: String,
    pub manufacture_year: i32,
    pub engine_type: String,
    pub seats: i32,
}

/// Cambios parciales sobre un vehículo
#[derive(Debug, Clone, Default)]
pub struct VehicleChanges {
    pub license_plate: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub vehicle_type: Option<String>,
    pub manufacture_year: Option<i32>,
    pub engine_type: Option<String>,
    pub seats: Option<i32>,
}

#[derive(Clone)]
pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, vehicle: NewVehicle) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, license_plate, brand, model, vehicle_type, manufacture_year, engine_type, seats, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#
        )
        .bind(Uuid::new_v4())
        .bind(vehicle.license_plate)
        .bind(vehicle.brand)
        .bind(vehicle.model)
        .bind(vehicle.vehicle_type)
        .bind(vehicle.manufacture_year)
        .bind(vehicle.engine_type)
        .bind(vehicle.seats)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles ORDER BY created_at DESC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn license_plate_exists(&self, license_plate: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE license_plate = $1)"
        )
        .bind(license_plate)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(&self, id: Uuid, changes: VehicleChanges) -> Result<Vehicle, AppError> {
        // Obtener vehículo actual
        let current = self.find_by_id(id).await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET license_plate = $2, brand = $3, model = $4, vehicle_type = $5,
                manufacture_year = $6, engine_type = $7, seats = $8
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(changes.license_plate.unwrap_or(current.license_plate))
        .bind(changes.brand.unwrap_or(current.brand))
        .bind(changes.model.unwrap_or(current.model))
        .bind(changes.vehicle_type.unwrap_or(current.vehicle_type))
        .bind(changes.manufacture_year.unwrap_or(current.manufacture_year))
        .bind(changes.engine_type.unwrap_or(current.engine_type))
        .bind(changes.seats.unwrap_or(current.seats))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Vehicle", &id.to_string()));
        }

        Ok(())
    }
}
