use crate::dto::api_response::ApiResponse;
use crate::dto::repair_dto::{RepairRequest, SaveRepairRequest};
use crate::models::{Repair, RepairDetails};
use crate::repositories::repair_repository::{RepairRepository, RepairRow};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::pricing_service::PricingEngine;
use crate::utils::errors::{not_found_error, AppError};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct RepairController {
    repairs: RepairRepository,
    vehicles: VehicleRepository,
}

impl RepairController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repairs: RepairRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Repair>, AppError> {
        self.repairs.find_all().await
    }

    pub async fn get_all_with_details(&self) -> Result<Vec<RepairDetails>, AppError> {
        self.repairs.find_all_with_details().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Repair, AppError> {
        self.repairs
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Repair", &id.to_string()))
    }

    pub async fn create(&self, request: RepairRequest) -> Result<ApiResponse<Repair>, AppError> {
        request.validate()?;
        self.ensure_vehicle_exists(request.vehicle_id).await?;

        let repair = self.repairs.create(Self::row_from(request)).await?;

        Ok(ApiResponse::success_with_message(
            repair,
            "Reparación creada exitosamente".to_string()
        ))
    }

    pub async fn update(&self, id: Uuid, request: RepairRequest) -> Result<ApiResponse<Repair>, AppError> {
        request.validate()?;

        if !self.repairs.exists(id).await? {
            return Err(not_found_error("Repair", &id.to_string()));
        }
        self.ensure_vehicle_exists(request.vehicle_id).await?;

        let repair = self.repairs.update(id, Self::row_from(request)).await?;

        Ok(ApiResponse::success_with_message(
            repair,
            "Reparación actualizada exitosamente".to_string()
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repairs.delete(id).await
    }

    /// Registra una reparación cotizada con la lista de precios.
    ///
    /// El descuento se calcula antes de guardar la reparación, con la fecha
    /// de ingreso como referencia (ver `PricingEngine::price_new_repair`).
    pub async fn save_repair(&self, request: SaveRepairRequest) -> Result<ApiResponse<Repair>, AppError> {
        request.validate()?;

        let vehicle = self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &request.vehicle_id.to_string()))?;

        let entry_date = request.entry_date.unwrap_or_else(|| Utc::now().naive_utc());

        // Motor no reconocido: la lista de precios y el descuento resuelven a cero
        let engine_type = match vehicle.engine() {
            Some(engine) => engine.as_str(),
            None => {
                log::warn!(
                    "⚠️ Vehículo {} con tipo de motor desconocido '{}'",
                    vehicle.license_plate,
                    vehicle.engine_type
                );
                ""
            }
        };

        let pricing = PricingEngine::new(self.repairs.clone());
        let price = pricing
            .price_new_repair(vehicle.id, engine_type, request.repair_type, entry_date)
            .await?;

        let repair = self.repairs.create(RepairRow {
            vehicle_id: vehicle.id,
            repair_type: request.repair_type,
            entry_date,
            exit_date: None,
            departure_date: None,
            repair_cost: price.repair_cost,
            discount_amount: price.discount_amount,
            total_cost: price.total_cost,
        }).await?;

        log::info!(
            "🔧 Reparación {} registrada para {}: costo {} descuento {}",
            repair.id,
            vehicle.license_plate,
            repair.repair_cost,
            repair.discount_amount
        );

        Ok(ApiResponse::success_with_message(
            repair,
            "Reparación registrada exitosamente".to_string()
        ))
    }

    async fn ensure_vehicle_exists(&self, vehicle_id: Uuid) -> Result<(), AppError> {
        match self.vehicles.find_by_id(vehicle_id).await? {
            Some(_) => Ok(()),
            None => Err(not_found_error("Vehicle", &vehicle_id.to_string())),
        }
    }

    fn row_from(request: RepairRequest) -> RepairRow {
        RepairRow {
            vehicle_id: request.vehicle_id,
            repair_type: request.repair_type,
            entry_date: request.entry_date,
            exit_date: request.exit_date,
            departure_date: request.departure_date,
            repair_cost: request.repair_cost,
            discount_amount: request.discount_amount,
            total_cost: request.total_cost,
        }
    }
}
