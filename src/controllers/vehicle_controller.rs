use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::repositories::vehicle_repository::{NewVehicle, VehicleChanges, VehicleRepository};
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use crate::utils::validation::normalize_license_plate;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let license_plate = normalize_license_plate(&request.license_plate);

        // Verificar que la patente no exista
        if self.repository.license_plate_exists(&license_plate).await? {
            return Err(conflict_error("Vehicle", "license_plate", &license_plate));
        }

        let vehicle = self.repository.create(NewVehicle {
            license_plate,
            brand: request.brand,
            model: request.model,
            vehicle_type: request.vehicle_type,
            manufacture_year: request.manufacture_year,
            engine_type: request.engine_type,
            seats: request.seats,
        }).await?;

        log::info!("🚗 Vehículo registrado: {} ({})", vehicle.license_plate, vehicle.id);

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo creado exitosamente".to_string()
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        Ok(vehicle.into())
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_all().await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let current = self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        let license_plate = request.license_plate.as_deref().map(normalize_license_plate);

        // La patente nueva no puede pertenecer a otro vehículo
        if let Some(plate) = changed_license_plate(&current.license_plate, license_plate.as_deref()) {
            if self.repository.license_plate_exists(plate).await? {
                return Err(conflict_error("Vehicle", "license_plate", plate));
            }
        }

        let vehicle = self.repository.update(id, VehicleChanges {
            license_plate,
            brand: request.brand,
            model: request.model,
            vehicle_type: request.vehicle_type,
            manufacture_year: request.manufacture_year,
            engine_type: request.engine_type,
            seats: request.seats,
        }).await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente".to_string()
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        log::info!("🗑️ Vehículo eliminado: {}", id);
        Ok(())
    }
}

/// Patente que debe verificarse por unicidad: sólo la solicitada y distinta de la actual
fn changed_license_plate<'a>(current: &str, requested: Option<&'a str>) -> Option<&'a str> {
    requested.filter(|plate| *plate != current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changed_license_plate_checks_new_plate() {
        assert_eq!(changed_license_plate("BBCL83", Some("GHJK12")), Some("GHJK12"));
    }

    #[test]
    fn test_changed_license_plate_skips_same_or_missing_plate() {
        assert_eq!(changed_license_plate("BBCL83", Some("BBCL83")), None);
        assert_eq!(changed_license_plate("BBCL83", None), None);
    }
}
