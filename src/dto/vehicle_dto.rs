use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::Vehicle;
use crate::utils::validation::{validate_engine_type, validate_license_plate};

// Request para registrar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(custom = "validate_license_plate")]
    pub license_plate: String,

    #[validate(length(min = 1, max = 100))]
    pub brand: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(length(min = 2, max = 50))]
    pub vehicle_type: String,

    #[validate(range(min = 1900, max = 2100))]
    pub manufacture_year: i32,

    #[validate(custom = "validate_engine_type")]
    pub engine_type: String,

    #[validate(range(min = 1, max = 60))]
    pub seats: i32,
}

// Request para actualizar un vehículo
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(custom = "validate_license_plate")]
    pub license_plate: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub brand: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(length(min = 2, max = 50))]
    pub vehicle_type: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub manufacture_year: Option<i32>,

    #[validate(custom = "validate_engine_type")]
    pub engine_type: Option<String>,

    #[validate(range(min = 1, max = 60))]
    pub seats: Option<i32>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub vehicle_type: String,
    pub manufacture_year: i32,
    pub engine_type: String,
    pub seats: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            license_plate: vehicle.license_plate,
            brand: vehicle.brand,
            model: vehicle.model,
            vehicle_type: vehicle.vehicle_type,
            manufacture_year: vehicle.manufacture_year,
            engine_type: vehicle.engine_type,
            seats: vehicle.seats,
            created_at: vehicle.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateVehicleRequest {
        CreateVehicleRequest {
            license_plate: "BBCL83".to_string(),
            brand: "Toyota".to_string(),
            model: "Hilux".to_string(),
            vehicle_type: "Pickup".to_string(),
            manufacture_year: 2018,
            engine_type: "Diésel".to_string(),
            seats: 5,
        }
    }

    #[test]
    fn test_create_request_valid() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_bad_fields() {
        let mut request = valid_request();
        request.license_plate = "123".to_string();
        request.engine_type = "Vapor".to_string();
        request.seats = 0;

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("license_plate"));
        assert!(fields.contains_key("engine_type"));
        assert!(fields.contains_key("seats"));
    }

    #[test]
    fn test_update_request_empty_is_valid() {
        assert!(UpdateVehicleRequest::default().validate().is_ok());
    }
}
