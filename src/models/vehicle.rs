//! Modelo de Vehicle
//! 
//! Mapea la tabla `vehicles`. El tipo de motor se guarda como texto y se
//! interpreta con `EngineType::parse` al momento de cotizar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::EngineType;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
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

impl Vehicle {
    /// Tipo de motor interpretado; `None` si la etiqueta guardada no es reconocida
    pub fn engine(&self) -> Option<EngineType> {
        EngineType::parse(&self.engine_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vehicle(engine_type: &str) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            license_plate: "BBCL83".to_string(),
            brand: "Toyota".to_string(),
            model: "Prius".to_string(),
            vehicle_type: "Sedan".to_string(),
            manufacture_year: 2019,
            engine_type: engine_type.to_string(),
            seats: 5,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_engine_parses_stored_label() {
        assert_eq!(sample_vehicle("Híbrido").engine(), Some(EngineType::Hybrid));
        assert_eq!(sample_vehicle("Vapor").engine(), None);
    }
}
