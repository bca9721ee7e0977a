//! Acceso al historial de reparaciones
//! 
//! El motor de precios sólo necesita leer el historial de un vehículo; el
//! filtrado por fecha lo hace el propio motor.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::RepairRecord;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Todas las reparaciones conocidas del vehículo, en cualquier orden.
    /// Un vehículo sin historial devuelve un vector vacío, nunca un error.
    async fn find_repairs_for_vehicle(&self, vehicle_id: Uuid) -> AppResult<Vec<RepairRecord>>;
}
