//! Modelos del sistema
//! 
//! Este módulo contiene los modelos de datos del taller: vehículos,
//! reparaciones y el catálogo de tipos de reparación.

pub mod engine_type;
pub mod repair;
pub mod repair_type;
pub mod vehicle;

pub use engine_type::EngineType;
pub use repair::{Repair, RepairDetails, RepairRecord};
pub use repair_type::RepairType;
pub use vehicle::Vehicle;
