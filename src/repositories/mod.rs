//! Repositorios
//! 
//! Acceso a PostgreSQL para vehículos y reparaciones.

pub mod repair_repository;
pub mod vehicle_repository;

pub use repair_repository::{RepairRepository, RepairRow};
pub use vehicle_repository::{NewVehicle, VehicleChanges, VehicleRepository};
