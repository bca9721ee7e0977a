//! Services module
//! 
//! Lógica de negocio del taller: el motor de precios, sus tablas y el
//! contrato de acceso al historial de reparaciones.

pub mod history_store;
pub mod pricing_service;
pub mod pricing_tables;

pub use history_store::HistoryStore;
pub use pricing_service::{discount_rate, lookup_base_cost, NewRepairPrice, PricingEngine, RepairQuote};
