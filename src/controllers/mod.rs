pub mod pricing_controller;
pub mod repair_controller;
pub mod vehicle_controller;
