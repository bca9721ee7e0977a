//! DTOs de la API
//! 
//! Requests y responses que cruzan la frontera HTTP.

pub mod api_response;
pub mod pricing_dto;
pub mod repair_dto;
pub mod vehicle_dto;

pub use api_response::ApiResponse;
