//! AutoFix - backend de gestión de un taller mecánico
//! 
//! Registra vehículos y reparaciones, publica la lista de precios y
//! calcula el descuento por fidelidad según las reparaciones del último año.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
