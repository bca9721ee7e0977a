pub mod pricing_routes;
pub mod repair_routes;
pub mod vehicle_routes;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Router completo de la API
pub fn create_app_router(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health))
        .nest("/api/vehicle", vehicle_routes::create_vehicle_router())
        .nest("/api/repair", repair_routes::create_repair_router())
        .nest("/api/repair-type", pricing_routes::create_repair_type_router())
        .nest("/api/pricing", pricing_routes::create_pricing_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de salud simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "autofix",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
