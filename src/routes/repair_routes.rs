use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use crate::controllers::repair_controller::RepairController;
use crate::dto::api_response::ApiResponse;
use crate::dto::repair_dto::{RepairRequest, SaveRepairRequest};
use crate::models::{Repair, RepairDetails};
use crate::state::AppState;
use crate::utils::errors::AppError;
use uuid::Uuid;

pub fn create_repair_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_repairs).post(create_repair))
        .route("/details", get(list_repairs_with_details))
        .route("/register", post(save_repair))
        .route("/:id", get(get_repair).put(update_repair).delete(delete_repair))
}

async fn list_repairs(
    State(state): State<AppState>,
) -> Result<Json<Vec<Repair>>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    Ok(Json(controller.get_all().await?))
}

async fn list_repairs_with_details(
    State(state): State<AppState>,
) -> Result<Json<Vec<RepairDetails>>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    Ok(Json(controller.get_all_with_details().await?))
}

async fn get_repair(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Repair>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_repair(
    State(state): State<AppState>,
    Json(request): Json<RepairRequest>,
) -> Result<Json<ApiResponse<Repair>>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn save_repair(
    State(state): State<AppState>,
    Json(request): Json<SaveRepairRequest>,
) -> Result<Json<ApiResponse<Repair>>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    Ok(Json(controller.save_repair(request).await?))
}

async fn update_repair(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RepairRequest>,
) -> Result<Json<ApiResponse<Repair>>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_repair(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Reparación eliminada exitosamente"
    })))
}
