use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use crate::controllers::pricing_controller::PricingController;
use crate::dto::pricing_dto::{
    BaseCostQuery, BaseCostResponse, DiscountRateQuery, DiscountRateResponse, DiscountRequest,
    DiscountResponse, QuoteRequest, RepairTypeResponse,
};
use crate::repositories::repair_repository::RepairRepository;
use crate::services::pricing_service::RepairQuote;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_pricing_router() -> Router<AppState> {
    Router::new()
        .route("/base-cost", get(base_cost))
        .route("/discount-rate", get(discount_rate))
        .route("/discount", post(discount))
        .route("/quote", post(quote))
}

pub fn create_repair_type_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_repair_types))
        .route("/:key", get(get_repair_type))
}

fn controller(state: &AppState) -> PricingController<RepairRepository> {
    PricingController::new(RepairRepository::new(state.pool.clone()))
}

async fn base_cost(
    State(state): State<AppState>,
    query: Result<Query<BaseCostQuery>, QueryRejection>,
) -> Result<Json<BaseCostResponse>, AppError> {
    let Query(query) = query?;
    Ok(Json(controller(&state).base_cost(query)))
}

async fn discount_rate(
    State(state): State<AppState>,
    query: Result<Query<DiscountRateQuery>, QueryRejection>,
) -> Result<Json<DiscountRateResponse>, AppError> {
    let Query(query) = query?;
    Ok(Json(controller(&state).discount_rate(query)))
}

async fn discount(
    State(state): State<AppState>,
    Json(request): Json<DiscountRequest>,
) -> Result<Json<DiscountResponse>, AppError> {
    Ok(Json(controller(&state).discount(request).await?))
}

async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<RepairQuote>, AppError> {
    Ok(Json(controller(&state).quote(request).await?))
}

async fn list_repair_types(State(state): State<AppState>) -> Json<Vec<RepairTypeResponse>> {
    Json(controller(&state).repair_types())
}

async fn get_repair_type(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<RepairTypeResponse>, AppError> {
    Ok(Json(controller(&state).repair_type(&key)?))
}
