use crate::dto::pricing_dto::{
    BaseCostQuery, BaseCostResponse, DiscountRateQuery, DiscountRateResponse, DiscountRequest,
    DiscountResponse, QuoteRequest, RepairTypeResponse,
};
use crate::models::RepairType;
use crate::services::history_store::HistoryStore;
use crate::services::pricing_service::{discount_rate, lookup_base_cost, PricingEngine, RepairQuote};
use crate::utils::errors::{not_found_error, AppError};
use chrono::Utc;
use validator::Validate;

/// Endpoints de precios: lista de precios, tasas y cotizaciones
pub struct PricingController<H> {
    engine: PricingEngine<H>,
}

impl<H: HistoryStore> PricingController<H> {
    pub fn new(history: H) -> Self {
        Self {
            engine: PricingEngine::new(history),
        }
    }

    pub fn base_cost(&self, query: BaseCostQuery) -> BaseCostResponse {
        BaseCostResponse {
            base_cost: lookup_base_cost(query.repair_type, &query.engine_type),
            repair_type: query.repair_type,
            engine_type: query.engine_type,
        }
    }

    pub fn discount_rate(&self, query: DiscountRateQuery) -> DiscountRateResponse {
        DiscountRateResponse {
            discount_rate: discount_rate(query.repair_count, &query.engine_type),
            repair_count: query.repair_count,
            engine_type: query.engine_type,
        }
    }

    pub async fn discount(&self, request: DiscountRequest) -> Result<DiscountResponse, AppError> {
        request.validate()?;

        let as_of = request.as_of.unwrap_or_else(|| Utc::now().date_naive());
        let discount_amount = self.engine
            .calculate_discounted_cost(request.vehicle_id, &request.engine_type, request.repair_costs, as_of)
            .await?;

        Ok(DiscountResponse {
            vehicle_id: request.vehicle_id,
            repair_costs: request.repair_costs,
            discount_amount,
            as_of,
        })
    }

    pub async fn quote(&self, request: QuoteRequest) -> Result<RepairQuote, AppError> {
        let as_of = request.as_of.unwrap_or_else(|| Utc::now().date_naive());
        self.engine
            .quote(request.vehicle_id, request.repair_type, &request.engine_type, as_of)
            .await
    }

    pub fn repair_types(&self) -> Vec<RepairTypeResponse> {
        RepairType::ALL.into_iter().map(RepairTypeResponse::from).collect()
    }

    /// Tipo de reparación por código numérico o por nombre
    pub fn repair_type(&self, key: &str) -> Result<RepairTypeResponse, AppError> {
        key.trim()
            .parse::<i32>()
            .ok()
            .and_then(RepairType::from_code)
            .or_else(|| RepairType::from_name(key))
            .map(RepairTypeResponse::from)
            .ok_or_else(|| not_found_error("RepairType", key))
    }
}
