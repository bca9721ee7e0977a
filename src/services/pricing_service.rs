//! Motor de precios del taller
//! 
//! Calcula el costo base de una reparación y el descuento por fidelidad
//! según cuántas reparaciones tuvo el vehículo en los últimos doce meses.
//!
//! Claves desconocidas (tipo de reparación o de motor) nunca son error:
//! resuelven a un monto o tasa cero.

use chrono::{Months, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{EngineType, RepairType};
use crate::services::history_store::HistoryStore;
use crate::services::pricing_tables::{base_price_or_zero, discount_tiers, tier_for_repair_count};
use crate::utils::errors::AppResult;

/// Precio base para `(repair_type, engine_type)`.
///
/// Tipo de reparación fuera de 1..=11 o etiqueta de motor desconocida → 0.
pub fn lookup_base_cost(repair_type: i32, engine_type: &str) -> Decimal {
    match (RepairType::from_code(repair_type), EngineType::parse(engine_type)) {
        (Some(repair_type), Some(engine_type)) => base_price_or_zero(repair_type, engine_type),
        _ => Decimal::ZERO,
    }
}

/// Tasa de descuento por fidelidad.
///
/// 0 reparaciones → 0; 1–2 → tramo 0; 3–5 → tramo 1; 6–9 → tramo 2;
/// 10 o más → tramo 3. Motor desconocido → 0.
pub fn discount_rate(repair_count: u32, engine_type: &str) -> Decimal {
    let tiers = EngineType::parse(engine_type).and_then(discount_tiers);
    match (tiers, tier_for_repair_count(repair_count)) {
        (Some(tiers), Some(tier)) => tiers[tier],
        _ => Decimal::ZERO,
    }
}

/// Límite inferior (exclusivo) de la ventana de un año calendario
pub fn window_start(as_of: NaiveDate) -> NaiveDate {
    as_of
        .checked_sub_months(Months::new(12))
        .unwrap_or(NaiveDate::MIN)
}

/// Cotización desglosada de una reparación
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepairQuote {
    pub repair_type: i32,
    pub engine_type: String,
    pub base_cost: Decimal,
    pub repair_count: u32,
    pub discount_rate: Decimal,
    pub discount_amount: Decimal,
    pub net_cost: Decimal,
}

/// Montos con que se registra una reparación nueva
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRepairPrice {
    pub repair_cost: Decimal,
    pub discount_amount: Decimal,
    pub total_cost: Decimal,
}

pub struct PricingEngine<H> {
    history: H,
}

impl<H: HistoryStore> PricingEngine<H> {
    pub fn new(history: H) -> Self {
        Self { history }
    }

    /// Reparaciones del vehículo con fecha de ingreso estrictamente posterior
    /// a `as_of` menos un año.
    pub async fn count_recent_repairs(&self, vehicle_id: Uuid, as_of: NaiveDate) -> AppResult<u32> {
        let since = window_start(as_of);
        let records = self.history.find_repairs_for_vehicle(vehicle_id).await?;

        let count = records
            .iter()
            .filter(|r| r.vehicle_id == vehicle_id && r.entry_date > since)
            .count();

        log::debug!(
            "🔧 Vehículo {}: {} de {} reparaciones después de {}",
            vehicle_id,
            count,
            records.len(),
            since
        );

        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    /// Monto del descuento: `base_cost × discount_rate`.
    ///
    /// ATENCIÓN: devuelve el **monto a descontar**, no el precio final. Quien
    /// necesite el precio neto debe restarlo de `base_cost` (ver `quote`).
    pub async fn calculate_discounted_cost(
        &self,
        vehicle_id: Uuid,
        engine_type: &str,
        base_cost: Decimal,
        as_of: NaiveDate,
    ) -> AppResult<Decimal> {
        let repair_count = self.count_recent_repairs(vehicle_id, as_of).await?;
        let rate = discount_rate(repair_count, engine_type);
        Ok(base_cost * rate)
    }

    /// Precio de una reparación que aún no está en el historial.
    ///
    /// La ventana de un año se ancla en la fecha de ingreso, y como la
    /// reparación todavía no se guarda no cuenta para su propio descuento.
    pub async fn price_new_repair(
        &self,
        vehicle_id: Uuid,
        engine_type: &str,
        repair_type: i32,
        entry_date: NaiveDateTime,
    ) -> AppResult<NewRepairPrice> {
        let repair_cost = lookup_base_cost(repair_type, engine_type);
        let discount_amount = self
            .calculate_discounted_cost(vehicle_id, engine_type, repair_cost, entry_date.date())
            .await?;

        Ok(NewRepairPrice {
            repair_cost,
            discount_amount,
            total_cost: repair_cost - discount_amount,
        })
    }

    /// Costo base, descuento y precio neto de una reparación
    pub async fn quote(
        &self,
        vehicle_id: Uuid,
        repair_type: i32,
        engine_type: &str,
        as_of: NaiveDate,
    ) -> AppResult<RepairQuote> {
        let base_cost = lookup_base_cost(repair_type, engine_type);
        let repair_count = self.count_recent_repairs(vehicle_id, as_of).await?;
        let rate = discount_rate(repair_count, engine_type);
        let discount_amount = base_cost * rate;

        log::info!(
            "💰 Cotización vehículo {} tipo {} ({}): base {} descuento {} ({} reparaciones)",
            vehicle_id,
            repair_type,
            engine_type,
            base_cost,
            discount_amount,
            repair_count
        );

        Ok(RepairQuote {
            repair_type,
            engine_type: engine_type.to_string(),
            base_cost,
            repair_count,
            discount_rate: rate,
            discount_amount,
            net_cost: base_cost - discount_amount,
        })
    }
}
