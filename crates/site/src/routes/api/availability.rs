//! Slot availability API.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use bistro_core::SlotAvailability;

use crate::error::AppError;
use crate::state::AppState;

use super::ApiResult;

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: Option<String>,
}

/// Availability of every slot on one day.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub date: NaiveDate,
    pub closed: bool,
    pub slots: Vec<SlotAvailability>,
}

/// Slot availability for `?date=` (default today).
#[instrument(skip(state))]
pub async fn availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> ApiResult<AvailabilityResponse> {
    let date = match query.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| AppError::BadRequest(format!("Data inválida: {raw}")))?,
        None => state.now().date(),
    };

    let slots = state.booking().availability(date)?;
    Ok(Json(AvailabilityResponse {
        date,
        closed: slots.iter().all(|s| !s.within_opening_hours),
        slots,
    }))
}
