//! Dashboard statistics API.

use axum::{Json, extract::State};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::instrument;

use bistro_core::{DashboardStats, dashboard_stats};

use crate::state::AppState;

use super::ApiResult;

/// Today's statistics plus the derived display values.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub stats: DashboardStats,
    pub occupancy_percent: u32,
}

/// Dashboard statistics for today.
#[instrument(skip(state))]
pub async fn stats(State(state): State<AppState>) -> ApiResult<StatsResponse> {
    let today = state.now().date();
    let config = state.settings().load()?;
    let reservations = state.reservations().list()?;
    let stats = dashboard_stats(&reservations, &config.capacity, today);

    Ok(Json(StatsResponse {
        date: today,
        occupancy_percent: stats.occupancy_percent(),
        stats,
    }))
}
