//! Theme API.

use axum::{Json, extract::State};
use tracing::instrument;

use bistro_core::Theme;

use crate::error::add_breadcrumb;
use crate::state::AppState;

use super::ApiResult;

/// The stored theme, or the default.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> ApiResult<Theme> {
    Ok(Json(state.theme().load_or_default()))
}

/// Replace the stored theme.
#[instrument(skip(state))]
pub async fn replace(State(state): State<AppState>, Json(theme): Json<Theme>) -> ApiResult<Theme> {
    theme.validate()?;
    state.theme().save(&theme)?;

    let mut config = state.settings().load()?;
    config.theme = theme.clone();
    state.settings().save(config)?;

    add_breadcrumb("theme", "Theme replaced via API");
    tracing::info!(primary = %theme.primary_color, "Theme replaced");
    Ok(Json(theme))
}
