//! Notification dropdown actions.

use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

use super::back_or;

#[derive(Debug, Default, Deserialize)]
pub struct MarkReadForm {
    #[serde(default)]
    pub back: String,
}

/// Mark every notification read and return to the admin page it came from.
#[instrument(skip(state))]
pub async fn mark_all_read(
    State(state): State<AppState>,
    Form(form): Form<MarkReadForm>,
) -> Result<Redirect> {
    let back = back_or(&form.back, "/admin", "/admin");
    state.notifications().mark_all_read()?;
    tracing::debug!("Notifications marked read");

    Ok(Redirect::to(back))
}
