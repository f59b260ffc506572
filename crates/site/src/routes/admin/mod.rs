//! Admin back-office routes.
//!
//! Every page renders with [`AdminChrome`](crate::views::AdminChrome): the
//! sidebar plus the notification badge and dropdown. Form posts redirect back
//! to their page with `?success=` or `?error=`.

pub mod dashboard;
pub mod menu;
pub mod notifications;
pub mod reservations;
pub mod settings;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use serde::Deserialize;

use crate::state::AppState;

/// `?success=` / `?error=` banner parameters shared by admin pages.
#[derive(Debug, Default, Deserialize)]
pub struct FlashParams {
    pub success: Option<String>,
    pub error: Option<String>,
}

/// Build a redirect target carrying an error message.
#[must_use]
pub fn with_error(path: &str, message: &str) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}error={}", urlencoding::encode(message))
}

/// Pick a redirect target from a submitted `back` field.
///
/// Falls back to `fallback` unless `back` stays under `prefix` and is usable
/// as a `Location` header.
#[must_use]
pub fn back_or<'a>(back: &'a str, prefix: &str, fallback: &'a str) -> &'a str {
    let usable = back.starts_with(prefix)
        && !back.chars().any(char::is_control)
        && HeaderValue::from_str(back).is_ok();
    if usable { back } else { fallback }
}

/// Create the admin routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/menu", get(menu::index).post(menu::create))
        .route("/menu/{id}", post(menu::update))
        .route("/menu/{id}/delete", post(menu::delete))
        .route("/reservations", get(reservations::index))
        .route("/reservations/{id}/status", post(reservations::set_status))
        .route("/settings", get(settings::index).post(settings::save))
        .route("/settings/theme", post(settings::save_theme))
        .route("/settings/theme/reset", post(settings::reset_theme))
        .route("/notifications/read", post(notifications::mark_all_read))
}
