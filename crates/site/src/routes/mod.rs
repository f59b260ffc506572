//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Public
//! GET  /menu                   - Menu (?category=all|daily|<category>)
//! GET  /reservations           - Reservation form (?date=, ?confirmed=)
//! POST /reservations           - Submit reservation
//!
//! # Admin
//! GET  /admin                  - Dashboard
//! GET  /admin/menu             - Menu management (?q=, ?category=, ?edit=)
//! POST /admin/menu             - Create menu item
//! POST /admin/menu/{id}        - Update menu item
//! POST /admin/menu/{id}/delete - Delete menu item
//! GET  /admin/reservations     - Reservation list (?q=, ?date=, ?status=, ?view=)
//! POST /admin/reservations/{id}/status - Change reservation status
//! GET  /admin/settings         - Restaurant settings and theme
//! POST /admin/settings         - Save restaurant settings
//! POST /admin/settings/theme   - Save theme (preset or custom)
//! POST /admin/settings/theme/reset - Restore the default theme
//! POST /admin/notifications/read  - Mark all notifications read
//!
//! # JSON API
//! GET  /api/availability       - Slot availability (?date=)
//! GET  /api/stats              - Dashboard statistics
//! GET  /api/theme              - Current theme
//! PUT  /api/theme              - Replace theme
//! ```

pub mod admin;
pub mod api;
pub mod home;
pub mod menu;
pub mod not_found;
pub mod reservations;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the public page routes.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/menu", get(menu::index))
        .route(
            "/reservations",
            get(reservations::show).post(reservations::submit),
        )
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(public_routes())
        .nest("/admin", admin::routes())
        .nest("/api", api::routes())
}
