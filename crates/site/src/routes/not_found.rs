//! Fallback for unknown paths.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::filters;
use crate::state::AppState;
use crate::views::SiteChrome;

/// 404 page template.
#[derive(Template, WebTemplate)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub site: SiteChrome,
    pub current_path: &'static str,
    pub path: String,
}

/// Render the 404 page.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    tracing::warn!(path = %uri.path(), "Unknown path requested");

    match SiteChrome::load(&state) {
        Ok(site) => (
            StatusCode::NOT_FOUND,
            NotFoundTemplate {
                site,
                current_path: "",
                path: uri.path().to_string(),
            },
        )
            .into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "Página não encontrada").into_response(),
    }
}
