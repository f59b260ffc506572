//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use bistro_core::menu::active_specials;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;
use crate::views::{MenuItemView, SiteChrome};

/// Specials shown on the home page.
const HOME_SPECIALS: usize = 3;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub site: SiteChrome,
    pub current_path: &'static str,
    pub specials: Vec<MenuItemView>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.menu().list()?;
    let specials = active_specials(&items, state.now())
        .iter()
        .take(HOME_SPECIALS)
        .map(MenuItemView::from)
        .collect();

    Ok(HomeTemplate {
        site: SiteChrome::load(&state)?,
        current_path: "/",
        specials,
    })
}
