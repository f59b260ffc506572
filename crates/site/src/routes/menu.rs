//! Public menu page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use bistro_core::{MenuCategory, MenuSelection};

use crate::error::Result;
use crate::filters;
use crate::state::AppState;
use crate::views::{MenuItemView, SiteChrome};

/// A tab in the category bar.
#[derive(Debug, Clone)]
pub struct MenuTab {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Menu page template.
#[derive(Template, WebTemplate)]
#[template(path = "menu.html")]
pub struct MenuTemplate {
    pub site: SiteChrome,
    pub current_path: &'static str,
    pub tabs: Vec<MenuTab>,
    pub items: Vec<MenuItemView>,
}

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub category: Option<String>,
}

fn tabs(selected: MenuSelection) -> Vec<MenuTab> {
    let mut tabs = vec![
        MenuTab {
            key: MenuSelection::All.as_str(),
            label: "Todos",
            active: selected == MenuSelection::All,
        },
        MenuTab {
            key: MenuSelection::Daily.as_str(),
            label: "Menu do Dia",
            active: selected == MenuSelection::Daily,
        },
    ];
    tabs.extend(MenuCategory::ALL.iter().map(|&category| MenuTab {
        key: category.as_str(),
        label: category.label(),
        active: selected == MenuSelection::Category(category),
    }));
    tabs
}

/// Display the public menu, filtered by `?category=`.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> Result<impl IntoResponse> {
    let selection = MenuSelection::from_param(query.category.as_deref());
    let now = state.now();
    let items = state
        .menu()
        .list()?
        .iter()
        .filter(|item| selection.matches(item, now))
        .map(MenuItemView::from)
        .collect();

    Ok(MenuTemplate {
        site: SiteChrome::load(&state)?,
        current_path: "/menu",
        tabs: tabs(selection),
        items,
    })
}
