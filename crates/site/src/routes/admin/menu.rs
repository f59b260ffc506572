//! Admin menu management.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::instrument;

use bistro_core::{
    CurrencyCode, DietaryInfo, MenuCategory, MenuFilter, MenuItem, MenuItemDraft, MenuItemId,
    NewNotification, Price, ValidationError,
};

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::state::AppState;
use crate::views::{AdminChrome, Flash, MenuItemView};

use super::with_error;

const MESSAGES: &[(&str, &str)] = &[
    ("created", "Item adicionado ao menu."),
    ("updated", "Item atualizado."),
    ("deleted", "Item removido do menu."),
];

/// `datetime-local` input format.
const DATETIME_INPUT: &str = "%Y-%m-%dT%H:%M";

// =============================================================================
// Form
// =============================================================================

/// Menu item form as posted by the browser. Unchecked boxes are absent.
#[derive(Debug, Default, Deserialize)]
pub struct MenuItemForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub category: String,
    pub is_available: Option<String>,
    pub is_daily_special: Option<String>,
    #[serde(default)]
    pub valid_until: String,
    pub is_vegetarian: Option<String>,
    pub is_vegan: Option<String>,
    pub is_gluten_free: Option<String>,
    #[serde(default)]
    pub allergens: String,
}

impl MenuItemForm {
    /// Parse and validate the form into a draft.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn into_draft(self) -> std::result::Result<MenuItemDraft, ValidationError> {
        if self.name.trim().is_empty() || self.description.trim().is_empty() {
            return Err(ValidationError::MissingMenuFields);
        }
        let price = Price::parse(&self.price, CurrencyCode::BRL)?;
        let category = self
            .category
            .parse::<MenuCategory>()
            .map_err(|_| ValidationError::InvalidCategory(self.category.clone()))?;

        let valid_until = match self.valid_until.trim() {
            "" => None,
            raw => Some(
                NaiveDateTime::parse_from_str(raw, DATETIME_INPUT)
                    .map_err(|_| ValidationError::InvalidDate(raw.to_string()))?,
            ),
        };

        let dietary_info = DietaryInfo {
            is_vegetarian: self.is_vegetarian.is_some(),
            is_vegan: self.is_vegan.is_some(),
            is_gluten_free: self.is_gluten_free.is_some(),
            contains_allergens: self
                .allergens
                .split(',')
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_string)
                .collect(),
        };

        MenuItemDraft {
            name: self.name,
            description: self.description,
            price,
            image_url: Some(self.image_url),
            category,
            is_available: self.is_available.is_some(),
            is_daily_special: self.is_daily_special.is_some(),
            valid_until,
            dietary_info: Some(dietary_info),
        }
        .validate()
    }
}

/// Values to prefill the item form with.
#[derive(Debug, Clone)]
pub struct MenuFormView {
    pub action: String,
    pub title: &'static str,
    pub submit_label: &'static str,
    pub is_edit: bool,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
    pub category: &'static str,
    pub is_available: bool,
    pub is_daily_special: bool,
    pub valid_until: String,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    pub allergens: String,
}

impl MenuFormView {
    fn new_item() -> Self {
        Self {
            action: "/admin/menu".to_string(),
            title: "Adicionar Item",
            submit_label: "Adicionar",
            is_edit: false,
            name: String::new(),
            description: String::new(),
            price: String::new(),
            image_url: String::new(),
            category: MenuCategory::default().as_str(),
            is_available: true,
            is_daily_special: false,
            valid_until: String::new(),
            is_vegetarian: false,
            is_vegan: false,
            is_gluten_free: false,
            allergens: String::new(),
        }
    }

    fn edit(item: &MenuItem) -> Self {
        let dietary = item.dietary_info.clone().unwrap_or_default();
        Self {
            action: format!("/admin/menu/{}", item.id),
            title: "Editar Item",
            submit_label: "Salvar Alterações",
            is_edit: true,
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.input_value(),
            image_url: item.image_url.clone().unwrap_or_default(),
            category: item.category.as_str(),
            is_available: item.is_available,
            is_daily_special: item.is_daily_special,
            valid_until: item
                .valid_until
                .map(|at| at.format(DATETIME_INPUT).to_string())
                .unwrap_or_default(),
            is_vegetarian: dietary.is_vegetarian,
            is_vegan: dietary.is_vegan,
            is_gluten_free: dietary.is_gluten_free,
            allergens: dietary.contains_allergens.join(", "),
        }
    }
}

// =============================================================================
// Page
// =============================================================================

/// A category in the filter tabs and the form select.
#[derive(Debug, Clone)]
pub struct CategoryOption {
    pub key: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Menu management template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/menu.html")]
pub struct MenuTemplate {
    pub chrome: AdminChrome,
    pub flash: Flash,
    pub query: String,
    pub category: String,
    pub categories: Vec<CategoryOption>,
    pub items: Vec<MenuItemView>,
    pub total: usize,
    pub form: MenuFormView,
}

#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub edit: Option<i32>,
    pub success: Option<String>,
    pub error: Option<String>,
}

/// List, search and edit menu items.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> Result<impl IntoResponse> {
    let category = query
        .category
        .as_deref()
        .and_then(|c| c.parse::<MenuCategory>().ok());
    let all = state.menu().list()?;
    let total = all.len();
    let items = MenuFilter::new(query.q.as_deref(), category)
        .apply(all)
        .iter()
        .map(MenuItemView::from)
        .collect();

    let form = match query.edit {
        Some(id) => MenuFormView::edit(&state.menu().get(MenuItemId::new(id))?),
        None => MenuFormView::new_item(),
    };

    let categories = MenuCategory::ALL
        .iter()
        .map(|&c| CategoryOption {
            key: c.as_str(),
            label: c.label(),
            selected: category == Some(c),
        })
        .collect();

    Ok(MenuTemplate {
        chrome: AdminChrome::load(&state, "/admin/menu")?,
        flash: Flash::from_params(query.success, query.error, MESSAGES),
        query: query.q.unwrap_or_default(),
        category: category.map(|c| c.as_str().to_string()).unwrap_or_default(),
        categories,
        items,
        total,
        form,
    })
}

/// Add a menu item.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<MenuItemForm>,
) -> Result<Redirect> {
    let draft = match form.into_draft() {
        Ok(draft) => draft,
        Err(e) => return Ok(Redirect::to(&with_error("/admin/menu", &e.to_string()))),
    };

    let item = state.menu().create(draft)?;
    add_breadcrumb("menu", &format!("Created menu item {}", item.id));
    tracing::info!(menu_item_id = %item.id, name = %item.name, "Menu item created");

    if let Err(e) = state
        .notifications()
        .create(NewNotification::for_menu_item(&item, state.now()))
    {
        tracing::warn!(error = %e, "Failed to record menu notification");
    }

    Ok(Redirect::to("/admin/menu?success=created"))
}

/// Save changes to a menu item.
#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<MenuItemForm>,
) -> Result<Redirect> {
    let draft = match form.into_draft() {
        Ok(draft) => draft,
        Err(e) => {
            let back = format!("/admin/menu?edit={id}");
            return Ok(Redirect::to(&with_error(&back, &e.to_string())));
        }
    };

    let item = state.menu().update(MenuItemId::new(id), draft)?;
    add_breadcrumb("menu", &format!("Updated menu item {}", item.id));
    tracing::info!(menu_item_id = %item.id, "Menu item updated");

    Ok(Redirect::to("/admin/menu?success=updated"))
}

/// Remove a menu item.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Redirect> {
    state.menu().delete(MenuItemId::new(id))?;
    add_breadcrumb("menu", &format!("Deleted menu item {id}"));
    tracing::info!(menu_item_id = id, "Menu item deleted");

    Ok(Redirect::to("/admin/menu?success=deleted"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form() -> MenuItemForm {
        MenuItemForm {
            name: " Risoto de Cogumelos ".to_string(),
            description: "Arroz arbóreo com cogumelos frescos".to_string(),
            price: "62,90".to_string(),
            category: "main".to_string(),
            is_available: Some("on".to_string()),
            is_vegetarian: Some("on".to_string()),
            allergens: "lactose, , glúten".to_string(),
            ..MenuItemForm::default()
        }
    }

    #[test]
    fn test_form_into_draft() {
        let draft = form().into_draft().unwrap();
        assert_eq!(draft.name, "Risoto de Cogumelos");
        assert_eq!(draft.price, Price::from_cents(6290));
        assert_eq!(draft.category, MenuCategory::Main);
        assert!(draft.is_available);
        assert!(!draft.is_daily_special);
        assert!(draft.image_url.is_none());
        let dietary = draft.dietary_info.unwrap();
        assert!(dietary.is_vegetarian);
        assert_eq!(dietary.contains_allergens, vec!["lactose", "glúten"]);
    }

    #[test]
    fn test_form_rejections() {
        let mut blank = form();
        blank.description = "  ".to_string();
        assert_eq!(
            blank.into_draft().unwrap_err(),
            ValidationError::MissingMenuFields
        );

        let mut free = form();
        free.price = "0".to_string();
        assert_eq!(
            free.into_draft().unwrap_err(),
            ValidationError::NonPositivePrice
        );

        let mut garbage = form();
        garbage.price = "abc".to_string();
        assert!(matches!(
            garbage.into_draft(),
            Err(ValidationError::InvalidPrice(_))
        ));

        let mut unknown = form();
        unknown.category = "brunch".to_string();
        assert!(matches!(
            unknown.into_draft(),
            Err(ValidationError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_valid_until_round_trips_through_input() {
        let mut special = form();
        special.is_daily_special = Some("on".to_string());
        special.valid_until = "2026-10-19T23:59".to_string();
        let draft = special.into_draft().unwrap();
        let item = MenuItem::from_draft(MenuItemId::new(9), draft);
        assert_eq!(MenuFormView::edit(&item).valid_until, "2026-10-19T23:59");
    }
}
