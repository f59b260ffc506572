//! Admin settings: restaurant details, opening hours, capacity and theme.
//!
//! The theme lives in two places: the [`ThemeStore`](bistro_core::ThemeStore)
//! that styles every page, and the `theme` field of the restaurant settings.
//! Saving or resetting the theme updates both, and the settings copy is
//! loaded from the store when the state is built.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use chrono::Weekday;
use serde::Deserialize;
use tracing::instrument;

use bistro_core::restaurant::{WEEK, weekday_key, weekday_label};
use bistro_core::theme::presets;
use bistro_core::{Capacity, DayHours, RestaurantConfig, Theme, ThemePatch, ValidationError};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::state::AppState;
use crate::views::{AdminChrome, Flash, ThemeView};

use super::{FlashParams, with_error};

const SETTINGS_PATH: &str = "/admin/settings";

const MESSAGES: &[(&str, &str)] = &[
    ("saved", "Configurações salvas com sucesso!"),
    ("theme", "Tema atualizado com sucesso!"),
    ("theme_reset", "Tema restaurado para o padrão."),
];

/// Fonts offered in the typography selects.
pub const FONT_OPTIONS: [&str; 10] = [
    "Playfair Display",
    "Montserrat",
    "Cormorant Garamond",
    "Noto Serif",
    "Lato",
    "Roboto",
    "Open Sans",
    "Noto Sans",
    "Merriweather",
    "Poppins",
];

// =============================================================================
// Views
// =============================================================================

/// One weekday row of the hours editor.
#[derive(Debug, Clone)]
pub struct DayForm {
    pub key: &'static str,
    pub label: &'static str,
    pub open: String,
    pub close: String,
    pub closed: bool,
}

impl DayForm {
    fn new(day: Weekday, hours: &DayHours) -> Self {
        let (open, close, closed) = match hours {
            DayHours::Open { open, close } => (open.to_string(), close.to_string(), false),
            DayHours::Closed => ("09:00".to_string(), "18:00".to_string(), true),
        };
        Self {
            key: weekday_key(day),
            label: weekday_label(day),
            open,
            close,
            closed,
        }
    }
}

/// A theme preset card.
#[derive(Debug, Clone)]
pub struct PresetView {
    pub name: &'static str,
    pub primary: String,
    pub secondary: String,
    pub active: bool,
}

/// A font option in a select.
#[derive(Debug, Clone)]
pub struct FontOption {
    pub name: &'static str,
    pub selected: bool,
}

fn font_options(current: &str) -> Vec<FontOption> {
    FONT_OPTIONS
        .iter()
        .map(|&name| FontOption {
            name,
            selected: name == current,
        })
        .collect()
}

/// Settings page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/settings.html")]
pub struct SettingsTemplate {
    pub chrome: AdminChrome,
    pub flash: Flash,
    pub name: String,
    pub logo_url: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub days: Vec<DayForm>,
    pub tables: u32,
    pub max_reservations_per_slot: u32,
    pub presets: Vec<PresetView>,
    pub theme: ThemeView,
    pub heading_fonts: Vec<FontOption>,
    pub body_fonts: Vec<FontOption>,
}

/// Display the settings page.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
) -> Result<impl IntoResponse> {
    let config = state.settings().load()?;
    let theme = state.theme().load_or_default();

    let presets = presets()
        .into_iter()
        .map(|preset| PresetView {
            name: preset.name,
            active: preset.theme == theme,
            primary: preset.theme.primary_color,
            secondary: preset.theme.secondary_color,
        })
        .collect();

    Ok(SettingsTemplate {
        chrome: AdminChrome::load(&state, SETTINGS_PATH)?,
        flash: Flash::from_params(params.success, params.error, MESSAGES),
        name: config.name,
        logo_url: config.logo_url.unwrap_or_default(),
        address: config.address,
        phone: config.phone,
        email: config.email,
        days: WEEK
            .iter()
            .map(|&day| DayForm::new(day, config.opening_hours.for_weekday(day)))
            .collect(),
        tables: config.capacity.tables,
        max_reservations_per_slot: config.capacity.max_reservations_per_slot,
        presets,
        heading_fonts: font_options(&theme.font_family.headings),
        body_fonts: font_options(&theme.font_family.body),
        theme: ThemeView::from(&theme),
    })
}

// =============================================================================
// Restaurant Settings
// =============================================================================

/// Apply the posted settings form to `config`.
///
/// Day rows use `{day}_open`, `{day}_close` and a `{day}_closed` checkbox.
fn apply_settings_form(
    mut config: RestaurantConfig,
    fields: &HashMap<String, String>,
) -> std::result::Result<RestaurantConfig, ValidationError> {
    let text = |key: &str| fields.get(key).map(|v| v.trim().to_string()).unwrap_or_default();

    config.name = text("name");
    config.logo_url = Some(text("logo_url")).filter(|url| !url.is_empty());
    config.address = text("address");
    config.phone = text("phone");
    config.email = text("email");

    for day in WEEK {
        let key = weekday_key(day);
        let hours = if fields.contains_key(&format!("{key}_closed")) {
            DayHours::Closed
        } else {
            DayHours::open(&text(&format!("{key}_open")), &text(&format!("{key}_close")))
                .ok_or(ValidationError::InvalidHours(weekday_label(day)))?
        };
        config.opening_hours.set(day, hours);
    }

    let number = |key: &str| text(key).parse::<u32>().map_err(|_| ValidationError::InvalidCapacity);
    config.capacity = Capacity::new(number("tables")?, number("max_reservations_per_slot")?);

    config.validate()?;
    Ok(config)
}

/// Save restaurant details, hours and capacity.
#[instrument(skip(state, fields))]
pub async fn save(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Redirect> {
    let current = state.settings().load()?;
    let config = match apply_settings_form(current, &fields) {
        Ok(config) => config,
        Err(e) => return Ok(Redirect::to(&with_error(SETTINGS_PATH, &e.to_string()))),
    };

    state.settings().save(config)?;
    add_breadcrumb("settings", "Restaurant settings saved");
    tracing::info!("Restaurant settings saved");

    Ok(Redirect::to("/admin/settings?success=saved"))
}

// =============================================================================
// Theme
// =============================================================================

/// Theme form: either a preset name or custom colors and fonts.
#[derive(Debug, Default, Deserialize)]
pub struct ThemeForm {
    pub preset: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub heading_font: Option<String>,
    pub body_font: Option<String>,
}

impl ThemeForm {
    /// Resolve the submitted theme against the current one.
    fn resolve(self, current: Theme) -> std::result::Result<Theme, AppError> {
        if let Some(name) = self.preset.filter(|p| !p.is_empty()) {
            return presets()
                .into_iter()
                .find(|preset| preset.name == name)
                .map(|preset| preset.theme)
                .ok_or_else(|| AppError::BadRequest(format!("Tema desconhecido: {name}")));
        }

        let theme = current.patched(ThemePatch {
            primary_color: self.primary_color.map(|c| c.trim().to_string()),
            secondary_color: self.secondary_color.map(|c| c.trim().to_string()),
            accent_color: self.accent_color.map(|c| c.trim().to_string()),
            heading_font: self.heading_font,
            body_font: self.body_font,
        });
        theme.validate()?;
        Ok(theme)
    }
}

/// Store `theme` and mirror it into the restaurant settings.
fn store_theme(state: &AppState, theme: Theme) -> Result<()> {
    state.theme().save(&theme)?;
    let mut config = state.settings().load()?;
    config.theme = theme;
    state.settings().save(config)?;
    Ok(())
}

/// Apply a preset or custom theme.
#[instrument(skip(state))]
pub async fn save_theme(
    State(state): State<AppState>,
    Form(form): Form<ThemeForm>,
) -> Result<Redirect> {
    let theme = match form.resolve(state.theme().load_or_default()) {
        Ok(theme) => theme,
        Err(AppError::Validation(e)) => {
            return Ok(Redirect::to(&with_error(SETTINGS_PATH, &e.to_string())));
        }
        Err(e) => return Err(e),
    };

    store_theme(&state, theme)?;
    add_breadcrumb("settings", "Theme saved");
    tracing::info!("Theme saved");

    Ok(Redirect::to("/admin/settings?success=theme"))
}

/// Restore the default theme.
#[instrument(skip(state))]
pub async fn reset_theme(State(state): State<AppState>) -> Result<Redirect> {
    let theme = state.theme().reset()?;
    let mut config = state.settings().load()?;
    config.theme = theme;
    state.settings().save(config)?;
    add_breadcrumb("settings", "Theme reset");
    tracing::info!("Theme reset to default");

    Ok(Redirect::to("/admin/settings?success=theme_reset"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bistro_core::{TimeOfDay, seed};

    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        let mut map: HashMap<String, String> = WEEK
            .iter()
            .flat_map(|&day| {
                let key = weekday_key(day);
                [
                    (format!("{key}_open"), "11:30".to_string()),
                    (format!("{key}_close"), "22:00".to_string()),
                ]
            })
            .collect();
        for (k, v) in [
            ("name", "Bistro Novo"),
            ("logo_url", ""),
            ("address", "Rua Nova, 1"),
            ("phone", "(11) 1234-5678"),
            ("email", "ola@bistro.com"),
            ("tables", "12"),
            ("max_reservations_per_slot", "3"),
        ]
        .iter()
        .chain(pairs)
        {
            map.insert((*k).to_string(), (*v).to_string());
        }
        map
    }

    #[test]
    fn test_settings_form_applies() {
        let config = apply_settings_form(
            seed::restaurant_config(),
            &fields(&[("sunday_closed", "on")]),
        )
        .unwrap();
        assert_eq!(config.name, "Bistro Novo");
        assert!(config.logo_url.is_none());
        assert_eq!(config.capacity, Capacity::new(12, 3));
        assert!(config.opening_hours.sunday.is_closed());
        assert!(
            config
                .opening_hours
                .monday
                .contains(TimeOfDay::parse("21:30").unwrap())
        );
    }

    #[test]
    fn test_settings_form_rejects_bad_values() {
        assert_eq!(
            apply_settings_form(seed::restaurant_config(), &fields(&[("tables", "0")]))
                .unwrap_err(),
            ValidationError::InvalidCapacity
        );
        assert_eq!(
            apply_settings_form(
                seed::restaurant_config(),
                &fields(&[("friday_close", "10:00")])
            )
            .unwrap_err(),
            ValidationError::InvalidHours("Sexta-feira")
        );
        assert_eq!(
            apply_settings_form(seed::restaurant_config(), &fields(&[("name", " ")]))
                .unwrap_err(),
            ValidationError::MissingRestaurantName
        );
    }

    #[test]
    fn test_theme_form_preset_and_custom() {
        let preset = ThemeForm {
            preset: Some("Italiano".to_string()),
            ..ThemeForm::default()
        }
        .resolve(Theme::default())
        .unwrap();
        assert_eq!(preset.primary_color, "#107A46");

        let custom = ThemeForm {
            accent_color: Some(" #FFFFFF ".to_string()),
            heading_font: Some("Montserrat".to_string()),
            ..ThemeForm::default()
        }
        .resolve(Theme::default())
        .unwrap();
        assert_eq!(custom.accent_color, "#FFFFFF");
        assert_eq!(custom.font_family.headings, "Montserrat");
        assert_eq!(custom.primary_color, "#8B0000");

        assert!(matches!(
            ThemeForm {
                primary_color: Some("vermelho".to_string()),
                ..ThemeForm::default()
            }
            .resolve(Theme::default()),
            Err(AppError::Validation(ValidationError::InvalidColor(_)))
        ));
        assert!(matches!(
            ThemeForm {
                preset: Some("Nórdico".to_string()),
                ..ThemeForm::default()
            }
            .resolve(Theme::default()),
            Err(AppError::BadRequest(_))
        ));
    }
}
