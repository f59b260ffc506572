//! Site theme: colors and fonts, the preset catalog, and the storage
//! contract used to persist the chosen theme.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::ValidationError;

/// Key under which the theme blob is stored.
pub const THEME_STORAGE_KEY: &str = "restaurantTheme";

/// Heading and body font names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamily {
    pub headings: String,
    pub body: String,
}

/// Colors and fonts applied to every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub font_family: FontFamily,
}

impl Theme {
    fn from_parts(primary: &str, secondary: &str, accent: &str, headings: &str, body: &str) -> Self {
        Self {
            primary_color: primary.to_string(),
            secondary_color: secondary.to_string(),
            accent_color: accent.to_string(),
            font_family: FontFamily {
                headings: headings.to_string(),
                body: body.to_string(),
            },
        }
    }

    /// Colors must be `#RRGGBB`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidColor`] for the first bad color.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for color in [
            &self.primary_color,
            &self.secondary_color,
            &self.accent_color,
        ] {
            if !is_hex_color(color) {
                return Err(ValidationError::InvalidColor(color.clone()));
            }
        }
        Ok(())
    }

    /// Merge a partial update into this theme.
    #[must_use]
    pub fn patched(mut self, patch: ThemePatch) -> Self {
        if let Some(color) = patch.primary_color {
            self.primary_color = color;
        }
        if let Some(color) = patch.secondary_color {
            self.secondary_color = color;
        }
        if let Some(color) = patch.accent_color {
            self.accent_color = color;
        }
        if let Some(font) = patch.heading_font.filter(|f| !f.trim().is_empty()) {
            self.font_family.headings = font;
        }
        if let Some(font) = patch.body_font.filter(|f| !f.trim().is_empty()) {
            self.font_family.body = font;
        }
        self
    }
}

impl Default for Theme {
    /// The "Bistro Clássico" palette.
    fn default() -> Self {
        Self::from_parts("#8B0000", "#4E3524", "#F5F5DC", "Playfair Display", "Lato")
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

/// A partial theme update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePatch {
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub secondary_color: Option<String>,
    #[serde(default)]
    pub accent_color: Option<String>,
    #[serde(default)]
    pub heading_font: Option<String>,
    #[serde(default)]
    pub body_font: Option<String>,
}

/// A named theme offered on the settings page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePreset {
    pub name: &'static str,
    pub theme: Theme,
}

/// The built-in presets; the first one is the default theme.
#[must_use]
pub fn presets() -> Vec<ThemePreset> {
    vec![
        ThemePreset {
            name: "Bistro Clássico",
            theme: Theme::default(),
        },
        ThemePreset {
            name: "Contemporâneo",
            theme: Theme::from_parts("#1A365D", "#2D3748", "#EDF2F7", "Montserrat", "Roboto"),
        },
        ThemePreset {
            name: "Italiano",
            theme: Theme::from_parts(
                "#107A46",
                "#991B1B",
                "#FFF9E6",
                "Cormorant Garamond",
                "Open Sans",
            ),
        },
        ThemePreset {
            name: "Asiático",
            theme: Theme::from_parts("#C53030", "#2D3748", "#F0FFF4", "Noto Serif", "Noto Sans"),
        },
    ]
}

/// Errors from a [`ThemeStore`] backend.
#[derive(Debug, Error)]
pub enum ThemeStoreError {
    #[error("theme storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("theme serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("theme storage unavailable: {0}")]
    Unavailable(String),
}

/// Persistence contract for the site theme.
///
/// Implementations store a single theme under [`THEME_STORAGE_KEY`].
pub trait ThemeStore: Send + Sync {
    /// Load the stored theme, `None` if nothing has been saved.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeStoreError`] if the backend cannot be read.
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError>;

    /// Replace the stored theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeStoreError`] if the backend cannot be written.
    fn save(&self, theme: &Theme) -> Result<(), ThemeStoreError>;

    /// Forget the stored theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeStoreError`] if the backend cannot be written.
    fn clear(&self) -> Result<(), ThemeStoreError>;

    /// Stored theme, or the default when nothing usable is stored.
    fn load_or_default(&self) -> Theme {
        self.load().ok().flatten().unwrap_or_default()
    }

    /// Restore and persist the default theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeStoreError`] if the backend cannot be written.
    fn reset(&self) -> Result<Theme, ThemeStoreError> {
        let theme = Theme::default();
        self.save(&theme)?;
        Ok(theme)
    }
}
