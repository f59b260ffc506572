//! Theme file management.
//!
//! Operates on the same JSON document the site writes, so a reset here is
//! picked up the next time the site loads its theme.
//!
//! # Usage
//!
//! ```bash
//! bistro theme show
//! bistro theme reset --path data/theme.json
//! ```
//!
//! # Environment Variables
//!
//! - `BISTRO_THEME_PATH` - Theme file used when `--path` is not given

use std::path::PathBuf;

use bistro_core::ThemeStore;
use bistro_site::services::FileThemeStore;

use super::CommandError;

const DEFAULT_THEME_PATH: &str = "data/theme.json";

/// Resolve the theme file: `--path`, then `BISTRO_THEME_PATH`, then the default.
fn theme_path(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| {
        dotenvy::dotenv().ok();
        std::env::var("BISTRO_THEME_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_THEME_PATH), PathBuf::from)
    })
}

/// Print the stored theme, or the default when nothing is stored.
///
/// # Errors
///
/// Returns [`CommandError`] if the theme file cannot be read or parsed.
pub fn show(path: Option<PathBuf>) -> Result<(), CommandError> {
    let output = render_theme(&FileThemeStore::new(theme_path(path)))?;

    #[allow(clippy::print_stdout)]
    {
        println!("{output}");
    }
    Ok(())
}

fn render_theme(store: &FileThemeStore) -> Result<String, CommandError> {
    let theme = match store.load()? {
        Some(theme) => theme,
        None => {
            tracing::info!(path = %store.path().display(), "No stored theme, showing default");
            bistro_core::Theme::default()
        }
    };
    Ok(serde_json::to_string_pretty(&theme)?)
}

/// Restore the default theme in the theme file.
///
/// # Errors
///
/// Returns [`CommandError`] if the theme file cannot be written.
pub fn reset(path: Option<PathBuf>) -> Result<(), CommandError> {
    let store = FileThemeStore::new(theme_path(path));
    let theme = store.reset()?;
    tracing::debug!(path = %store.path().display(), "Theme file reset");

    #[allow(clippy::print_stdout)]
    {
        println!("Theme reset successfully!");
        println!("  File: {}", store.path().display());
        println!("  Primary: {}", theme.primary_color);
        println!(
            "  Fonts: {} / {}",
            theme.font_family.headings, theme.font_family.body
        );
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bistro_core::Theme;
    use bistro_core::theme::presets;

    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = PathBuf::from("/tmp/custom-theme.json");
        assert_eq!(theme_path(Some(path.clone())), path);
    }

    #[test]
    fn test_reset_overwrites_stored_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        let store = FileThemeStore::new(&path);
        let italian = presets().into_iter().nth(2).unwrap().theme;
        store.save(&italian).unwrap();

        reset(Some(path.clone())).unwrap();

        assert_eq!(FileThemeStore::new(&path).load().unwrap(), Some(Theme::default()));
    }

    #[test]
    fn test_show_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        show(Some(dir.path().join("missing.json"))).unwrap();
        assert!(!dir.path().join("missing.json").exists());
    }

    #[test]
    fn test_show_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(show(Some(path)), Err(CommandError::ThemeStore(_))));
    }

    #[test]
    fn test_rendered_theme_is_parseable() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileThemeStore::new(dir.path().join("theme.json"));
        let italian = presets().into_iter().nth(2).unwrap().theme;
        store.save(&italian).unwrap();

        let output = render_theme(&store).unwrap();
        let parsed: Theme = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, italian);
    }
}
