//! Theme persistence.
//!
//! [`FileThemeStore`] keeps a small JSON key-value document on disk and stores
//! the theme blob under [`THEME_STORAGE_KEY`]. Other keys in the document are
//! left untouched. [`MemoryThemeStore`] is used when no file should be written.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{Map, Value};

use bistro_core::theme::THEME_STORAGE_KEY;
use bistro_core::{Theme, ThemeStore, ThemeStoreError};

/// Theme stored in a JSON file.
#[derive(Debug)]
pub struct FileThemeStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles on the document.
    lock: Mutex<()>,
}

impl FileThemeStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document; a missing file is an empty document.
    fn read_document(&self) -> Result<Map<String, Value>, ThemeStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<(), ThemeStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>, ThemeStoreError> {
        self.lock
            .lock()
            .map_err(|_| ThemeStoreError::Unavailable("theme file lock poisoned".to_string()))
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        let _guard = self.guard()?;
        let mut document = self.read_document()?;
        document
            .remove(THEME_STORAGE_KEY)
            .map(serde_json::from_value)
            .transpose()
            .map_err(Into::into)
    }

    fn save(&self, theme: &Theme) -> Result<(), ThemeStoreError> {
        let _guard = self.guard()?;
        // An unreadable document is replaced rather than blocking the save.
        let mut document = self.read_document().unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Replacing unreadable theme file");
            Map::new()
        });
        document.insert(THEME_STORAGE_KEY.to_string(), serde_json::to_value(theme)?);
        self.write_document(&document)?;
        tracing::debug!(path = %self.path.display(), "Theme saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), ThemeStoreError> {
        let _guard = self.guard()?;
        let mut document = self.read_document()?;
        if document.remove(THEME_STORAGE_KEY).is_some() {
            self.write_document(&document)?;
        }
        Ok(())
    }
}

/// Theme held in memory only.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    theme: Mutex<Option<Theme>>,
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        self.theme
            .lock()
            .map(|theme| theme.clone())
            .map_err(|_| ThemeStoreError::Unavailable("theme lock poisoned".to_string()))
    }

    fn save(&self, theme: &Theme) -> Result<(), ThemeStoreError> {
        *self
            .theme
            .lock()
            .map_err(|_| ThemeStoreError::Unavailable("theme lock poisoned".to_string()))? =
            Some(theme.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), ThemeStoreError> {
        *self
            .theme
            .lock()
            .map_err(|_| ThemeStoreError::Unavailable("theme lock poisoned".to_string()))? = None;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bistro_core::theme::presets;

    use super::*;

    fn italiano() -> Theme {
        presets()
            .into_iter()
            .find(|p| p.name == "Italiano")
            .unwrap()
            .theme
    }

    #[test]
    fn test_missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileThemeStore::new(dir.path().join("theme.json"));
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(store.load_or_default(), Theme::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileThemeStore::new(dir.path().join("nested").join("theme.json"));
        store.save(&italiano()).unwrap();
        assert_eq!(store.load().unwrap(), Some(italiano()));

        let raw = fs::read_to_string(store.path()).unwrap();
        let document: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(document[THEME_STORAGE_KEY]["primary_color"], "#107A46");
    }

    #[test]
    fn test_other_keys_survive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, r#"{"language":"pt-BR"}"#).unwrap();

        let store = FileThemeStore::new(&path);
        store.save(&italiano()).unwrap();
        store.clear().unwrap();

        let document: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(document["language"], "pt-BR");
        assert!(document.get(THEME_STORAGE_KEY).is_none());
        assert_eq!(store.load_or_default(), Theme::default());
    }

    #[test]
    fn test_corrupt_entry_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, r#"{"restaurantTheme":{"primary_color":42}}"#).unwrap();

        let store = FileThemeStore::new(&path);
        assert!(store.load().is_err());
        assert_eq!(store.load_or_default(), Theme::default());

        fs::write(&path, "not json").unwrap();
        assert_eq!(store.load_or_default(), Theme::default());
        store.save(&italiano()).unwrap();
        assert_eq!(store.load().unwrap(), Some(italiano()));
    }

    #[test]
    fn test_reset_saves_default() {
        let store = MemoryThemeStore::default();
        store.save(&italiano()).unwrap();
        assert_eq!(store.reset().unwrap(), Theme::default());
        assert_eq!(store.load().unwrap(), Some(Theme::default()));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
