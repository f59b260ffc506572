//! Restaurant settings store.

use std::sync::RwLock;

use bistro_core::{RepositoryError, RestaurantConfig, SettingsRepository};

use super::{read, write};

/// Holds the single restaurant configuration.
#[derive(Debug)]
pub struct MemorySettingsStore {
    config: RwLock<RestaurantConfig>,
}

impl MemorySettingsStore {
    #[must_use]
    pub const fn new(config: RestaurantConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }
}

impl SettingsRepository for MemorySettingsStore {
    fn load(&self) -> Result<RestaurantConfig, RepositoryError> {
        Ok(read(&self.config)?.clone())
    }

    fn save(&self, config: RestaurantConfig) -> Result<(), RepositoryError> {
        *write(&self.config)? = config;
        Ok(())
    }
}
