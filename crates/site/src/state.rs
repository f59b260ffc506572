//! Application state shared across handlers.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use bistro_core::{
    MenuRepository, NotificationRepository, ReservationRepository, SettingsRepository, ThemeStore,
    seed,
};

use crate::config::SiteConfig;
use crate::db::{
    MemoryMenuStore, MemoryNotificationStore, MemoryReservationStore, MemorySettingsStore,
};
use crate::services::{BookingService, FileThemeStore, MemoryThemeStore};

/// Source of the current local time. Tests pin it to a fixed instant.
pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// stores, the theme store and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    menu: Arc<dyn MenuRepository>,
    reservations: Arc<dyn ReservationRepository>,
    notifications: Arc<dyn NotificationRepository>,
    settings: Arc<dyn SettingsRepository>,
    theme: Arc<dyn ThemeStore>,
    clock: Clock,
}

impl AppState {
    /// Build the state used by the server: in-memory stores (seeded when
    /// `config.seed` is set) and the file-backed theme store.
    #[must_use]
    pub fn from_config(config: SiteConfig) -> Self {
        let now = Local::now().naive_local();
        let (menu, reservations, notifications) = if config.seed {
            (
                seed::menu_items(now),
                seed::reservations(now),
                seed::notifications(now),
            )
        } else {
            (Vec::new(), Vec::new(), Vec::new())
        };
        let theme = Arc::new(FileThemeStore::new(config.theme_path.clone()));

        Self::builder(config)
            .menu(Arc::new(MemoryMenuStore::new(menu)))
            .reservations(Arc::new(MemoryReservationStore::new(reservations)))
            .notifications(Arc::new(MemoryNotificationStore::new(notifications)))
            .theme(theme)
            .build()
    }

    /// Start from empty in-memory stores and the seed restaurant settings.
    #[must_use]
    pub fn builder(config: SiteConfig) -> AppStateBuilder {
        AppStateBuilder {
            config,
            menu: Arc::new(MemoryMenuStore::default()),
            reservations: Arc::new(MemoryReservationStore::default()),
            notifications: Arc::new(MemoryNotificationStore::default()),
            settings: Arc::new(MemorySettingsStore::new(seed::restaurant_config())),
            theme: Arc::new(MemoryThemeStore::default()),
            clock: Arc::new(|| Local::now().naive_local()),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn menu(&self) -> &dyn MenuRepository {
        self.inner.menu.as_ref()
    }

    #[must_use]
    pub fn reservations(&self) -> &dyn ReservationRepository {
        self.inner.reservations.as_ref()
    }

    #[must_use]
    pub fn notifications(&self) -> &dyn NotificationRepository {
        self.inner.notifications.as_ref()
    }

    #[must_use]
    pub fn settings(&self) -> &dyn SettingsRepository {
        self.inner.settings.as_ref()
    }

    #[must_use]
    pub fn theme(&self) -> &dyn ThemeStore {
        self.inner.theme.as_ref()
    }

    /// Current local date and time.
    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        (self.inner.clock)()
    }

    /// Reservation flow over this state's stores.
    #[must_use]
    pub fn booking(&self) -> BookingService<'_> {
        BookingService::new(self.reservations(), self.notifications(), self.settings())
    }
}

/// Builder for [`AppState`], used to swap individual stores.
pub struct AppStateBuilder {
    config: SiteConfig,
    menu: Arc<dyn MenuRepository>,
    reservations: Arc<dyn ReservationRepository>,
    notifications: Arc<dyn NotificationRepository>,
    settings: Arc<dyn SettingsRepository>,
    theme: Arc<dyn ThemeStore>,
    clock: Clock,
}

impl AppStateBuilder {
    #[must_use]
    pub fn menu(mut self, menu: Arc<dyn MenuRepository>) -> Self {
        self.menu = menu;
        self
    }

    #[must_use]
    pub fn reservations(mut self, reservations: Arc<dyn ReservationRepository>) -> Self {
        self.reservations = reservations;
        self
    }

    #[must_use]
    pub fn notifications(mut self, notifications: Arc<dyn NotificationRepository>) -> Self {
        self.notifications = notifications;
        self
    }

    #[must_use]
    pub fn settings(mut self, settings: Arc<dyn SettingsRepository>) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: Arc<dyn ThemeStore>) -> Self {
        self.theme = theme;
        self
    }

    /// Pin "now" to a fixed instant.
    #[must_use]
    pub fn fixed_time(mut self, now: NaiveDateTime) -> Self {
        self.clock = Arc::new(move || now);
        self
    }

    /// Finish the state. The restaurant settings pick up the stored theme so
    /// that `RestaurantConfig::theme` matches what the pages render.
    #[must_use]
    pub fn build(self) -> AppState {
        sync_theme(self.settings.as_ref(), self.theme.as_ref());
        AppState {
            inner: Arc::new(AppStateInner {
                config: self.config,
                menu: self.menu,
                reservations: self.reservations,
                notifications: self.notifications,
                settings: self.settings,
                theme: self.theme,
                clock: self.clock,
            }),
        }
    }
}

fn sync_theme(settings: &dyn SettingsRepository, theme: &dyn ThemeStore) {
    let stored = theme.load_or_default();
    match settings.load() {
        Ok(config) if config.theme == stored => {}
        Ok(mut config) => {
            config.theme = stored;
            if let Err(e) = settings.save(config) {
                tracing::warn!(error = %e, "Could not copy stored theme into settings");
            }
        }
        Err(e) => tracing::warn!(error = %e, "Could not load settings to sync theme"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bistro_core::Theme;
    use bistro_core::theme::presets;

    use super::*;

    fn config() -> SiteConfig {
        SiteConfig::from_lookup(|_| None).unwrap()
    }

    #[test]
    fn test_build_copies_stored_theme_into_settings() {
        let store = MemoryThemeStore::default();
        let italian = presets().into_iter().nth(2).unwrap().theme;
        store.save(&italian).unwrap();

        let state = AppState::builder(config()).theme(Arc::new(store)).build();

        assert_eq!(state.settings().load().unwrap().theme, italian);
    }

    #[test]
    fn test_build_without_stored_theme_keeps_default() {
        let state = AppState::builder(config()).build();
        assert_eq!(state.settings().load().unwrap().theme, Theme::default());
    }
}
