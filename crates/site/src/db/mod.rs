//! In-memory storage backends.
//!
//! Each store implements one of the repository traits from `bistro_core` and
//! keeps its rows in a `RwLock<Vec<_>>`. Nothing here survives a restart;
//! the theme, which must persist, lives in [`crate::services::theme_store`].
//!
//! # Stores
//!
//! - [`MemoryMenuStore`] - menu items
//! - [`MemoryReservationStore`] - reservations
//! - [`MemoryNotificationStore`] - admin notification feed
//! - [`MemorySettingsStore`] - restaurant configuration

mod menu;
mod notifications;
mod reservations;
mod settings;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use bistro_core::RepositoryError;

pub use menu::MemoryMenuStore;
pub use notifications::MemoryNotificationStore;
pub use reservations::MemoryReservationStore;
pub use settings::MemorySettingsStore;

/// Acquire a read guard, reporting a poisoned lock as unavailable storage.
fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, RepositoryError> {
    lock.read()
        .map_err(|_| RepositoryError::Unavailable("store lock poisoned".to_string()))
}

/// Acquire a write guard, reporting a poisoned lock as unavailable storage.
fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, RepositoryError> {
    lock.write()
        .map_err(|_| RepositoryError::Unavailable("store lock poisoned".to_string()))
}

/// Next sequential ID after the largest one in use.
fn next_id<T>(rows: &[T], id: impl Fn(&T) -> i32) -> i32 {
    rows.iter().map(id).max().unwrap_or(0).saturating_add(1)
}
