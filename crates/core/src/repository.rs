//! Storage traits.
//!
//! The site only talks to storage through these traits. They are
//! synchronous: the in-memory backends never block, and a database-backed
//! implementation can wrap its own runtime handle.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::menu::{MenuItem, MenuItemDraft};
use crate::notification::{NewNotification, Notification};
use crate::reservation::{NewReservation, Reservation};
use crate::restaurant::RestaurantConfig;
use crate::types::{MenuItemId, NotificationId, ReservationId, ReservationStatus};

/// Errors returned by repository implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl RepositoryError {
    #[must_use]
    pub const fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }
}

type Result<T> = std::result::Result<T, RepositoryError>;

/// Menu item storage.
pub trait MenuRepository: Send + Sync {
    /// All items in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the backend fails.
    fn list(&self) -> Result<Vec<MenuItem>>;

    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] for an unknown ID.
    fn get(&self, id: MenuItemId) -> Result<MenuItem>;

    /// Store a new item with a freshly allocated ID.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the backend fails.
    fn create(&self, draft: MenuItemDraft) -> Result<MenuItem>;

    /// Replace the editable fields of an item.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] for an unknown ID.
    fn update(&self, id: MenuItemId, draft: MenuItemDraft) -> Result<MenuItem>;

    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] for an unknown ID.
    fn delete(&self, id: MenuItemId) -> Result<()>;
}

/// Reservation storage.
pub trait ReservationRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the backend fails.
    fn list(&self) -> Result<Vec<Reservation>>;

    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] for an unknown ID.
    fn get(&self, id: ReservationId) -> Result<Reservation>;

    /// Store a validated booking as a pending reservation.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the backend fails.
    fn create(&self, new: NewReservation, created_at: NaiveDateTime) -> Result<Reservation>;

    /// Replace a stored reservation.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] for an unknown ID.
    fn update(&self, reservation: Reservation) -> Result<Reservation>;

    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] for an unknown ID.
    fn delete(&self, id: ReservationId) -> Result<()>;

    /// Change only the status of a reservation.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] for an unknown ID.
    fn set_status(&self, id: ReservationId, status: ReservationStatus) -> Result<Reservation> {
        let mut reservation = self.get(id)?;
        reservation.status = status;
        self.update(reservation)
    }
}

/// Notification feed storage.
pub trait NotificationRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the backend fails.
    fn list(&self) -> Result<Vec<Notification>>;

    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the backend fails.
    fn create(&self, new: NewNotification) -> Result<Notification>;

    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] for an unknown ID.
    fn mark_read(&self, id: NotificationId) -> Result<()>;

    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the backend fails.
    fn mark_all_read(&self) -> Result<()>;

    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the backend fails.
    fn unread_count(&self) -> Result<usize> {
        Ok(self.list()?.iter().filter(|n| !n.is_read).count())
    }
}

/// Restaurant settings storage.
pub trait SettingsRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the backend fails.
    fn load(&self) -> Result<RestaurantConfig>;

    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the backend fails.
    fn save(&self, config: RestaurantConfig) -> Result<()>;
}
