//! Public reservation flow.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use bistro_core::{
    NewNotification, NotificationRepository, RepositoryError, Reservation, ReservationRepository,
    ReservationRequest, SettingsRepository, SlotAvailability, ValidationError, check_bookable,
    slots_for_day,
};

/// Errors from the booking flow.
#[derive(Debug, Error)]
pub enum BookingError {
    /// The guest has to fix the form.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Validates and stores guest reservations.
pub struct BookingService<'a> {
    reservations: &'a dyn ReservationRepository,
    notifications: &'a dyn NotificationRepository,
    settings: &'a dyn SettingsRepository,
}

impl<'a> BookingService<'a> {
    #[must_use]
    pub const fn new(
        reservations: &'a dyn ReservationRepository,
        notifications: &'a dyn NotificationRepository,
        settings: &'a dyn SettingsRepository,
    ) -> Self {
        Self {
            reservations,
            notifications,
            settings,
        }
    }

    /// Slot availability for `date`, flagged against that day's opening hours.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Repository`] if a store cannot be read.
    pub fn availability(&self, date: NaiveDate) -> Result<Vec<SlotAvailability>, BookingError> {
        let config = self.settings.load()?;
        let reservations = self.reservations.list()?;
        Ok(slots_for_day(&reservations, &config, date))
    }

    /// Validate a guest's request, check the slot, store the reservation as
    /// pending and push a notification for the admin.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] when the request is rejected and
    /// [`BookingError::Repository`] when storage fails.
    pub fn book(
        &self,
        request: &ReservationRequest,
        now: NaiveDateTime,
    ) -> Result<Reservation, BookingError> {
        let booking = request.validate(now.date())?;
        let config = self.settings.load()?;
        let existing = self.reservations.list()?;
        check_bookable(&booking, &existing, &config)?;

        let reservation = self.reservations.create(booking, now)?;
        tracing::info!(
            reservation_id = %reservation.id,
            date = %reservation.date,
            time = %reservation.time,
            guests = reservation.guests(),
            "Reservation created"
        );

        let notification = NewNotification::for_reservation(&reservation, now);
        if let Err(e) = self.notifications.create(notification) {
            tracing::warn!(error = %e, reservation_id = %reservation.id, "Failed to record reservation notification");
        }

        Ok(reservation)
    }
}
