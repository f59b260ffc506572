//! Reservation store.

use std::sync::RwLock;

use chrono::NaiveDateTime;

use bistro_core::{
    NewReservation, RepositoryError, Reservation, ReservationId, ReservationRepository,
};

use super::{next_id, read, write};

const ENTITY: &str = "reservation";

/// Reservations kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryReservationStore {
    reservations: RwLock<Vec<Reservation>>,
}

impl MemoryReservationStore {
    #[must_use]
    pub const fn new(reservations: Vec<Reservation>) -> Self {
        Self {
            reservations: RwLock::new(reservations),
        }
    }
}

impl ReservationRepository for MemoryReservationStore {
    fn list(&self) -> Result<Vec<Reservation>, RepositoryError> {
        Ok(read(&self.reservations)?.clone())
    }

    fn get(&self, id: ReservationId) -> Result<Reservation, RepositoryError> {
        read(&self.reservations)?
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id.as_i32()))
    }

    fn create(
        &self,
        new: NewReservation,
        created_at: NaiveDateTime,
    ) -> Result<Reservation, RepositoryError> {
        let mut reservations = write(&self.reservations)?;
        let id = ReservationId::new(next_id(&reservations, |r| r.id.as_i32()));
        let reservation = Reservation::from_new(id, new, created_at);
        reservations.push(reservation.clone());
        Ok(reservation)
    }

    fn update(&self, reservation: Reservation) -> Result<Reservation, RepositoryError> {
        let mut reservations = write(&self.reservations)?;
        let slot = reservations
            .iter_mut()
            .find(|r| r.id == reservation.id)
            .ok_or_else(|| RepositoryError::not_found(ENTITY, reservation.id.as_i32()))?;
        // The table count always follows the party size.
        *slot = Reservation {
            table_count: reservation.party_size.table_count(),
            ..reservation
        };
        Ok(slot.clone())
    }

    fn delete(&self, id: ReservationId) -> Result<(), RepositoryError> {
        let mut reservations = write(&self.reservations)?;
        let before = reservations.len();
        reservations.retain(|r| r.id != id);
        if reservations.len() == before {
            return Err(RepositoryError::not_found(ENTITY, id.as_i32()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bistro_core::{Email, PartySize, ReservationStatus, TimeOfDay};
    use chrono::NaiveDate;

    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn booking(adults: u32) -> NewReservation {
        NewReservation {
            customer_name: "Ana Souza".to_string(),
            customer_email: Email::parse("ana@email.com").unwrap(),
            customer_phone: "(11) 91234-5678".to_string(),
            date: now().date(),
            time: TimeOfDay::parse("20:00").unwrap(),
            party_size: PartySize::new(adults, 0),
            special_requests: None,
        }
    }

    #[test]
    fn test_create_starts_pending() {
        let store = MemoryReservationStore::default();
        let created = store.create(booking(5), now()).unwrap();
        assert_eq!(created.id, ReservationId::new(1));
        assert_eq!(created.status, ReservationStatus::Pending);
        assert_eq!(created.table_count, 2);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_set_status() {
        let store = MemoryReservationStore::default();
        let created = store.create(booking(2), now()).unwrap();
        let cancelled = store
            .set_status(created.id, ReservationStatus::Cancelled)
            .unwrap();
        assert_eq!(cancelled.status, ReservationStatus::Cancelled);
        assert_eq!(
            store.get(created.id).unwrap().status,
            ReservationStatus::Cancelled
        );
        assert!(
            store
                .set_status(ReservationId::new(9), ReservationStatus::Confirmed)
                .is_err()
        );
    }

    #[test]
    fn test_update_rederives_table_count() {
        let store = MemoryReservationStore::default();
        let mut reservation = store.create(booking(2), now()).unwrap();
        reservation.party_size = PartySize::new(9, 0);
        reservation.table_count = 1;
        assert_eq!(store.update(reservation).unwrap().table_count, 3);
    }

    #[test]
    fn test_delete() {
        let store = MemoryReservationStore::default();
        let created = store.create(booking(2), now()).unwrap();
        store.delete(created.id).unwrap();
        assert!(store.list().unwrap().is_empty());
        assert!(store.delete(created.id).is_err());
    }
}
