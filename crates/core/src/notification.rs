//! Admin notification feed.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::menu::MenuItem;
use crate::reservation::Reservation;
use crate::types::{MenuItemId, NotificationId, ReservationId};

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Reservation,
    Menu,
    System,
}

impl NotificationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reservation => "reservation",
            Self::Menu => "menu",
            Self::System => "system",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reservation => "Reserva",
            Self::Menu => "Cardápio",
            Self::System => "Sistema",
        }
    }
}

/// An entry in the admin notification feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
    pub reservation_id: Option<ReservationId>,
    pub menu_item_id: Option<MenuItemId>,
}

impl Notification {
    #[must_use]
    pub fn from_new(id: NotificationId, new: NewNotification) -> Self {
        Self {
            id,
            kind: new.kind,
            message: new.message,
            is_read: false,
            created_at: new.created_at,
            reservation_id: new.reservation_id,
            menu_item_id: new.menu_item_id,
        }
    }
}

/// A notification waiting for an ID. New notifications are unread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: NaiveDateTime,
    pub reservation_id: Option<ReservationId>,
    pub menu_item_id: Option<MenuItemId>,
}

impl NewNotification {
    /// "Nova reserva para 20/10 às 19:30 - João Silva (2 pessoas)".
    #[must_use]
    pub fn for_reservation(reservation: &Reservation, created_at: NaiveDateTime) -> Self {
        Self {
            kind: NotificationKind::Reservation,
            message: format!(
                "Nova reserva para {} às {} - {} ({} pessoas)",
                reservation.date.format("%d/%m"),
                reservation.time,
                reservation.customer_name,
                reservation.guests()
            ),
            created_at,
            reservation_id: Some(reservation.id),
            menu_item_id: None,
        }
    }

    /// Announces a new item on the menu.
    #[must_use]
    pub fn for_menu_item(item: &MenuItem, created_at: NaiveDateTime) -> Self {
        let message = if item.is_daily_special {
            format!("Item do menu \"{}\" adicionado ao Menu do Dia", item.name)
        } else {
            format!("Item do menu \"{}\" adicionado ao cardápio", item.name)
        };
        Self {
            kind: NotificationKind::Menu,
            message,
            created_at,
            reservation_id: None,
            menu_item_id: Some(item.id),
        }
    }

    #[must_use]
    pub fn system(message: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            kind: NotificationKind::System,
            message: message.into(),
            created_at,
            reservation_id: None,
            menu_item_id: None,
        }
    }
}

/// The `limit` newest notifications, newest first.
#[must_use]
pub fn latest(mut notifications: Vec<Notification>, limit: usize) -> Vec<Notification> {
    notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    notifications.truncate(limit);
    notifications
}
