//! Status and category enums.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// A string did not name any variant of the target enum.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

/// Menu section an item is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Appetizer,
    #[default]
    Main,
    Dessert,
    Drink,
    Special,
}

impl MenuCategory {
    /// Every category, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Appetizer,
        Self::Main,
        Self::Dessert,
        Self::Drink,
        Self::Special,
    ];

    /// Stable identifier used in URLs and forms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Appetizer => "appetizer",
            Self::Main => "main",
            Self::Dessert => "dessert",
            Self::Drink => "drink",
            Self::Special => "special",
        }
    }

    /// Section heading (plural).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Appetizer => "Entradas",
            Self::Main => "Pratos Principais",
            Self::Dessert => "Sobremesas",
            Self::Drink => "Bebidas",
            Self::Special => "Especiais",
        }
    }

    /// Label for a single item (select options).
    #[must_use]
    pub const fn singular_label(self) -> &'static str {
        match self {
            Self::Appetizer => "Entrada",
            Self::Main => "Prato Principal",
            Self::Dessert => "Sobremesa",
            Self::Drink => "Bebida",
            Self::Special => "Especial",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "menu category",
                value: s.to_string(),
            })
    }
}

/// Lifecycle state of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    /// Every status, in the order the admin filter lists them.
    pub const ALL: [Self; 4] = [
        Self::Confirmed,
        Self::Pending,
        Self::Cancelled,
        Self::Completed,
    ];

    /// Stable identifier used in URLs and forms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Badge text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Confirmed => "Confirmada",
            Self::Cancelled => "Cancelada",
            Self::Completed => "Concluída",
        }
    }

    /// Plural label for the status filter.
    #[must_use]
    pub const fn filter_label(self) -> &'static str {
        match self {
            Self::Pending => "Pendentes",
            Self::Confirmed => "Confirmadas",
            Self::Cancelled => "Canceladas",
            Self::Completed => "Concluídas",
        }
    }

    /// CSS class for the status badge.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "badge badge-pending",
            Self::Confirmed => "badge badge-confirmed",
            Self::Cancelled => "badge badge-cancelled",
            Self::Completed => "badge badge-completed",
        }
    }

    /// Whether the reservation still occupies tables and slot capacity.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "reservation status",
                value: s.to_string(),
            })
    }
}
