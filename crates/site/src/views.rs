//! View models shared by the page templates.
//!
//! Handlers turn domain values into these flat, pre-formatted structs so the
//! templates only print strings.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

use bistro_core::notification::latest;
use bistro_core::restaurant::{WEEK, weekday_label};
use bistro_core::{DayHours, MenuItem, Notification, Reservation, RestaurantConfig, Theme};

use crate::error::Result;
use crate::state::AppState;

/// Notifications listed in the admin header dropdown.
pub const HEADER_NOTIFICATIONS: usize = 3;

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

// =============================================================================
// Date Formatting
// =============================================================================

/// `19/10/2026`
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `19 de outubro`
#[must_use]
pub fn format_day_month(date: NaiveDate) -> String {
    let month = MONTHS
        .get(date.month0() as usize)
        .copied()
        .unwrap_or_default();
    format!("{} de {month}", date.day())
}

/// `segunda-feira, 19 de outubro`
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}, {}",
        weekday_label(date.weekday()).to_lowercase(),
        format_day_month(date)
    )
}

/// `19/10/2026 14:05`
#[must_use]
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%d/%m/%Y %H:%M").to_string()
}

/// Coarse relative time such as `há 3 horas`.
#[must_use]
pub fn time_ago(at: NaiveDateTime, now: NaiveDateTime) -> String {
    let minutes = (now - at).num_minutes();
    match minutes {
        i64::MIN..=0 => "agora".to_string(),
        1 => "há 1 minuto".to_string(),
        2..=59 => format!("há {minutes} minutos"),
        60..=119 => "há 1 hora".to_string(),
        120..=1439 => format!("há {} horas", minutes / 60),
        1440..=2879 => "há 1 dia".to_string(),
        _ => format!("há {} dias", minutes / 1440),
    }
}

/// `1 mesa`, `3 mesas`
#[must_use]
pub fn tables_label(count: u32) -> String {
    if count == 1 {
        "1 mesa".to_string()
    } else {
        format!("{count} mesas")
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Theme values ready for the layout.
#[derive(Debug, Clone)]
pub struct ThemeView {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub heading_font: String,
    pub body_font: String,
    /// Body of the `:root { ... }` rule with the theme custom properties.
    pub css_vars: String,
    /// Google Fonts stylesheet for the two fonts.
    pub fonts_href: String,
}

/// Keep only characters that are safe inside CSS and a URL.
fn clean_font(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-')
        .collect::<String>()
        .trim()
        .to_string()
}

impl From<&Theme> for ThemeView {
    fn from(theme: &Theme) -> Self {
        let fallback = Theme::default();
        let theme = if theme.validate().is_ok() {
            theme
        } else {
            &fallback
        };
        let heading_font = clean_font(&theme.font_family.headings);
        let body_font = clean_font(&theme.font_family.body);

        let css_vars = format!(
            "--theme-primary: {}; --theme-secondary: {}; --theme-accent: {}; \
             --font-headings: '{heading_font}', serif; --font-body: '{body_font}', sans-serif;",
            theme.primary_color, theme.secondary_color, theme.accent_color
        );
        let fonts_href = format!(
            "https://fonts.googleapis.com/css2?family={}:wght@400;700&family={}:wght@400;700&display=swap",
            heading_font.replace(' ', "+"),
            body_font.replace(' ', "+")
        );

        Self {
            primary: theme.primary_color.clone(),
            secondary: theme.secondary_color.clone(),
            accent: theme.accent_color.clone(),
            heading_font,
            body_font,
            css_vars,
            fonts_href,
        }
    }
}

// =============================================================================
// Page Chrome
// =============================================================================

/// One row of the opening hours table.
#[derive(Debug, Clone)]
pub struct HoursRow {
    pub day: &'static str,
    pub hours: String,
}

impl HoursRow {
    fn new(day: Weekday, hours: &DayHours) -> Self {
        let hours = match hours {
            DayHours::Open { open, close } => format!("{open} - {close}"),
            DayHours::Closed => "Fechado".to_string(),
        };
        Self {
            day: weekday_label(day),
            hours,
        }
    }
}

/// Restaurant details and theme needed by every public page.
#[derive(Debug, Clone)]
pub struct SiteChrome {
    pub name: String,
    pub logo_url: Option<String>,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hours: Vec<HoursRow>,
    pub theme: ThemeView,
}

impl SiteChrome {
    /// Current settings plus the stored theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings store cannot be read.
    pub fn load(state: &AppState) -> Result<Self> {
        let config = state.settings().load()?;
        Ok(Self::new(&config, &state.theme().load_or_default()))
    }

    #[must_use]
    pub fn new(config: &RestaurantConfig, theme: &Theme) -> Self {
        Self {
            name: config.name.clone(),
            logo_url: config.logo_url.clone(),
            address: config.address.clone(),
            phone: config.phone.clone(),
            email: config.email.clone(),
            hours: WEEK
                .iter()
                .map(|&day| HoursRow::new(day, config.opening_hours.for_weekday(day)))
                .collect(),
            theme: ThemeView::from(theme),
        }
    }
}

/// A notification in the admin header.
#[derive(Debug, Clone)]
pub struct NotificationView {
    pub id: i32,
    pub kind: &'static str,
    pub kind_label: &'static str,
    pub message: String,
    pub is_read: bool,
    pub time_ago: String,
}

impl NotificationView {
    #[must_use]
    pub fn new(notification: &Notification, now: NaiveDateTime) -> Self {
        Self {
            id: notification.id.as_i32(),
            kind: notification.kind.as_str(),
            kind_label: notification.kind.label(),
            message: notification.message.clone(),
            is_read: notification.is_read,
            time_ago: time_ago(notification.created_at, now),
        }
    }
}

/// Sidebar and header data for every admin page.
#[derive(Debug, Clone)]
pub struct AdminChrome {
    pub site: SiteChrome,
    pub current_path: &'static str,
    pub unread_count: usize,
    pub notifications: Vec<NotificationView>,
}

impl AdminChrome {
    /// # Errors
    ///
    /// Returns an error if the settings or notification store cannot be read.
    pub fn load(state: &AppState, current_path: &'static str) -> Result<Self> {
        let now = state.now();
        let all = state.notifications().list()?;
        let unread_count = all.iter().filter(|n| !n.is_read).count();
        let notifications = latest(all, HEADER_NOTIFICATIONS)
            .iter()
            .map(|n| NotificationView::new(n, now))
            .collect();

        Ok(Self {
            site: SiteChrome::load(state)?,
            current_path,
            unread_count,
            notifications,
        })
    }

    /// Whether `path` is the active sidebar entry.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        self.current_path == path
    }
}

// =============================================================================
// Menu and Reservation Rows
// =============================================================================

/// A menu item as shown on cards and in the admin table.
#[derive(Debug, Clone)]
pub struct MenuItemView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: Option<String>,
    pub category: &'static str,
    pub category_label: &'static str,
    pub is_available: bool,
    pub is_daily_special: bool,
    pub badges: Vec<&'static str>,
    pub allergens: String,
}

impl From<&MenuItem> for MenuItemView {
    fn from(item: &MenuItem) -> Self {
        let mut badges = Vec::new();
        let mut allergens = String::new();
        if let Some(info) = &item.dietary_info {
            if info.is_vegetarian {
                badges.push("Vegetariano");
            }
            if info.is_vegan {
                badges.push("Vegano");
            }
            if info.is_gluten_free {
                badges.push("Sem Glúten");
            }
            allergens = info.contains_allergens.join(", ");
        }

        Self {
            id: item.id.as_i32(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.to_string(),
            image_url: item.image_url.clone(),
            category: item.category.as_str(),
            category_label: item.category.singular_label(),
            is_available: item.is_available,
            is_daily_special: item.is_daily_special,
            badges,
            allergens,
        }
    }
}

/// A reservation row for the admin tables.
#[derive(Debug, Clone)]
pub struct ReservationView {
    pub id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub date: String,
    pub day_month: String,
    pub time: String,
    pub guests: u32,
    pub adults: u32,
    pub children: u32,
    pub tables: String,
    pub status: &'static str,
    pub status_label: &'static str,
    pub badge_class: &'static str,
    pub special_requests: Option<String>,
    pub created_at: String,
}

impl From<&Reservation> for ReservationView {
    fn from(r: &Reservation) -> Self {
        Self {
            id: r.id.as_i32(),
            customer_name: r.customer_name.clone(),
            customer_email: r.customer_email.to_string(),
            customer_phone: r.customer_phone.clone(),
            date: format_date(r.date),
            day_month: format_day_month(r.date),
            time: r.time.to_string(),
            guests: r.guests(),
            adults: r.party_size.adults,
            children: r.party_size.children,
            tables: tables_label(r.table_count),
            status: r.status.as_str(),
            status_label: r.status.label(),
            badge_class: r.status.badge_class(),
            special_requests: r.special_requests.clone(),
            created_at: format_timestamp(r.created_at),
        }
    }
}

/// Success and error banners driven by `?success=` / `?error=`.
#[derive(Debug, Clone, Default)]
pub struct Flash {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl Flash {
    /// Map known message codes to text; unknown codes are shown verbatim.
    #[must_use]
    pub fn from_params(
        success: Option<String>,
        error: Option<String>,
        messages: &[(&str, &str)],
    ) -> Self {
        let lookup = |code: String| {
            messages
                .iter()
                .find(|(key, _)| *key == code)
                .map_or(code, |(_, text)| (*text).to_string())
        };
        Self {
            success: success.filter(|s| !s.is_empty()).map(lookup),
            error: error.filter(|e| !e.is_empty()).map(lookup),
        }
    }
}
