//! Demo data loaded into the in-memory stores at startup.
//!
//! Dates are relative to `now` so the dashboard always has something to show.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::menu::{DietaryInfo, MenuItem, MenuItemDraft};
use crate::notification::{NewNotification, Notification, NotificationKind};
use crate::reservation::{PartySize, Reservation};
use crate::restaurant::{Capacity, DayHours, OpeningHours, RestaurantConfig};
use crate::theme::Theme;
use crate::types::{
    Email, MenuCategory, MenuItemId, NotificationId, Price, ReservationId, ReservationStatus,
    TimeOfDay,
};

fn end_of_day(now: NaiveDateTime) -> Option<NaiveDateTime> {
    NaiveTime::from_hms_opt(23, 59, 59).map(|t| now.date().and_time(t))
}

fn dietary(vegetarian: bool, gluten_free: bool) -> Option<DietaryInfo> {
    Some(DietaryInfo {
        is_vegetarian: vegetarian,
        is_vegan: false,
        is_gluten_free: gluten_free,
        contains_allergens: Vec::new(),
    })
}

#[allow(clippy::too_many_arguments)]
fn menu_item(
    id: i32,
    name: &str,
    description: &str,
    cents: i64,
    image: &str,
    category: MenuCategory,
    valid_until: Option<NaiveDateTime>,
    dietary_info: Option<DietaryInfo>,
) -> MenuItem {
    MenuItem::from_draft(
        MenuItemId::new(id),
        MenuItemDraft {
            name: name.to_string(),
            description: description.to_string(),
            price: Price::from_cents(cents),
            image_url: Some(format!("https://images.unsplash.com/{image}")),
            category,
            is_available: true,
            is_daily_special: valid_until.is_some(),
            valid_until,
            dietary_info,
        },
    )
}

/// Five dishes and drinks; the risotto and the cheesecake are today's specials.
#[must_use]
pub fn menu_items(now: NaiveDateTime) -> Vec<MenuItem> {
    let tonight = end_of_day(now);
    vec![
        menu_item(
            1,
            "Bruschetta de Tomate e Manjericão",
            "Pão italiano grelhado coberto com tomates frescos, manjericão, alho e azeite extra virgem.",
            1990,
            "photo-1572695157366-5e585ab2b69f",
            MenuCategory::Appetizer,
            None,
            dietary(true, false),
        ),
        menu_item(
            2,
            "Risoto de Funghi",
            "Arroz arbóreo cremoso com mix de cogumelos selvagens, vinho branco, manteiga e parmesão.",
            4790,
            "photo-1633352615955-f0c99e8b7e5f",
            MenuCategory::Main,
            tonight,
            dietary(true, true),
        ),
        menu_item(
            3,
            "Filé Mignon ao Molho Madeira",
            "Filé mignon grelhado, acompanhado de molho madeira, purê de batatas e legumes da estação.",
            6990,
            "photo-1546833998-877b37c2e4c6",
            MenuCategory::Main,
            None,
            None,
        ),
        menu_item(
            4,
            "Cheesecake de Frutas Vermelhas",
            "Tradicional cheesecake de cream cheese com base de biscoito, coberto com calda de frutas vermelhas.",
            2490,
            "photo-1565958011703-44f9829ba187",
            MenuCategory::Dessert,
            tonight,
            dietary(true, false),
        ),
        menu_item(
            5,
            "Vinho Tinto Cabernet Sauvignon",
            "Vinho tinto seco, encorpado, com notas de frutas vermelhas e especiarias.",
            8990,
            "photo-1553361371-9b22f78a0b98",
            MenuCategory::Drink,
            None,
            None,
        ),
    ]
}

struct SeedReservation<'a> {
    id: i32,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    day_offset: i64,
    time: (u32, u32),
    party: PartySize,
    special_requests: Option<&'a str>,
    status: ReservationStatus,
    created_ago: Duration,
}

impl SeedReservation<'_> {
    fn build(self, now: NaiveDateTime) -> Option<Reservation> {
        Some(Reservation {
            id: ReservationId::new(self.id),
            customer_name: self.name.to_string(),
            customer_email: Email::parse(self.email).ok()?,
            customer_phone: self.phone.to_string(),
            date: now.date() + Duration::days(self.day_offset),
            time: TimeOfDay::from_hm(self.time.0, self.time.1)?,
            table_count: self.party.table_count(),
            party_size: self.party,
            special_requests: self.special_requests.map(str::to_string),
            status: self.status,
            created_at: now - self.created_ago,
        })
    }
}

/// Two confirmed bookings today and one pending for tomorrow.
#[must_use]
pub fn reservations(now: NaiveDateTime) -> Vec<Reservation> {
    [
        SeedReservation {
            id: 1,
            name: "João Silva",
            email: "joao.silva@email.com",
            phone: "(11) 99999-8888",
            day_offset: 0,
            time: (19, 30),
            party: PartySize::new(2, 0),
            special_requests: None,
            status: ReservationStatus::Confirmed,
            created_ago: Duration::days(2),
        },
        SeedReservation {
            id: 2,
            name: "Maria Oliveira",
            email: "maria.oliveira@email.com",
            phone: "(11) 97777-6666",
            day_offset: 0,
            time: (20, 0),
            party: PartySize::new(4, 2),
            special_requests: Some("Precisamos de 2 cadeirinhas para crianças."),
            status: ReservationStatus::Confirmed,
            created_ago: Duration::days(1),
        },
        SeedReservation {
            id: 3,
            name: "Carlos Santos",
            email: "carlos.santos@email.com",
            phone: "(11) 95555-4444",
            day_offset: 1,
            time: (13, 30),
            party: PartySize::new(6, 0),
            special_requests: Some("Mesa próxima à janela, se possível."),
            status: ReservationStatus::Pending,
            created_ago: Duration::hours(5),
        },
    ]
    .into_iter()
    .filter_map(|seed| seed.build(now))
    .collect()
}

/// The notification feed: two unread, two read.
#[must_use]
pub fn notifications(now: NaiveDateTime) -> Vec<Notification> {
    let entries = [
        (
            NotificationKind::Reservation,
            "Nova reserva para hoje às 19:30 - João Silva (2 pessoas)",
            false,
            Duration::hours(1),
            Some(ReservationId::new(1)),
            None,
        ),
        (
            NotificationKind::Reservation,
            "Nova reserva para hoje às 20:00 - Maria Oliveira (6 pessoas)",
            true,
            Duration::hours(3),
            Some(ReservationId::new(2)),
            None,
        ),
        (
            NotificationKind::Menu,
            "Item do menu \"Risoto de Funghi\" adicionado ao Menu do Dia",
            false,
            Duration::hours(5),
            None,
            Some(MenuItemId::new(2)),
        ),
        (
            NotificationKind::System,
            "O restaurante está próximo da capacidade máxima para hoje às 20:00",
            true,
            Duration::days(1),
            None,
            None,
        ),
    ];

    (1..)
        .zip(entries)
        .map(|(id, (kind, message, is_read, ago, reservation_id, menu_item_id))| {
            let mut notification = Notification::from_new(
                NotificationId::new(id),
                NewNotification {
                    kind,
                    message: message.to_string(),
                    created_at: now - ago,
                    reservation_id,
                    menu_item_id,
                },
            );
            notification.is_read = is_read;
            notification
        })
        .collect()
}

/// Bistro Gourmet: open every day, 20 tables, 4 bookings per slot.
#[must_use]
pub fn restaurant_config() -> RestaurantConfig {
    let weekday = DayHours::open("11:30", "22:00").unwrap_or(DayHours::Closed);
    let mut opening_hours = OpeningHours::uniform(weekday);
    opening_hours.friday = DayHours::open("11:30", "23:00").unwrap_or(DayHours::Closed);
    opening_hours.saturday = opening_hours.friday;
    opening_hours.sunday = DayHours::open("12:00", "16:00").unwrap_or(DayHours::Closed);

    RestaurantConfig {
        name: "Bistro Gourmet".to_string(),
        logo_url: Some("/static/images/logo.svg".to_string()),
        address: "Rua das Flores, 123 - Centro, São Paulo - SP".to_string(),
        phone: "(11) 3333-4444".to_string(),
        email: "contato@bistrogourmet.com".to_string(),
        opening_hours,
        capacity: Capacity::new(20, 4),
        theme: Theme::default(),
    }
}
