//! Menu management in the admin back-office.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use bistro_core::{MenuCategory, MenuItemId, MenuRepository, NotificationRepository, Price};
use bistro_integration_tests::TestApp;

fn item_form<'a>(name: &'a str, price: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", name),
        ("description", "Massa fresca com ragu de ossobuco."),
        ("price", price),
        ("image_url", ""),
        ("category", "main"),
        ("is_available", "on"),
        ("is_daily_special", "on"),
        ("valid_until", "2026-10-19T23:00"),
        ("is_vegetarian", "on"),
        ("allergens", "glúten, lactose"),
    ]
}

#[tokio::test]
async fn test_dashboard_renders() {
    let app = TestApp::seeded();
    let resp = app.get("/admin").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("João Silva"));
    assert!(resp.body.contains("Risoto de Funghi"));
}

#[tokio::test]
async fn test_create_menu_item() {
    let app = TestApp::seeded();
    let unread_before = app.state.notifications().unread_count().unwrap();

    let resp = app
        .post_form("/admin/menu", &item_form("Pappardelle ao Ragu", "58,90"))
        .await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), "/admin/menu?success=created");

    let item = app.state.menu().get(MenuItemId::new(6)).unwrap();
    assert_eq!(item.name, "Pappardelle ao Ragu");
    assert_eq!(item.price, Price::from_cents(5890));
    assert_eq!(item.category, MenuCategory::Main);
    assert!(item.is_daily_special);
    assert_eq!(
        app.state.notifications().unread_count().unwrap(),
        unread_before + 1
    );

    let page = app.get(resp.location()).await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Item adicionado ao menu."));
    assert!(page.body.contains("Pappardelle ao Ragu"));

    let home = app.get("/").await;
    assert!(home.body.contains("Pappardelle ao Ragu"));
}

#[tokio::test]
async fn test_create_rejects_zero_price() {
    let app = TestApp::seeded();
    let resp = app
        .post_form("/admin/menu", &item_form("Pão de Alho", "0"))
        .await;

    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert!(resp.location().starts_with("/admin/menu?error="));
    assert_eq!(app.state.menu().list().unwrap().len(), 5);
}

#[tokio::test]
async fn test_update_menu_item() {
    let app = TestApp::seeded();
    let mut form = item_form("Risoto de Funghi Trufado", "52.00");
    form.retain(|(key, _)| *key != "is_daily_special" && *key != "valid_until");

    let resp = app.post_form("/admin/menu/2", &form).await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), "/admin/menu?success=updated");

    let item = app.state.menu().get(MenuItemId::new(2)).unwrap();
    assert_eq!(item.name, "Risoto de Funghi Trufado");
    assert!(!item.is_daily_special);
    assert_eq!(item.valid_until, None);
}

#[tokio::test]
async fn test_update_missing_item_is_404() {
    let app = TestApp::seeded();
    let resp = app
        .post_form("/admin/menu/42", &item_form("Fantasma", "10"))
        .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_menu_item() {
    let app = TestApp::seeded();
    let resp = app.post_form("/admin/menu/5/delete", &[]).await;

    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), "/admin/menu?success=deleted");
    assert!(app.state.menu().get(MenuItemId::new(5)).is_err());

    let menu = app.get("/menu").await;
    assert!(!menu.body.contains("Vinho Tinto Cabernet Sauvignon"));
}
