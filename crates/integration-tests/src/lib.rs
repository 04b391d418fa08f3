//! Integration tests for Orchard.
//!
//! End-to-end scenarios over the storefront core: a cart store against the
//! real file backend, and catalog views over a realistic product set.
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart commands against the file-backed store
//! - `catalog_views` - Filter/sort views and catalog aggregates
//!
//! This crate only provides shared fixtures; the tests live in `tests/`.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use orchard_core::{Product, ProductId};

/// Midnight UTC on the given day.
///
/// # Panics
///
/// Panics on an invalid date; fixtures only use valid ones.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid fixture date")
}

/// A fixed "now" all scenarios agree on.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0)
        .single()
        .expect("valid fixture date")
}

/// Build a product with sensible defaults for scenario tests.
///
/// # Panics
///
/// Panics if `price` is not a decimal literal.
#[must_use]
pub fn product(id: &str, name: &str, price: &str, category: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: String::new(),
        price: price.parse::<Decimal>().expect("price literal"),
        category: category.to_owned(),
        stock: 10,
        discount_percentage: None,
        discount_valid_until: None,
        created_at: date(2025, 9, 1),
    }
}

/// A small storefront-shaped catalog: three categories, one out-of-stock
/// product, discounts with and without expiry.
#[must_use]
pub fn sample_catalog() -> Vec<Product> {
    let mut keyboard = product("1", "Mechanical Keyboard", "129.99", "Electronics");
    keyboard.description = "High-quality mechanical keyboard with RGB backlight".to_owned();

    let mut mouse = product("2", "Wireless Mouse", "49.99", "Electronics");
    mouse.description = "Ergonomic wireless mouse with long battery life".to_owned();
    mouse.discount_percentage = Some(Decimal::new(20, 0));
    mouse.discount_valid_until = Some(date(2025, 12, 31));
    mouse.created_at = date(2025, 9, 15);

    let mut book = product("3", "JavaScript Programming Book", "39.99", "Books");
    book.created_at = date(2025, 8, 20);

    let mut bulbs = product("4", "Smart LED Bulb Set", "59.99", "Home & Living");
    bulbs.stock = 0;

    let mut bands = product("5", "Resistance Bands Set", "19.99", "Sports");
    bands.discount_percentage = Some(Decimal::new(25, 0));
    bands.created_at = date(2025, 9, 28);

    vec![keyboard, mouse, book, bulbs, bands]
}
