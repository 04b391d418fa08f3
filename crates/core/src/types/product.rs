//! Catalog product type.
//!
//! Products are read-only inputs supplied by an external catalog source;
//! the storefront never creates or mutates them. The JSON wire form uses
//! camelCase keys to match the upstream catalog feed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product as supplied by the catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// List price in the shop currency. Never negative.
    pub price: Decimal,
    pub category: String,
    /// Units on hand. Zero means out of stock.
    pub stock: u32,
    /// Active discount in percent (0-100), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<Decimal>,
    /// Expiry of the discount. Absent means the discount never expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_valid_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Whether the product has an active discount at `now`.
    ///
    /// A discount whose validity timestamp equals `now` exactly has already
    /// expired; the comparison is strictly greater-than.
    #[must_use]
    pub fn is_on_sale(&self, now: DateTime<Utc>) -> bool {
        self.discount_percentage.is_some()
            && self.discount_valid_until.is_none_or(|until| until > now)
    }

    /// Price after applying an active discount, or the list price otherwise.
    ///
    /// Display only: filtering and sorting always use the raw [`Self::price`]
    /// so the catalog view stays predictable while a discount is running.
    #[must_use]
    pub fn effective_price(&self, now: DateTime<Utc>) -> Decimal {
        if self.is_on_sale(now) {
            self.discount_percentage.map_or(self.price, |pct| {
                self.price * (Decimal::ONE - pct / Decimal::ONE_HUNDRED)
            })
        } else {
            self.price
        }
    }

    /// Whether at least one unit is on hand.
    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn product(discount: Option<Decimal>, until: Option<DateTime<Utc>>) -> Product {
        Product {
            id: ProductId::new("p1"),
            name: "Mechanical Keyboard".to_owned(),
            description: "High-quality mechanical keyboard".to_owned(),
            price: Decimal::new(10000, 2),
            category: "Electronics".to_owned(),
            stock: 5,
            discount_percentage: discount,
            discount_valid_until: until,
            created_at: Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_on_sale_requires_discount() {
        let now = Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap();
        assert!(!product(None, None).is_on_sale(now));
        assert!(product(Some(Decimal::new(20, 0)), None).is_on_sale(now));
    }

    #[test]
    fn test_on_sale_expiry_is_strict() {
        let now = Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0).unwrap();
        let pct = Some(Decimal::new(20, 0));

        // Validity equal to now is already expired
        assert!(!product(pct, Some(now)).is_on_sale(now));
        assert!(product(pct, Some(now + chrono::Duration::seconds(1))).is_on_sale(now));
        assert!(!product(pct, Some(now - chrono::Duration::seconds(1))).is_on_sale(now));
    }

    #[test]
    fn test_effective_price_applies_discount() {
        let now = Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap();
        let p = product(Some(Decimal::new(20, 0)), None);
        assert_eq!(p.effective_price(now), Decimal::new(8000, 2));
    }

    #[test]
    fn test_effective_price_ignores_expired_discount() {
        let now = Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap();
        let expired = now - chrono::Duration::days(1);
        let p = product(Some(Decimal::new(20, 0)), Some(expired));
        assert_eq!(p.effective_price(now), p.price);
    }

    #[test]
    fn test_wire_form_is_camel_case() {
        let json = r#"{
            "id": "2",
            "name": "Wireless Mouse",
            "description": "Ergonomic wireless mouse",
            "price": "49.99",
            "category": "Electronics",
            "stock": 100,
            "discountPercentage": "20",
            "discountValidUntil": "2025-12-31T00:00:00Z",
            "createdAt": "2025-09-15T00:00:00Z"
        }"#;
        let p: Product = serde_json::from_str(json).expect("deserialize");
        assert_eq!(p.id, ProductId::new("2"));
        assert_eq!(p.discount_percentage, Some(Decimal::new(20, 0)));
        assert_eq!(p.price, Decimal::new(4999, 2));
    }
}
