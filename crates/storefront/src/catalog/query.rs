//! Catalog query types.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use orchard_core::Product;

/// Sort order for a catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    NameAsc,
    #[default]
    Newest,
}

impl SortKey {
    /// Parse the wire form. Anything unrecognized falls back to `Newest`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            "name_asc" => Self::NameAsc,
            _ => Self::Newest,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::NameAsc => "name_asc",
            Self::Newest => "newest",
        }
    }
}

/// Inclusive price interval, on the raw list price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    /// Create a range. `min` must not exceed `max`.
    #[must_use]
    pub fn new(min: Decimal, max: Decimal) -> Self {
        debug_assert!(min <= max, "price range inverted");
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::MAX,
        }
    }
}

/// Immutable description of the catalog view a caller wants.
///
/// The engine never mutates a spec; callers build a fresh one per change.
/// `Hash`/`Eq` let a spec key the memoized view cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterSpec {
    /// Case-insensitive substring matched against name or description.
    /// Empty matches everything.
    pub search: String,
    /// Categories to include. Empty means all categories.
    pub categories: BTreeSet<String>,
    pub price_range: PriceRange,
    pub sort_by: SortKey,
    /// Keep only products with stock on hand.
    pub in_stock: bool,
    /// Keep only products with an active discount.
    pub on_sale: bool,
}

impl FilterSpec {
    /// Whether `product` passes every predicate of this spec at `now`.
    ///
    /// Price is always the raw list price, never the discounted one.
    #[must_use]
    pub fn matches(&self, product: &Product, now: DateTime<Utc>) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            if !product.name.to_lowercase().contains(&needle)
                && !product.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }

        if !self.price_range.contains(product.price) {
            return false;
        }

        if self.in_stock && !product.is_in_stock() {
            return false;
        }

        if self.on_sale && !product.is_on_sale(now) {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use orchard_core::ProductId;

    use super::*;

    fn product(name: &str, description: &str, price: Decimal, category: &str) -> Product {
        Product {
            id: ProductId::new(name),
            name: name.to_owned(),
            description: description.to_owned(),
            price,
            category: category.to_owned(),
            stock: 10,
            discount_percentage: None,
            discount_valid_until: None,
            created_at: Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_sort_key_parse_falls_back_to_newest() {
        assert_eq!(SortKey::parse("price_asc"), SortKey::PriceAsc);
        assert_eq!(SortKey::parse("newest"), SortKey::Newest);
        assert_eq!(SortKey::parse("rating_desc"), SortKey::Newest);
        assert_eq!(SortKey::parse(""), SortKey::Newest);
    }

    #[test]
    fn test_search_matches_name_or_description_case_insensitively() {
        let keyboard = product("Mechanical Keyboard", "RGB backlight", Decimal::new(129, 0), "Electronics");
        let mouse = product("Wireless Mouse", "long battery life", Decimal::new(49, 0), "Electronics");

        let spec = FilterSpec {
            search: "KEY".to_owned(),
            ..FilterSpec::default()
        };
        assert!(spec.matches(&keyboard, now()));
        assert!(!spec.matches(&mouse, now()));

        let in_description = FilterSpec {
            search: "battery".to_owned(),
            ..FilterSpec::default()
        };
        assert!(in_description.matches(&mouse, now()));
    }

    #[test]
    fn test_empty_category_set_matches_all() {
        let book = product("Rust Book", "systems programming", Decimal::new(40, 0), "Books");

        let spec = FilterSpec::default();
        assert!(spec.matches(&book, now()));

        let other = FilterSpec {
            categories: BTreeSet::from(["Electronics".to_owned()]),
            ..FilterSpec::default()
        };
        assert!(!other.matches(&book, now()));
    }

    #[test]
    fn test_price_range_bounds_are_inclusive() {
        let p = product("Watch", "leather strap", Decimal::new(200, 0), "Fashion");

        let exact = FilterSpec {
            price_range: PriceRange::new(Decimal::new(200, 0), Decimal::new(200, 0)),
            ..FilterSpec::default()
        };
        assert!(exact.matches(&p, now()));

        let below = FilterSpec {
            price_range: PriceRange::new(Decimal::ZERO, Decimal::new(199, 0)),
            ..FilterSpec::default()
        };
        assert!(!below.matches(&p, now()));
    }

    #[test]
    fn test_price_predicate_uses_raw_price_during_discount() {
        let mut p = product("Mouse", "wireless", Decimal::new(100, 0), "Electronics");
        p.discount_percentage = Some(Decimal::new(50, 0));

        // Effective price is 50, but the 0..=60 range still excludes it
        let spec = FilterSpec {
            price_range: PriceRange::new(Decimal::ZERO, Decimal::new(60, 0)),
            ..FilterSpec::default()
        };
        assert!(!spec.matches(&p, now()));
    }

    #[test]
    fn test_in_stock_and_on_sale_toggles() {
        let mut p = product("Lamp", "desk lamp", Decimal::new(30, 0), "Home");
        p.stock = 0;

        let in_stock = FilterSpec {
            in_stock: true,
            ..FilterSpec::default()
        };
        assert!(!in_stock.matches(&p, now()));

        let on_sale = FilterSpec {
            on_sale: true,
            ..FilterSpec::default()
        };
        assert!(!on_sale.matches(&p, now()));

        p.discount_percentage = Some(Decimal::new(10, 0));
        assert!(on_sale.matches(&p, now()));
    }
}
