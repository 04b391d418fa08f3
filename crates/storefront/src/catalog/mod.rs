//! Catalog filter/sort engine.
//!
//! The engine is split in two layers. The free functions are pure and
//! referentially transparent - (products, spec, now) in, view data out - so
//! they can be called repeatedly or memoized. [`CatalogEngine`] owns the
//! current product set, the catalog-wide aggregates, and a memoized view
//! cache keyed by (product-set generation, spec).
//!
//! Two aggregate rules worth calling out:
//!
//! - `category_counts` always covers the *entire unfiltered* set, so the UI
//!   can show "(N)" next to categories the active filter excludes.
//! - `price_bound` is fixed the first time a non-empty product set is seen
//!   and never recomputed, so a price-range slider does not rescale under
//!   the user as the catalog changes.

mod query;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use moka::sync::Cache;
use rust_decimal::Decimal;

use orchard_core::Product;

use crate::clock::Clock;

pub use query::{FilterSpec, PriceRange, SortKey};

/// How long a memoized view may serve before recompute.
///
/// Views depend on the clock through the on-sale predicate; the TTL bounds
/// how stale an expiring discount can appear.
const DEFAULT_VIEW_TTL: Duration = Duration::from_secs(60);

const VIEW_CACHE_CAPACITY: u64 = 256;

/// A filtered, sorted slice of the catalog plus the catalog-wide aggregates.
///
/// Derived data only - never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView {
    /// Products passing every predicate, in sorted order.
    pub products: Vec<Product>,
    /// Count per category over the entire unfiltered product set.
    pub category_counts: BTreeMap<String, usize>,
    /// Upper bound for a price-range control; `None` until a non-empty
    /// product set has been observed.
    pub price_bound: Option<Decimal>,
}

/// Products passing every predicate of `spec`, in its sort order.
///
/// Sorting is stable: ties keep their relative order from the input set.
#[must_use]
pub fn filter_and_sort(products: &[Product], spec: &FilterSpec, now: DateTime<Utc>) -> Vec<Product> {
    let mut matched: Vec<Product> = products
        .iter()
        .filter(|product| spec.matches(product, now))
        .cloned()
        .collect();
    sort_products(&mut matched, spec.sort_by);
    matched
}

/// Stable in-place sort. Price keys use the raw list price.
pub fn sort_products(products: &mut [Product], sort_by: SortKey) {
    match sort_by {
        SortKey::PriceAsc => products.sort_by_key(|p| p.price),
        SortKey::PriceDesc => products.sort_by_key(|p| std::cmp::Reverse(p.price)),
        SortKey::NameAsc => products.sort_by_cached_key(|p| p.name.to_lowercase()),
        SortKey::Newest => products.sort_by_key(|p| std::cmp::Reverse(p.created_at)),
    }
}

/// Count per category over the full product set.
#[must_use]
pub fn category_counts(products: &[Product]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for product in products {
        *counts.entry(product.category.clone()).or_insert(0) += 1;
    }
    counts
}

/// Highest list price rounded up to the next hundred, or `None` for an
/// empty set.
#[must_use]
pub fn price_bound(products: &[Product]) -> Option<Decimal> {
    products
        .iter()
        .map(|p| p.price)
        .max()
        .map(|max| (max / Decimal::ONE_HUNDRED).ceil() * Decimal::ONE_HUNDRED)
}

/// Owned catalog state: the current product set, its aggregates, and the
/// memoized views.
pub struct CatalogEngine {
    products: Vec<Product>,
    counts: BTreeMap<String, usize>,
    bound: Option<Decimal>,
    /// Bumped on every product-set replacement; part of the memo key.
    generation: u64,
    clock: Arc<dyn Clock>,
    views: Cache<(u64, FilterSpec), Arc<FilteredView>>,
}

impl CatalogEngine {
    /// Create an empty engine with the default view TTL.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_view_ttl(clock, DEFAULT_VIEW_TTL)
    }

    /// Create an empty engine whose memoized views expire after `ttl`.
    #[must_use]
    pub fn with_view_ttl(clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            products: Vec::new(),
            counts: BTreeMap::new(),
            bound: None,
            generation: 0,
            clock,
            views: Cache::builder()
                .max_capacity(VIEW_CACHE_CAPACITY)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Replace the product set.
    ///
    /// Category counts are recomputed from the new set. The price bound is
    /// fixed the first time a non-empty set arrives and kept thereafter.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.counts = category_counts(&products);
        if self.bound.is_none() {
            self.bound = price_bound(&products);
        }
        self.products = products;
        self.generation += 1;
    }

    /// The current product set, unfiltered.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Count per category over the full set, independent of any spec.
    #[must_use]
    pub const fn category_counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    /// The session-stable price bound, if a non-empty set has been seen.
    #[must_use]
    pub const fn price_bound(&self) -> Option<Decimal> {
        self.bound
    }

    /// The filtered view for `spec` over the current product set.
    ///
    /// Memoized per (generation, spec); an unchanged pair returns the same
    /// `Arc` until the TTL lapses.
    #[must_use]
    pub fn view(&self, spec: &FilterSpec) -> Arc<FilteredView> {
        self.views
            .get_with((self.generation, spec.clone()), || Arc::new(self.compute(spec)))
    }

    fn compute(&self, spec: &FilterSpec) -> FilteredView {
        FilteredView {
            products: filter_and_sort(&self.products, spec, self.clock.now()),
            category_counts: self.counts.clone(),
            price_bound: self.bound,
        }
    }
}
