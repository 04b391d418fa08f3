//! The authoritative in-memory cart.
//!
//! State lives here; the persisted copy is written through synchronously
//! after every mutating command, so a cooperative reader only ever observes
//! the pre- or post-command cart, never a partial one. Commands are
//! infallible: a write the store rejects is reported by the persistence
//! layer and the in-memory cart keeps going.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use orchard_core::{CartLine, Product, ProductId};

use crate::storage::{CartStorage, StorageBackend};

/// Cart state plus the transient open/closed drawer flag.
///
/// The flag is a UI concern carried alongside the cart; it is never
/// persisted and has no correctness invariant.
pub struct CartStore<B: StorageBackend> {
    lines: Vec<CartLine>,
    is_open: bool,
    storage: CartStorage<B>,
}

impl<B: StorageBackend> CartStore<B> {
    /// Create a store hydrated from the persisted cart, if any.
    pub fn new(storage: CartStorage<B>) -> Self {
        let lines = storage.get_cart();
        Self {
            lines,
            is_open: false,
            storage,
        }
    }

    /// Current cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart drawer is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Total units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Add `quantity` units of a product.
    ///
    /// An existing line for the product is incremented in place (no upper
    /// bound; stock limits are the caller's concern), otherwise a new line
    /// is appended. Adding zero units is a no-op; the quantity floor is a
    /// store policy, not a UI courtesy.
    pub fn add_line(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            tracing::debug!(product_id = %product_id, "ignoring zero-quantity add");
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine::new(product_id, quantity));
        }
        self.persist();
    }

    /// Remove the line for a product, if present.
    pub fn remove_line(&mut self, product_id: &ProductId) {
        self.lines.retain(|line| line.product_id != *product_id);
        self.persist();
    }

    /// Overwrite the quantity of an existing line.
    ///
    /// Zero is treated as removal: a line can never be set to a quantity
    /// the persistence layer would reject. A product with no line is left
    /// alone.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_line(product_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == *product_id) {
            line.quantity = quantity;
            self.persist();
        }
    }

    /// Empty the cart and remove the persisted key.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.storage.clear_cart();
    }

    /// Flip the drawer flag. Not persisted.
    pub const fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Sum of effective price times quantity over all lines.
    ///
    /// Each line is resolved against `products`; a line whose product is
    /// missing from the set contributes nothing.
    #[must_use]
    pub fn subtotal(&self, products: &[Product], now: DateTime<Utc>) -> Decimal {
        self.lines
            .iter()
            .filter_map(|line| {
                products
                    .iter()
                    .find(|p| p.id == line.product_id)
                    .map(|p| p.effective_price(now) * Decimal::from(line.quantity))
            })
            .sum()
    }

    fn persist(&self) {
        self.storage.set_cart(&self.lines);
    }
}
