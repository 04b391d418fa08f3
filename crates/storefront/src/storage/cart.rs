//! Cart persistence helpers.
//!
//! Layered over the generic [`KvStore`]: both directions validate line
//! shape, so the persisted cart always satisfies the cart invariant
//! (`productId` a string, `quantity` an integer `>= 1`) even if a caller
//! hands over garbage.

use orchard_core::CartLine;

use super::{KvStore, StorageBackend, keys};
use crate::diagnostics::DiagnosticKind;

/// Cart-shaped view of the key/value store.
pub struct CartStorage<B: StorageBackend> {
    kv: KvStore<B>,
}

impl<B: StorageBackend> CartStorage<B> {
    pub const fn new(kv: KvStore<B>) -> Self {
        Self { kv }
    }

    /// Decode the persisted cart, dropping any entry that is not a valid
    /// cart line. Every dropped entry is reported to the diagnostics sink.
    ///
    /// A missing key and a persisted empty array both decode to an empty
    /// cart.
    pub fn get_cart(&self) -> Vec<CartLine> {
        let raw: Vec<serde_json::Value> = self.kv.read(keys::CART, Vec::new());

        let mut lines = Vec::with_capacity(raw.len());
        for entry in raw {
            match serde_json::from_value::<CartLine>(entry) {
                Ok(line) if line.is_valid() => lines.push(line),
                Ok(line) => self.kv.report(
                    keys::CART,
                    DiagnosticKind::LineDropped,
                    format!("non-positive quantity for {}", line.product_id),
                ),
                Err(err) => {
                    self.kv
                        .report(keys::CART, DiagnosticKind::LineDropped, err.to_string());
                }
            }
        }
        lines
    }

    /// Persist the cart, silently filtering out invalid lines first.
    ///
    /// Persisting an empty list writes a literal `[]`; only
    /// [`Self::clear_cart`] removes the key.
    pub fn set_cart(&self, lines: &[CartLine]) {
        let valid: Vec<&CartLine> = lines.iter().filter(|line| line.is_valid()).collect();
        self.kv.write(keys::CART, &valid);
    }

    /// Remove the persisted cart key entirely.
    pub fn clear_cart(&self) {
        self.kv.remove(keys::CART);
    }
}
