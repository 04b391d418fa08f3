//! Cart line type.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// One product/quantity pair within a cart.
///
/// The persisted wire form is `{"productId": string, "quantity": number}`.
/// A line is only valid with `quantity >= 1`; the persistence layer strips
/// anything else before it ever reaches disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl CartLine {
    /// Create a new cart line.
    #[must_use]
    pub const fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }

    /// Whether the line satisfies the cart invariant (`quantity >= 1`).
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.quantity >= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form_uses_camel_case() {
        let line = CartLine::new(ProductId::new("p1"), 5);
        let json = serde_json::to_string(&line).expect("serialize");
        assert_eq!(json, r#"{"productId":"p1","quantity":5}"#);
    }

    #[test]
    fn test_zero_quantity_is_invalid() {
        assert!(!CartLine::new(ProductId::new("p1"), 0).is_valid());
        assert!(CartLine::new(ProductId::new("p1"), 1).is_valid());
    }

    #[test]
    fn test_rejects_non_integer_quantity() {
        let err = serde_json::from_str::<CartLine>(r#"{"productId":"p1","quantity":1.5}"#);
        assert!(err.is_err());

        let err = serde_json::from_str::<CartLine>(r#"{"productId":"p1","quantity":-2}"#);
        assert!(err.is_err());
    }
}
