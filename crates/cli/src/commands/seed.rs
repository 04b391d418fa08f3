//! Write the demo product catalog.
//!
//! The demo set covers every branch the filter engine cares about: multiple
//! categories, an out-of-stock product, discounts with and without an
//! expiry.

use std::fs;

use tracing::info;

use orchard_core::Product;
use orchard_storefront::config::StorefrontConfig;

/// Demo catalog, in the catalog wire form.
const DEMO_CATALOG: &str = r#"[
  {
    "id": "1",
    "name": "Mechanical Keyboard",
    "description": "High-quality mechanical keyboard with RGB backlight",
    "price": "129.99",
    "category": "Electronics",
    "stock": 50,
    "createdAt": "2025-09-01T00:00:00Z"
  },
  {
    "id": "2",
    "name": "Wireless Mouse",
    "description": "Ergonomic wireless mouse with long battery life",
    "price": "49.99",
    "category": "Electronics",
    "stock": 100,
    "discountPercentage": "20",
    "discountValidUntil": "2025-12-31T00:00:00Z",
    "createdAt": "2025-09-15T00:00:00Z"
  },
  {
    "id": "3",
    "name": "Noise-Cancelling Headphones",
    "description": "Premium wireless headphones with active noise cancellation",
    "price": "299.99",
    "category": "Electronics",
    "stock": 30,
    "discountPercentage": "15",
    "createdAt": "2025-09-20T00:00:00Z"
  },
  {
    "id": "4",
    "name": "JavaScript Programming Book",
    "description": "Comprehensive guide to modern JavaScript development",
    "price": "39.99",
    "category": "Books",
    "stock": 75,
    "createdAt": "2025-08-20T00:00:00Z"
  },
  {
    "id": "5",
    "name": "React Design Patterns",
    "description": "Advanced React patterns and best practices",
    "price": "45.99",
    "category": "Books",
    "stock": 60,
    "createdAt": "2025-09-10T00:00:00Z"
  },
  {
    "id": "6",
    "name": "Classic Leather Watch",
    "description": "Elegant timepiece with genuine leather strap",
    "price": "199.99",
    "category": "Fashion",
    "stock": 25,
    "discountPercentage": "10",
    "createdAt": "2025-09-05T00:00:00Z"
  },
  {
    "id": "7",
    "name": "Wool Blend Sweater",
    "description": "Comfortable and warm winter sweater",
    "price": "79.99",
    "category": "Fashion",
    "stock": 45,
    "createdAt": "2025-09-25T00:00:00Z"
  },
  {
    "id": "8",
    "name": "Smart LED Bulb Set",
    "description": "WiFi-enabled color changing LED bulbs",
    "price": "59.99",
    "category": "Home & Living",
    "stock": 0,
    "createdAt": "2025-09-12T00:00:00Z"
  },
  {
    "id": "9",
    "name": "Ceramic Plant Pot",
    "description": "Modern minimalist design plant pot",
    "price": "24.99",
    "category": "Home & Living",
    "stock": 85,
    "discountPercentage": "30",
    "discountValidUntil": "2025-11-30T00:00:00Z",
    "createdAt": "2025-09-18T00:00:00Z"
  },
  {
    "id": "10",
    "name": "Yoga Mat",
    "description": "Non-slip exercise yoga mat with carrying strap",
    "price": "29.99",
    "category": "Sports",
    "stock": 120,
    "createdAt": "2025-09-22T00:00:00Z"
  },
  {
    "id": "11",
    "name": "Resistance Bands Set",
    "description": "5-piece exercise bands with different resistance levels",
    "price": "19.99",
    "category": "Sports",
    "stock": 95,
    "discountPercentage": "25",
    "createdAt": "2025-09-28T00:00:00Z"
  }
]"#;

/// Write the demo catalog to the configured catalog path.
///
/// # Errors
///
/// Returns an error if the embedded catalog fails validation or the file
/// cannot be written.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;

    // Round-trip through the typed form so a drifted demo set fails loudly
    let products: Vec<Product> = serde_json::from_str(DEMO_CATALOG)?;
    let text = serde_json::to_string_pretty(&products)?;
    fs::write(&config.catalog_path, text)?;

    info!(
        path = %config.catalog_path.display(),
        products = products.len(),
        "Demo catalog written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_is_well_formed() {
        let products: Vec<Product> = serde_json::from_str(DEMO_CATALOG).expect("demo catalog");
        assert_eq!(products.len(), 11);

        // The set exercises the interesting engine branches
        assert!(products.iter().any(|p| p.stock == 0));
        assert!(products.iter().any(|p| p.discount_percentage.is_some()
            && p.discount_valid_until.is_none()));
        assert!(products.iter().any(|p| p.discount_valid_until.is_some()));
    }
}
