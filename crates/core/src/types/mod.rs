//! Core types for Orchard.
//!
//! This module provides the domain types shared by the storefront core.

pub mod cart;
pub mod id;
pub mod product;

pub use cart::CartLine;
pub use id::ProductId;
pub use product::Product;
