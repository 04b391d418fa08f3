//! Orchard Core - Shared types library.
//!
//! This crate provides the domain types used across all Orchard components:
//! - `storefront` - Cart, persistence, and catalog logic
//! - `cli` - Command-line tools for seeding and browsing the catalog
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! clocks. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product, cart line, and ID types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
