//! Orchard Storefront - cart and catalog core.
//!
//! This crate implements the storefront's stateful core:
//!
//! - [`storage`] - typed key/value persistence over a durable local store,
//!   with decode-on-read validation and fail-soft writes
//! - [`cart`] - the authoritative in-memory cart, persisted synchronously
//!   after every command
//! - [`catalog`] - pure filter/sort engine over the product set, with
//!   catalog-wide aggregates and a memoized view cache
//!
//! Everything outside this core - rendering, routing, authentication, and
//! the HTTP fetch that produces the product set - stays with the caller.
//! The crate issues no network requests.
//!
//! # Collaborator seams
//!
//! Three small traits keep the core deterministic and testable:
//!
//! - [`clock::Clock`] supplies "now" for on-sale evaluation
//! - [`diagnostics::DiagnosticsSink`] receives storage failures; no storage
//!   error ever propagates to a caller
//! - [`source::ProductCatalogSource`] supplies the already-resolved product
//!   set
//!
//! # Error handling
//!
//! The public cart and catalog surfaces are infallible. Storage failures are
//! recovered locally (default substituted on read, in-memory state kept on
//! write) and reported to the diagnostics sink; the documented worst case is
//! loss of persisted cart state, never a crash. Memory and disk may diverge
//! after a failed write until the next successful one.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod diagnostics;
pub mod source;
pub mod state;
pub mod storage;
