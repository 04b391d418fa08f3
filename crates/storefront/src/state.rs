//! Owned application state.
//!
//! Cart and catalog live in an explicitly owned value the caller constructs
//! and passes around - no process-wide singleton - with the persistence
//! backend, clock, and diagnostics sink injected at the edges.

use std::sync::Arc;

use crate::cart::CartStore;
use crate::catalog::CatalogEngine;
use crate::clock::{Clock, SystemClock};
use crate::config::StorefrontConfig;
use crate::diagnostics::{DiagnosticsSink, TracingSink};
use crate::storage::{CartStorage, FileBackend, KvStore, StorageError};

/// Cart and catalog state over the file-backed store.
pub struct AppState {
    pub cart: CartStore<FileBackend>,
    pub catalog: CatalogEngine,
}

impl AppState {
    /// Build state with the default collaborators: file storage under the
    /// configured data directory, the system clock, and tracing
    /// diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the data directory cannot be opened.
    pub fn init(config: &StorefrontConfig) -> Result<Self, StorageError> {
        Self::with_collaborators(config, Arc::new(TracingSink), Arc::new(SystemClock))
    }

    /// Build state with explicit collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the data directory cannot be opened.
    pub fn with_collaborators(
        config: &StorefrontConfig,
        sink: Arc<dyn DiagnosticsSink>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, StorageError> {
        let backend = FileBackend::open(&config.data_dir)?;
        let cart = CartStore::new(CartStorage::new(KvStore::new(backend, sink)));
        let catalog = CatalogEngine::with_view_ttl(clock, config.view_cache_ttl);
        Ok(Self { cart, catalog })
    }
}
