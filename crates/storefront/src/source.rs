//! Product catalog source seam.
//!
//! The engine never fetches anything itself; whatever resolves the product
//! set (an HTTP client, a fixture, a file on disk) implements this trait and
//! hands over the finished vector.

use std::path::{Path, PathBuf};

use thiserror::Error;

use orchard_core::Product;

/// Failures while resolving the product set.
#[derive(Debug, Error)]
pub enum CatalogSourceError {
    #[error("catalog file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog file {} is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Supplier of an already-resolved product set.
pub trait ProductCatalogSource {
    /// Resolve the full product set.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogSourceError`] if the set cannot be produced.
    fn load(&self) -> Result<Vec<Product>, CatalogSourceError>;
}

/// Catalog source reading a JSON array of products from a file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductCatalogSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Product>, CatalogSourceError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| CatalogSourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CatalogSourceError::Malformed {
            path: self.path.clone(),
            source,
        })
    }
}
