//! Typed key/value persistence over a durable local store.
//!
//! The store itself is a [`StorageBackend`]: string keys to UTF-8 text,
//! durable across restarts. [`KvStore`] layers JSON encoding on top with
//! fail-soft semantics - a read that cannot be decoded yields the caller's
//! default, a write the store rejects leaves the prior persisted value in
//! place, and both report to the [`DiagnosticsSink`] instead of raising.
//!
//! Cart-specific helpers live in [`cart`]; they validate line shape on both
//! the read and write path so persisted carts always satisfy the cart
//! invariant.

pub mod cart;
mod file;
mod memory;

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::diagnostics::{DiagnosticEvent, DiagnosticKind, DiagnosticsSink};

pub use cart::CartStorage;
pub use file::FileBackend;
pub use memory::MemoryBackend;

/// Well-known storage keys.
pub mod keys {
    /// The persisted cart: a JSON array of `{"productId", "quantity"}`.
    pub const CART: &str = "cart";
}

/// Failures the backing store can produce.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage directory could not be created or opened.
    #[error("storage directory {}: {source}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An I/O failure while reading, writing, or removing a key.
    #[error("key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The store refused the operation (e.g. out of capacity).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A durable local store of UTF-8 text keyed by short identifiers.
///
/// Implementations must be atomic per call: a failed `store` leaves the
/// prior value for the key intact.
pub trait StorageBackend: Send + Sync {
    /// Read the stored text for `key`, if any. An absent key is `Ok(None)`.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Durably store `text` under `key`, replacing any prior value.
    fn store(&self, key: &str, text: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Arc<B> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn store(&self, key: &str, text: &str) -> Result<(), StorageError> {
        (**self).store(key, text)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Typed JSON adapter over a [`StorageBackend`].
///
/// All operations are fail-soft: failures are reported to the diagnostics
/// sink and recovered locally, never surfaced to the caller. After a failed
/// write the caller's in-memory state and the persisted state diverge until
/// the next successful write; that divergence is accepted, not rolled back.
pub struct KvStore<B: StorageBackend> {
    backend: B,
    sink: Arc<dyn DiagnosticsSink>,
}

impl<B: StorageBackend> KvStore<B> {
    /// Create an adapter over `backend`, reporting failures to `sink`.
    pub fn new(backend: B, sink: Arc<dyn DiagnosticsSink>) -> Self {
        Self { backend, sink }
    }

    /// Decode the value stored under `key`, or `default` if the key is
    /// absent, unreadable, or not decodable as `T`.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let text = match self.backend.load(key) {
            Ok(Some(text)) => text,
            Ok(None) => return default,
            Err(err) => {
                self.report(key, DiagnosticKind::ReadFailed, err.to_string());
                return default;
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(err) => {
                self.report(key, DiagnosticKind::DecodeFailed, err.to_string());
                default
            }
        }
    }

    /// Serialize `value` and store it under `key`.
    ///
    /// On failure the prior persisted value is unchanged and the caller's
    /// in-memory state is not rolled back.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let text = match serde_json::to_string(value) {
            Ok(text) => text,
            Err(err) => {
                self.report(key, DiagnosticKind::WriteFailed, format!("serialize: {err}"));
                return;
            }
        };

        if let Err(err) = self.backend.store(key, &text) {
            self.report(key, DiagnosticKind::WriteFailed, err.to_string());
        }
    }

    /// Delete `key`. An absent key is not an error.
    pub fn remove(&self, key: &str) {
        if let Err(err) = self.backend.remove(key) {
            self.report(key, DiagnosticKind::RemoveFailed, err.to_string());
        }
    }

    pub(crate) fn report(&self, key: &str, kind: DiagnosticKind, detail: String) {
        self.sink.report(DiagnosticEvent::new(key, kind, detail));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::BufferSink;

    fn kv() -> (Arc<MemoryBackend>, Arc<BufferSink>, KvStore<Arc<MemoryBackend>>) {
        let backend = Arc::new(MemoryBackend::new());
        let sink = Arc::new(BufferSink::new());
        let store = KvStore::new(Arc::clone(&backend), sink.clone() as Arc<dyn DiagnosticsSink>);
        (backend, sink, store)
    }

    #[test]
    fn test_read_missing_key_returns_default_silently() {
        let (_backend, sink, store) = kv();
        let value: Vec<u32> = store.read("absent", vec![7]);
        assert_eq!(value, vec![7]);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let (_backend, sink, store) = kv();
        store.write("count", &42_u32);
        assert_eq!(store.read::<u32>("count", 0), 42);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_malformed_text_yields_default_and_reports() {
        let (backend, sink, store) = kv();
        backend.store("cart", "not-json").expect("seed");

        let value: Vec<u32> = store.read("cart", Vec::new());
        assert!(value.is_empty());
        assert_eq!(sink.count_of(DiagnosticKind::DecodeFailed), 1);
    }

    #[test]
    fn test_failed_write_keeps_prior_value_and_reports() {
        let (backend, sink, store) = kv();
        store.write("count", &1_u32);

        backend.set_fail_writes(true);
        store.write("count", &2_u32);

        assert_eq!(backend.get("count").as_deref(), Some("1"));
        assert_eq!(sink.count_of(DiagnosticKind::WriteFailed), 1);
    }

    #[test]
    fn test_remove_absent_key_is_not_an_error() {
        let (_backend, sink, store) = kv();
        store.remove("absent");
        assert!(sink.events().is_empty());
    }
}
