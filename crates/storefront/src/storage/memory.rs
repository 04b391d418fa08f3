//! In-memory storage backend.
//!
//! Used by tests and demos in place of the file backend. Carries
//! fault-injection switches so the fail-soft paths of the adapter can be
//! exercised without a real failing disk.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{StorageBackend, StorageError};

/// Volatile backend over a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `load` fail until reset.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::Relaxed);
    }

    /// Make every subsequent `store` fail until reset.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    /// Raw stored text for `key`, bypassing the failure switches.
    ///
    /// # Panics
    ///
    /// Panics if a previous holder of the entry lock panicked.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().expect("memory backend poisoned").get(key).cloned()
    }

    /// Whether `key` currently exists, bypassing the failure switches.
    ///
    /// # Panics
    ///
    /// Panics if a previous holder of the entry lock panicked.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.lock().expect("memory backend poisoned").contains_key(key)
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::Relaxed) {
            return Err(StorageError::Unavailable("injected read failure".to_owned()));
        }
        Ok(self.entries.lock().expect("memory backend poisoned").get(key).cloned())
    }

    fn store(&self, key: &str, text: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(StorageError::Unavailable("injected write failure".to_owned()));
        }
        self.entries
            .lock()
            .expect("memory backend poisoned")
            .insert(key.to_owned(), text.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().expect("memory backend poisoned").remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_load() {
        let backend = MemoryBackend::new();
        backend.store("cart", "[]").expect("store");
        assert_eq!(backend.load("cart").expect("load").as_deref(), Some("[]"));
    }

    #[test]
    fn test_injected_write_failure_leaves_prior_value() {
        let backend = MemoryBackend::new();
        backend.store("cart", "old").expect("store");

        backend.set_fail_writes(true);
        assert!(backend.store("cart", "new").is_err());
        assert_eq!(backend.get("cart").as_deref(), Some("old"));

        backend.set_fail_writes(false);
        backend.store("cart", "new").expect("store");
        assert_eq!(backend.get("cart").as_deref(), Some("new"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let backend = MemoryBackend::new();
        backend.store("cart", "[]").expect("store");
        backend.remove("cart").expect("remove");
        backend.remove("cart").expect("remove");
        assert!(!backend.contains_key("cart"));
    }
}
