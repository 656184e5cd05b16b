//! Durable preference store.
//!
//! Layout preferences live in named slots holding JSON values. The medium
//! behind the slots is a [`StorageBackend`]; [`PreferenceStore`] wraps one and
//! never lets a storage problem reach the caller: a slot that is missing,
//! corrupt, or unreadable yields the supplied default, and failed writes are
//! logged and dropped.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

pub mod file;
pub mod memory;
pub mod write_behind;

pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use write_behind::WriteBehindBackend;

/// Errors raised by storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on slot '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid slot key: {0}")]
    InvalidKey(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// A persistence medium holding raw string values keyed by slot name.
pub trait StorageBackend: Send + Sync {
    /// Read a slot. `Ok(None)` means the slot has never been written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the contents of a slot.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Typed, infallible facade over a [`StorageBackend`].
#[derive(Clone)]
pub struct PreferenceStore {
    backend: Arc<dyn StorageBackend>,
}

impl PreferenceStore {
    pub fn new<B: StorageBackend + 'static>(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn from_shared(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store that only lives as long as the process.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Load a slot, substituting `default` when it is absent or unusable.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                log::warn!("Preference slot '{}' unreadable, using default: {}", key, e);
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Preference slot '{}' is corrupt, using default: {}", key, e);
                default
            }
        }
    }

    /// Write a slot. Failures are logged and otherwise ignored.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Failed to serialize preference slot '{}': {}", key, e);
                return;
            }
        };

        if let Err(e) = self.backend.write(key, &raw) {
            log::warn!("Failed to persist preference slot '{}': {}", key, e);
        }
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore").finish_non_exhaustive()
    }
}
