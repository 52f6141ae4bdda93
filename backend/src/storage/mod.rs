//! Local device persistence
//!
//! A small key-value abstraction plus the three collaborators built on it:
//!
//! - [`NameDirectory`] — known-player-name suggestions for the add-player
//!   form
//! - [`GameLogStore`] — history of finalized rounds on this device
//! - [`UploadQueue`] — finalized game logs awaiting sync to shared storage
//!
//! All three take their store by injection; nothing here touches ambient
//! global state. Values are JSON documents. Reads are defensive: corrupt or
//! missing stored JSON degrades to the empty default rather than failing,
//! while writes propagate errors.

pub mod history;
pub mod names;
pub mod queue;

use std::collections::HashMap;

use thiserror::Error;

// Re-exports
pub use history::GameLogStore;
pub use names::NameDirectory;
pub use queue::UploadQueue;

/// Errors from persistence writes
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String-keyed JSON document store
///
/// The only surface the collaborators need: get, set, remove. Implementors
/// can back this with anything from an in-memory map to a browser's local
/// storage bridge.
pub trait KvStore {
    /// Read the raw JSON document at `key`, if present
    fn get(&self, key: &str) -> Option<String>;

    /// Write the raw JSON document at `key`
    fn set(&mut self, key: &str, value: String);

    /// Delete the document at `key`
    fn remove(&mut self, key: &str);
}

/// In-memory [`KvStore`] implementation
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
