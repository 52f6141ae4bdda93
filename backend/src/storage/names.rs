//! Known-player-name suggestions
//!
//! Every name that has appeared in a finished round lands here, so the
//! add-player form can offer autocomplete. Stored sorted and deduplicated.

use std::collections::BTreeSet;

use super::{KvStore, StorageError};

pub(crate) const KNOWN_PLAYERS_KEY: &str = "poker_known_players";

/// Name-suggestion registry over an injected store
///
/// # Example
/// ```
/// use poker_settlement_core::{MemoryStore, NameDirectory};
///
/// let mut names = NameDirectory::new(MemoryStore::new());
/// names.add_names(["Bob", "  Alice ", "", "Bob"]).unwrap();
/// assert_eq!(names.known_names(), vec!["Alice", "Bob"]);
///
/// names.remove_name("Bob").unwrap();
/// assert_eq!(names.known_names(), vec!["Alice"]);
/// ```
#[derive(Debug)]
pub struct NameDirectory<S: KvStore> {
    store: S,
}

impl<S: KvStore> NameDirectory<S> {
    /// Wrap a store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All known names, sorted
    ///
    /// Corrupt or missing stored data reads as the empty list.
    pub fn known_names(&self) -> Vec<String> {
        self.store
            .get(KNOWN_PLAYERS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Merge names into the registry
    ///
    /// Names are trimmed; blanks are skipped; duplicates collapse. The
    /// stored list stays sorted. Writes only when something changed.
    pub fn add_names<I, T>(&mut self, names: I) -> Result<(), StorageError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut current: BTreeSet<String> = self.known_names().into_iter().collect();
        let mut has_changes = false;

        for name in names {
            let clean = name.as_ref().trim();
            if !clean.is_empty() && current.insert(clean.to_string()) {
                has_changes = true;
            }
        }

        if has_changes {
            let sorted: Vec<&String> = current.iter().collect();
            self.store
                .set(KNOWN_PLAYERS_KEY, serde_json::to_string(&sorted)?);
        }
        Ok(())
    }

    /// Remove one name, if present
    pub fn remove_name(&mut self, name: &str) -> Result<(), StorageError> {
        let current = self.known_names();
        let remaining: Vec<&String> = current.iter().filter(|n| n.as_str() != name).collect();

        if remaining.len() != current.len() {
            self.store
                .set(KNOWN_PLAYERS_KEY, serde_json::to_string(&remaining)?);
        }
        Ok(())
    }
}
