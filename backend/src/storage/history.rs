//! Local round history
//!
//! Finalized [`GameLog`] records for rounds viewed on this device. One
//! record per room: saving again for the same room replaces the old record
//! in place, new rooms go to the front (newest first).

use super::{KvStore, StorageError};
use crate::models::game_log::GameLog;

pub(crate) const GAME_RESULTS_KEY: &str = "poker_game_results_log";

/// Round-history store over an injected store
#[derive(Debug)]
pub struct GameLogStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> GameLogStore<S> {
    /// Wrap a store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All stored logs, newest rooms first
    ///
    /// Corrupt or missing stored data reads as the empty list.
    pub fn logs(&self) -> Vec<GameLog> {
        self.store
            .get(GAME_RESULTS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Save a finalized round, upserting by room id
    pub fn save(&mut self, log: GameLog) -> Result<(), StorageError> {
        let mut logs = self.logs();
        match logs.iter().position(|l| l.room_id == log.room_id) {
            Some(existing) => logs[existing] = log,
            None => logs.insert(0, log),
        }
        self.store.set(GAME_RESULTS_KEY, serde_json::to_string(&logs)?);
        Ok(())
    }

    /// Delete the whole history
    pub fn clear(&mut self) {
        self.store.remove(GAME_RESULTS_KEY);
    }
}
