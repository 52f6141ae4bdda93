//! Pending-upload queue
//!
//! Finalized game logs that still need to reach shared storage. Records are
//! enqueued at lock time and drained when a sync runs; callers re-enqueue
//! whatever failed to upload.

use super::{KvStore, StorageError};
use crate::models::game_log::GameLog;

pub(crate) const UPLOAD_QUEUE_KEY: &str = "poker_pending_uploads";

/// FIFO queue of finalized logs over an injected store
#[derive(Debug)]
pub struct UploadQueue<S: KvStore> {
    store: S,
}

impl<S: KvStore> UploadQueue<S> {
    /// Wrap a store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Logs waiting to be uploaded, oldest first
    ///
    /// Corrupt or missing stored data reads as the empty queue.
    pub fn pending(&self) -> Vec<GameLog> {
        self.store
            .get(UPLOAD_QUEUE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Append a finalized log to the queue
    pub fn enqueue(&mut self, log: GameLog) -> Result<(), StorageError> {
        let mut pending = self.pending();
        pending.push(log);
        self.store
            .set(UPLOAD_QUEUE_KEY, serde_json::to_string(&pending)?);
        Ok(())
    }

    /// Take everything out of the queue
    pub fn drain(&mut self) -> Vec<GameLog> {
        let pending = self.pending();
        self.store.remove(UPLOAD_QUEUE_KEY);
        pending
    }
}
