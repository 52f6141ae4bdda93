//! Room registry
//!
//! Tracks the rooms a deployment knows about: creation, title metadata,
//! last-connection times, listing, deletion. This is the in-process model
//! of the management API surface (`GET/POST/DELETE /api/rooms`); transport
//! is out of scope, so the registry exposes the same semantics as plain
//! methods.
//!
//! Timestamps are caller-supplied unix milliseconds (`now_ms`), never read
//! from a clock here, so registry behavior is deterministic and testable.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from registry operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// The required room id was empty (the caller's 400 case)
    #[error("room id is required")]
    MissingRoomId,

    /// The room does not exist
    #[error("no room with id {room_id}")]
    NotFound { room_id: String },
}

/// What a create-or-update call intends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomIntent {
    /// Register the room; an existing id falls through to a metadata update
    Create,

    /// Update metadata only; the room must already exist
    Update,
}

/// Room metadata carried alongside the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomMetadata {
    pub title: String,
}

/// One room as listed by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummary {
    pub id: String,

    #[serde(rename = "createdAt")]
    pub created_at_ms: i64,

    #[serde(rename = "lastConnectionAt")]
    pub last_connection_at_ms: i64,

    pub metadata: RoomMetadata,
}

const DEFAULT_TITLE: &str = "New Poker Game";

/// In-process room registry
///
/// # Example
/// ```
/// use poker_settlement_core::{RoomDirectory, RoomIntent};
///
/// let mut directory = RoomDirectory::new();
/// directory
///     .create_or_update("room-1", Some("Friday Game"), RoomIntent::Create, 1_000)
///     .unwrap();
/// directory
///     .create_or_update("room-2", None, RoomIntent::Create, 2_000)
///     .unwrap();
///
/// let rooms = directory.list();
/// assert_eq!(rooms[0].id, "room-2"); // Newest connection first
/// assert_eq!(rooms[1].metadata.title, "Friday Game");
/// ```
#[derive(Debug, Default)]
pub struct RoomDirectory {
    // BTreeMap keeps listing deterministic for equal connection times
    rooms: BTreeMap<String, RoomSummary>,
}

impl RoomDirectory {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a room or update its title
    ///
    /// With [`RoomIntent::Create`], a new id is registered (title defaults
    /// to "New Poker Game"); an id that already exists is not an error —
    /// the call falls through to a metadata update so that re-creating a
    /// room is idempotent. With [`RoomIntent::Update`], the room must exist
    /// and only the title (when given) is touched.
    pub fn create_or_update(
        &mut self,
        room_id: &str,
        title: Option<&str>,
        intent: RoomIntent,
        now_ms: i64,
    ) -> Result<(), DirectoryError> {
        if room_id.is_empty() {
            return Err(DirectoryError::MissingRoomId);
        }

        if intent == RoomIntent::Create && !self.rooms.contains_key(room_id) {
            log::info!("directory: room {room_id} created");
            self.rooms.insert(
                room_id.to_string(),
                RoomSummary {
                    id: room_id.to_string(),
                    created_at_ms: now_ms,
                    last_connection_at_ms: now_ms,
                    metadata: RoomMetadata {
                        title: title.unwrap_or(DEFAULT_TITLE).to_string(),
                    },
                },
            );
            return Ok(());
        }

        // Metadata update (explicit, or create falling through on an
        // existing id)
        let room = self
            .rooms
            .get_mut(room_id)
            .ok_or_else(|| DirectoryError::NotFound {
                room_id: room_id.to_string(),
            })?;
        if let Some(title) = title {
            room.metadata.title = title.to_string();
        }
        Ok(())
    }

    /// Record a client connection to a room
    pub fn touch(&mut self, room_id: &str, now_ms: i64) -> Result<(), DirectoryError> {
        let room = self
            .rooms
            .get_mut(room_id)
            .ok_or_else(|| DirectoryError::NotFound {
                room_id: room_id.to_string(),
            })?;
        room.last_connection_at_ms = now_ms;
        Ok(())
    }

    /// List all rooms, newest connection first
    pub fn list(&self) -> Vec<RoomSummary> {
        let mut rooms: Vec<RoomSummary> = self.rooms.values().cloned().collect();
        rooms.sort_by_key(|r| Reverse(r.last_connection_at_ms));
        rooms
    }

    /// Look up one room
    pub fn get(&self, room_id: &str) -> Option<&RoomSummary> {
        self.rooms.get(room_id)
    }

    /// Delete a room
    pub fn delete(&mut self, room_id: &str) -> Result<(), DirectoryError> {
        if room_id.is_empty() {
            return Err(DirectoryError::MissingRoomId);
        }
        if self.rooms.remove(room_id).is_none() {
            return Err(DirectoryError::NotFound {
                room_id: room_id.to_string(),
            });
        }
        log::info!("directory: room {room_id} deleted");
        Ok(())
    }
}
