//! Poker Settlement Core - Rust Engine
//!
//! Settlement tracking for live poker games: players record buy-ins and
//! final chip counts in a shared room, and the engine computes each player's
//! net result plus a minimal set of peer-to-peer transfers that squares the
//! game.
//!
//! # Architecture
//!
//! - **models**: Domain types (Player, GameSettings, RoomSettings, GameLog)
//! - **settlement**: The settlement engine (pure calculation, no I/O)
//! - **report**: Export renderings (CSV, HTML table, plain text)
//! - **room**: Shared room document with mutation ops and a change feed
//! - **directory**: Room registry (create/list/delete, connection tracking)
//! - **storage**: Injected local persistence (name suggestions, game logs,
//!   pending-upload queue)
//! - **share**: Base64 share codes for a full room state
//!
//! # Critical Invariants
//!
//! 1. All cash amounts after rounding are i64 (whole cash units)
//! 2. The settlement engine is a pure function: it never mutates its inputs
//!    and produces identical output for identical input, transfer order
//!    included
//! 3. Transfers are only computed when the round balances; an unbalanced
//!    round always yields an empty transfer list
//! 4. The library never reads a clock; timestamps are caller-supplied

// Module declarations
pub mod directory;
pub mod models;
pub mod report;
pub mod room;
pub mod settlement;
pub mod share;
pub mod storage;

// Re-exports for convenience
pub use directory::{DirectoryError, RoomDirectory, RoomIntent, RoomMetadata, RoomSummary};
pub use models::{
    game_log::{GameLog, GameLogEntry},
    player::Player,
    settings::{GameSettings, RoomSettings},
};
pub use report::{generate_csv, generate_html_table, generate_text_summary};
pub use room::{RoomError, RoomEvent, RoomSnapshot, RoomStore};
pub use settlement::{calculate_settlement, SettledPlayer, SettlementResult, Transfer};
pub use share::{decode_share_state, encode_share_state};
pub use storage::{
    GameLogStore, KvStore, MemoryStore, NameDirectory, StorageError, UploadQueue,
};
