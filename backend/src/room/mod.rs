//! Room Module
//!
//! The shared room document: the canonical list of players plus settings,
//! with the mutation operations every client applies (add player, edit
//! buy-ins, edit chips, edit settings) and a drainable change feed standing
//! in for the push-to-all-clients channel of the realtime store.
//!
//! The settlement engine never touches the live document; it consumes plain
//! [`RoomSnapshot`] copies taken through [`RoomStore::snapshot`], which
//! keeps the calculation boundary framework-agnostic and independently
//! testable.

pub mod store;

// Re-export public API
pub use store::{RoomError, RoomEvent, RoomSnapshot, RoomStore};
