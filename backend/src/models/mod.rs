//! Domain models for the settlement tracker

pub mod game_log;
pub mod player;
pub mod settings;

// Re-exports
pub use game_log::{GameLog, GameLogEntry};
pub use player::Player;
pub use settings::{GameSettings, RoomSettings};
