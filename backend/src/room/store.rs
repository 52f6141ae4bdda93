//! Shared room document
//!
//! Owns the canonical `(players, settings)` state for one room. Writers
//! apply atomic, independent mutations (one player or setting at a time);
//! readers take fully-materialized snapshots and recompute the settlement
//! against those. Every successful mutation is appended to an event feed
//! that consumers drain, mirroring how the realtime store pushes each
//! change to all connected clients.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::player::Player;
use crate::models::settings::RoomSettings;
use crate::settlement::{calculate_settlement, SettlementResult};

/// Errors that can occur when mutating a room document
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoomError {
    #[error("player name already taken: {name}")]
    DuplicateName { name: String },

    #[error("no player with id {player_id}")]
    UnknownPlayer { player_id: String },

    #[error("room is locked")]
    Locked,
}

/// A state change pushed to every connected client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoomEvent {
    /// A player joined the round
    PlayerAdded { player_id: String, name: String },

    /// A player's buy-in count changed
    BuyInsChanged { player_id: String, buy_in_count: f64 },

    /// A player's final chip count changed
    ChipsChanged { player_id: String, final_chips: f64 },

    /// A player left the round
    PlayerRemoved { player_id: String },

    /// The room settings were replaced
    SettingsChanged { settings: RoomSettings },

    /// The round was locked or unlocked
    LockChanged { is_locked: bool },
}

/// Immutable copy of the room state, the engine's only input shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshot {
    pub players: Vec<Player>,
    pub settings: RoomSettings,
}

/// The canonical room document
///
/// # Example
/// ```
/// use poker_settlement_core::{GameSettings, RoomSettings, RoomStore};
///
/// let mut room = RoomStore::new(RoomSettings::new(GameSettings::new(1000, 500)));
/// let alice = room.add_player("Alice").unwrap();
/// room.set_buy_in_count(&alice, 1.0).unwrap();
/// room.set_final_chips(&alice, 1500.0).unwrap();
///
/// // Adding the same display name again is rejected
/// assert!(room.add_player("Alice").is_err());
///
/// let result = room.settle();
/// assert_eq!(result.players[0].net_amount, 250);
/// ```
#[derive(Debug, Clone)]
pub struct RoomStore {
    players: Vec<Player>,
    settings: RoomSettings,
    events: Vec<RoomEvent>,
}

impl RoomStore {
    /// Create an empty room with the given settings
    pub fn new(settings: RoomSettings) -> Self {
        Self {
            players: Vec::new(),
            settings,
            events: Vec::new(),
        }
    }

    /// Rebuild a room document from a snapshot (e.g. a decoded share code)
    pub fn from_snapshot(snapshot: RoomSnapshot) -> Self {
        Self {
            players: snapshot.players,
            settings: snapshot.settings,
            events: Vec::new(),
        }
    }

    /// Current players, in join order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Current settings
    pub fn settings(&self) -> &RoomSettings {
        &self.settings
    }

    /// Look up a player by id
    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    /// Add a player with zero buy-ins and zero chips
    ///
    /// Display names are unique per room (case-sensitive exact match).
    /// Returns the new player's id.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<String, RoomError> {
        self.ensure_unlocked()?;
        let name = name.into();
        if self.players.iter().any(|p| p.name() == name) {
            return Err(RoomError::DuplicateName { name });
        }

        let player = Player::new(name);
        let player_id = player.id().to_string();
        log::debug!("room: player {} added ({})", player.name(), player_id);
        self.events.push(RoomEvent::PlayerAdded {
            player_id: player_id.clone(),
            name: player.name().to_string(),
        });
        self.players.push(player);
        Ok(player_id)
    }

    /// Update a player's buy-in count
    pub fn set_buy_in_count(&mut self, player_id: &str, buy_in_count: f64) -> Result<(), RoomError> {
        self.ensure_unlocked()?;
        let player = self.player_mut(player_id)?;
        player.set_buy_in_count(buy_in_count);
        self.events.push(RoomEvent::BuyInsChanged {
            player_id: player_id.to_string(),
            buy_in_count,
        });
        Ok(())
    }

    /// Update a player's final chip count
    pub fn set_final_chips(&mut self, player_id: &str, final_chips: f64) -> Result<(), RoomError> {
        self.ensure_unlocked()?;
        let player = self.player_mut(player_id)?;
        player.set_final_chips(final_chips);
        self.events.push(RoomEvent::ChipsChanged {
            player_id: player_id.to_string(),
            final_chips,
        });
        Ok(())
    }

    /// Remove a player from the round
    ///
    /// Returns the removed player.
    pub fn remove_player(&mut self, player_id: &str) -> Result<Player, RoomError> {
        self.ensure_unlocked()?;
        let position = self
            .players
            .iter()
            .position(|p| p.id() == player_id)
            .ok_or_else(|| RoomError::UnknownPlayer {
                player_id: player_id.to_string(),
            })?;

        let removed = self.players.remove(position);
        log::debug!("room: player {} removed ({})", removed.name(), player_id);
        self.events.push(RoomEvent::PlayerRemoved {
            player_id: player_id.to_string(),
        });
        Ok(removed)
    }

    /// Replace the room settings
    pub fn update_settings(&mut self, settings: RoomSettings) -> Result<(), RoomError> {
        self.ensure_unlocked()?;
        self.settings = settings.clone();
        self.events.push(RoomEvent::SettingsChanged { settings });
        Ok(())
    }

    /// Lock the round (no-op when already locked)
    ///
    /// A locked room is read-only until unlocked; this is how a finished
    /// game is frozen for export and logging.
    pub fn lock(&mut self) {
        if !self.settings.is_locked() {
            self.settings.set_locked(true);
            log::debug!("room: locked");
            self.events.push(RoomEvent::LockChanged { is_locked: true });
        }
    }

    /// Unlock the round (no-op when already unlocked)
    pub fn unlock(&mut self) {
        if self.settings.is_locked() {
            self.settings.set_locked(false);
            log::debug!("room: unlocked");
            self.events.push(RoomEvent::LockChanged { is_locked: false });
        }
    }

    /// Take a plain deep copy of the current state
    ///
    /// Snapshots are what the engine consumes; later mutations of the store
    /// never affect a snapshot already taken.
    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            players: self.players.clone(),
            settings: self.settings.clone(),
        }
    }

    /// Run the settlement engine over the current state
    pub fn settle(&self) -> SettlementResult {
        calculate_settlement(&self.players, &self.settings.game())
    }

    /// Drain the accumulated change feed
    pub fn drain_events(&mut self) -> Vec<RoomEvent> {
        std::mem::take(&mut self.events)
    }

    fn ensure_unlocked(&self) -> Result<(), RoomError> {
        if self.settings.is_locked() {
            Err(RoomError::Locked)
        } else {
            Ok(())
        }
    }

    fn player_mut(&mut self, player_id: &str) -> Result<&mut Player, RoomError> {
        self.players
            .iter_mut()
            .find(|p| p.id() == player_id)
            .ok_or_else(|| RoomError::UnknownPlayer {
                player_id: player_id.to_string(),
            })
    }
}
