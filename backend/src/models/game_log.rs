//! Finalized game record
//!
//! When the host locks a finished round, the settlement result is hardened
//! into a [`GameLog`]: one compact record per room with each player's net.
//! Logs are what the history store keeps and what the upload queue ships to
//! shared storage later.

use serde::{Deserialize, Serialize};

use crate::settlement::SettlementResult;

/// One player's line in a finalized game record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLogEntry {
    /// Display name at settlement time
    pub name: String,

    /// Net result in cash units (positive = profit)
    pub net: i64,
}

/// Finalized record of a settled round
///
/// # Example
/// ```
/// use poker_settlement_core::{calculate_settlement, GameLog, GameSettings, Player};
///
/// let players = vec![
///     Player::new("Alice").with_buy_ins(1.0).with_chips(1500.0),
///     Player::new("Bob").with_buy_ins(1.0).with_chips(500.0),
/// ];
/// let result = calculate_settlement(&players, &GameSettings::new(1000, 500));
///
/// let log = GameLog::from_result("room-42", 1_700_000_000_000, "Alice", &result);
/// assert_eq!(log.players.len(), 2);
/// assert_eq!(log.players[0].net, 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLog {
    /// Room the round was played in
    pub room_id: String,

    /// When the record was finalized (caller-supplied unix milliseconds)
    #[serde(rename = "timestamp")]
    pub timestamp_ms: i64,

    /// Display name of the host who locked the round
    pub host_name: String,

    /// Per-player nets, in the round's player order
    pub players: Vec<GameLogEntry>,
}

impl GameLog {
    /// Build a record from a settlement result
    pub fn from_result(
        room_id: impl Into<String>,
        timestamp_ms: i64,
        host_name: impl Into<String>,
        result: &SettlementResult,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            timestamp_ms,
            host_name: host_name.into(),
            players: result
                .players
                .iter()
                .map(|p| GameLogEntry {
                    name: p.name.clone(),
                    net: p.net_amount,
                })
                .collect(),
        }
    }
}
