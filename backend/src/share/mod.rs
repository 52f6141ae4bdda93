//! Share codes
//!
//! A whole room state (players + settings) packed into one URL-safe string:
//! compact JSON under short `p`/`s` keys, then standard-alphabet base64.
//! Pasting a code into another client reproduces the exact state.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::models::player::Player;
use crate::models::settings::RoomSettings;

/// Wire shape of a share code payload
#[derive(Debug, Serialize, Deserialize)]
struct ShareState {
    #[serde(rename = "p")]
    players: Vec<Player>,

    #[serde(rename = "s")]
    settings: RoomSettings,
}

/// Encode a room state as a share code
///
/// The inverse of [`decode_share_state`]; round-trips losslessly. Player
/// counts must be finite numbers (the engine-wide sanitize-before-invoking
/// contract); non-finite values are unrepresentable in JSON.
///
/// # Example
/// ```
/// use poker_settlement_core::{
///     decode_share_state, encode_share_state, GameSettings, Player, RoomSettings,
/// };
///
/// let players = vec![Player::new("Alice").with_buy_ins(1.0).with_chips(1500.0)];
/// let settings = RoomSettings::new(GameSettings::new(1000, 500));
///
/// let code = encode_share_state(&players, &settings);
/// let (decoded_players, decoded_settings) = decode_share_state(&code).unwrap();
/// assert_eq!(decoded_players, players);
/// assert_eq!(decoded_settings, settings);
/// ```
pub fn encode_share_state(players: &[Player], settings: &RoomSettings) -> String {
    let state = ShareState {
        players: players.to_vec(),
        settings: settings.clone(),
    };
    let json = serde_json::to_string(&state).expect("share state serializes to JSON");
    BASE64.encode(json)
}

/// Decode a share code back into a room state
///
/// Returns `None` for anything malformed — bad base64, bad UTF-8, bad JSON —
/// and never panics; a stale or truncated link simply fails to load.
pub fn decode_share_state(code: &str) -> Option<(Vec<Player>, RoomSettings)> {
    let bytes = BASE64.decode(code.trim()).ok()?;
    let json = String::from_utf8(bytes).ok()?;
    let state: ShareState = serde_json::from_str(&json).ok()?;
    Some((state.players, state.settings))
}
