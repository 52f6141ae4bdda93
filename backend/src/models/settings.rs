//! Exchange configuration for one round
//!
//! Two layers, deliberately separated:
//! - [`GameSettings`] is the engine subset: the chip/cash exchange ratio and
//!   nothing else. This is all the settlement calculation ever sees.
//! - [`RoomSettings`] is the application superset: the same exchange config
//!   plus UI coordination flags (lock state, settlement-modal visibility)
//!   that the engine must never consume.

use serde::{Deserialize, Serialize};

/// Engine-relevant exchange configuration
///
/// # Example
/// ```
/// use poker_settlement_core::GameSettings;
///
/// // 1 buy-in = 1000 chips = 500 cash units
/// let settings = GameSettings::new(1000, 500);
/// assert!(settings.is_configured());
/// assert_eq!(settings.exchange_rate(), 0.5); // Cash value of one chip
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    /// Chips awarded per one buy-in unit (must be > 0 for a meaningful round)
    chip_per_buy_in: i64,

    /// Cash cost of one buy-in unit, in the room's currency unit
    cash_per_buy_in: i64,
}

impl GameSettings {
    /// Create exchange settings
    pub fn new(chip_per_buy_in: i64, cash_per_buy_in: i64) -> Self {
        Self {
            chip_per_buy_in,
            cash_per_buy_in,
        }
    }

    /// Chips per buy-in unit
    pub fn chip_per_buy_in(&self) -> i64 {
        self.chip_per_buy_in
    }

    /// Cash per buy-in unit
    pub fn cash_per_buy_in(&self) -> i64 {
        self.cash_per_buy_in
    }

    /// Whether the exchange ratio is usable (`chip_per_buy_in > 0`)
    ///
    /// An unconfigured ratio makes the whole calculation meaningless; the
    /// engine short-circuits to an empty result rather than dividing by zero.
    pub fn is_configured(&self) -> bool {
        self.chip_per_buy_in > 0
    }

    /// Cash value of one chip
    ///
    /// Only meaningful when [`is_configured`](Self::is_configured) holds;
    /// callers guard before dividing.
    pub fn exchange_rate(&self) -> f64 {
        self.cash_per_buy_in as f64 / self.chip_per_buy_in as f64
    }
}

/// Full room settings: exchange config plus UI coordination flags
///
/// The flags are owned by the surrounding application (they gate mutations
/// and drive shared modal state); the engine only ever receives the
/// [`GameSettings`] subset via [`game`](Self::game).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSettings {
    #[serde(flatten)]
    game: GameSettings,

    /// If true, the round is finished and the room document is read-only
    #[serde(default)]
    is_locked: bool,

    /// If true, the settlement view is open for every connected client
    #[serde(default)]
    show_settlement: bool,
}

impl RoomSettings {
    /// Create room settings with both UI flags off
    pub fn new(game: GameSettings) -> Self {
        Self {
            game,
            is_locked: false,
            show_settlement: false,
        }
    }

    /// The engine-relevant subset
    pub fn game(&self) -> GameSettings {
        self.game
    }

    /// Replace the exchange configuration
    pub fn set_game(&mut self, game: GameSettings) {
        self.game = game;
    }

    /// Whether the room is locked (finished, read-only)
    pub fn is_locked(&self) -> bool {
        self.is_locked
    }

    /// Set the lock flag
    pub fn set_locked(&mut self, is_locked: bool) {
        self.is_locked = is_locked;
    }

    /// Whether the shared settlement view is open
    pub fn show_settlement(&self) -> bool {
        self.show_settlement
    }

    /// Set the settlement-view flag
    pub fn set_show_settlement(&mut self, show_settlement: bool) {
        self.show_settlement = show_settlement;
    }
}
