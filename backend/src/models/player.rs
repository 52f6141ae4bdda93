//! Player model
//!
//! Represents one participant in a settlement round. Each player has:
//! - A UUID string id, stable for the lifetime of the round
//! - A display name (uniqueness is enforced by the room store at the point
//!   of addition, not here)
//! - A buy-in count (may be fractional, typically integral)
//! - A final chip count held at settlement time
//!
//! The net result is NOT part of the player: it is derived by the settlement
//! engine and attached to the output copy (`SettledPlayer`).

use serde::{Deserialize, Serialize};

/// A participant in one settlement round
///
/// # Example
/// ```
/// use poker_settlement_core::Player;
///
/// let player = Player::new("Alice").with_buy_ins(2.0).with_chips(1500.0);
/// assert_eq!(player.name(), "Alice");
/// assert_eq!(player.buy_in_count(), 2.0);
/// assert_eq!(player.final_chips(), 1500.0);
/// assert!(!player.id().is_empty()); // Assigned a UUID
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique player identifier (UUID)
    id: String,

    /// Display name
    name: String,

    /// Number of buy-in units purchased (non-negative, may be fractional)
    buy_in_count: f64,

    /// Chip count held at settlement time (non-negative)
    final_chips: f64,
}

impl Player {
    /// Create a new player with zero buy-ins and zero chips
    ///
    /// A fresh UUID is assigned as the id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            buy_in_count: 0.0,
            final_chips: 0.0,
        }
    }

    /// Set the buy-in count (builder style)
    ///
    /// # Example
    /// ```
    /// use poker_settlement_core::Player;
    ///
    /// let player = Player::new("Alice").with_buy_ins(1.5);
    /// assert_eq!(player.buy_in_count(), 1.5);
    /// ```
    pub fn with_buy_ins(mut self, buy_in_count: f64) -> Self {
        self.buy_in_count = buy_in_count;
        self
    }

    /// Set the final chip count (builder style)
    pub fn with_chips(mut self, final_chips: f64) -> Self {
        self.final_chips = final_chips;
        self
    }

    /// Get player id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get buy-in count
    pub fn buy_in_count(&self) -> f64 {
        self.buy_in_count
    }

    /// Get final chip count
    pub fn final_chips(&self) -> f64 {
        self.final_chips
    }

    /// Update the buy-in count
    ///
    /// Numeric sanitization (clamping negatives, coercing blanks to zero) is
    /// the calling layer's job; this is a plain assignment.
    pub fn set_buy_in_count(&mut self, buy_in_count: f64) {
        self.buy_in_count = buy_in_count;
    }

    /// Update the final chip count
    pub fn set_final_chips(&mut self, final_chips: f64) {
        self.final_chips = final_chips;
    }
}
