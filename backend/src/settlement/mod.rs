//! Settlement Module
//!
//! The core of the tracker: turns a snapshot of players and exchange
//! settings into each player's net result, a balance-validity check, and a
//! minimal transfer plan (who pays whom, how much).
//!
//! # Critical Invariants
//!
//! 1. **Purity**: the engine never mutates its inputs and performs no I/O;
//!    identical inputs produce identical output, transfer order included
//! 2. **Conservation**: the sum of all `net_amount` values equals
//!    `total_balance` exactly (i64 arithmetic after rounding)
//! 3. **Transfers only when balanced**: an unbalanced round yields an empty
//!    transfer list, signaling that the accounting must be corrected first
//! 4. **No leakage**: a debtor never pays out more than its loss, a creditor
//!    never receives more than its gain
//!
//! # Example
//!
//! ```rust
//! use poker_settlement_core::{calculate_settlement, GameSettings, Player};
//!
//! let players = vec![
//!     Player::new("Alice").with_buy_ins(1.0).with_chips(1500.0),
//!     Player::new("Bob").with_buy_ins(1.0).with_chips(500.0),
//! ];
//! let settings = GameSettings::new(1000, 500);
//!
//! let result = calculate_settlement(&players, &settings);
//! assert!(result.is_balanced);
//! assert_eq!(result.players[0].net_amount, 250);
//! assert_eq!(result.players[1].net_amount, -250);
//! assert_eq!(result.transfers.len(), 1);
//! assert_eq!(result.transfers[0].from_name, "Bob");
//! assert_eq!(result.transfers[0].to_name, "Alice");
//! assert_eq!(result.transfers[0].amount, 250);
//! ```

pub mod engine;

// Re-export public API
pub use engine::{
    calculate_settlement, SettledPlayer, SettlementResult, Transfer, LOOSE_BALANCE_TOLERANCE,
    TIGHT_BALANCE_TOLERANCE,
};
