//! The settlement calculation
//!
//! Net result per player, exact balance accumulation, and the greedy
//! two-pointer transfer plan.
//!
//! # Numeric model
//!
//! Chip and buy-in counts arrive as f64 (fractional buy-ins are legal
//! input); every cash amount is rounded half-away-from-zero to a whole cash
//! unit the moment it is computed, and all accounting from there on is exact
//! i64 arithmetic. The transfer plan therefore never sees floating-point
//! residue.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::models::player::Player;
use crate::models::settings::GameSettings;

/// Balance tolerance when one chip is worth at least one cash unit
pub const TIGHT_BALANCE_TOLERANCE: i64 = 1;

/// Balance tolerance when chips are worth less than one cash unit each;
/// per-player rounding can compound to a few units across a full table
pub const LOOSE_BALANCE_TOLERANCE: i64 = 5;

/// Input player annotated with the computed net result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettledPlayer {
    /// Player id, copied from the input
    pub id: String,

    /// Display name, copied from the input
    pub name: String,

    /// Buy-in count, copied from the input
    pub buy_in_count: f64,

    /// Final chip count, copied from the input
    pub final_chips: f64,

    /// Net profit (positive) or loss (negative) in cash units
    pub net_amount: i64,
}

/// One recommended payment from a net-loser to a net-winner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// Display name of the paying player
    pub from_name: String,

    /// Display name of the receiving player
    pub to_name: String,

    /// Positive cash amount to transfer
    pub amount: i64,
}

/// The engine's output, derived fresh from a `(players, settings)` snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementResult {
    /// Copy of the input players, each annotated with its net amount
    pub players: Vec<SettledPlayer>,

    /// Recommended payments; empty when already settled or unbalanced
    pub transfers: Vec<Transfer>,

    /// Exact sum of all net amounts (ideally 0)
    pub total_balance: i64,

    /// Whether `total_balance` is within the rounding tolerance of 0
    pub is_balanced: bool,
}

impl SettlementResult {
    /// The empty "not configured" result returned when the exchange ratio
    /// is unusable
    fn unconfigured() -> Self {
        Self {
            players: Vec::new(),
            transfers: Vec::new(),
            total_balance: 0,
            is_balanced: false,
        }
    }
}

/// Compute the settlement for a snapshot of players and exchange settings
///
/// Pure function: no mutation of inputs, no I/O, no logging. Recomputed from
/// scratch on every call; results are ephemeral, reconstructible data.
///
/// # Degenerate cases
///
/// - `chip_per_buy_in <= 0`: returns the empty result (`players` and
///   `transfers` empty, `total_balance` 0, `is_balanced` false). This
///   signals "not configured" to callers instead of dividing by zero.
/// - Empty `players`: valid input; `total_balance` 0 and `is_balanced` true
///   (vacuously balanced, there is nothing to settle).
///
/// # Balance check
///
/// `is_balanced` is `|total_balance| <= tolerance`, where the tolerance is
/// [`TIGHT_BALANCE_TOLERANCE`] when one chip is worth at least one cash unit
/// and [`LOOSE_BALANCE_TOLERANCE`] otherwise. Transfers are only computed
/// for a balanced round.
///
/// # Transfer plan
///
/// Greedy two-pointer matching: debtors sorted by net ascending (biggest
/// loser first), creditors by net descending (biggest winner first); the
/// current debtor pays the current creditor `min(debt, credit)` and whichever
/// side reaches zero advances. Sorting is stable, so players with equal nets
/// keep their input order and repeated calls yield identical transfer
/// ordering. Largest-first matching minimizes the number of transfers in the
/// common case; it is not a guaranteed-optimal solver for degenerate tie
/// patterns.
///
/// # Failure semantics
///
/// Never returns an error and never panics for numeric business input.
/// Non-finite values (NaN chips and the like) propagate garbage-in
/// garbage-out; callers sanitize before invoking.
///
/// # Example
///
/// ```rust
/// use poker_settlement_core::{calculate_settlement, GameSettings, Player};
///
/// // Three-way round: one winner, two losers
/// let players = vec![
///     Player::new("Ann").with_buy_ins(1.0).with_chips(1600.0),
///     Player::new("Ben").with_buy_ins(1.0).with_chips(800.0),
///     Player::new("Cy").with_buy_ins(1.0).with_chips(600.0),
/// ];
/// let result = calculate_settlement(&players, &GameSettings::new(1000, 500));
///
/// assert!(result.is_balanced);
/// assert_eq!(result.transfers.len(), 2);
/// // Biggest loser pays first
/// assert_eq!(result.transfers[0].from_name, "Cy");
/// assert_eq!(result.transfers[0].amount, 200);
/// assert_eq!(result.transfers[1].from_name, "Ben");
/// assert_eq!(result.transfers[1].amount, 100);
/// ```
pub fn calculate_settlement(players: &[Player], settings: &GameSettings) -> SettlementResult {
    if !settings.is_configured() {
        return SettlementResult::unconfigured();
    }

    let exchange_rate = settings.exchange_rate();
    let cash_per_buy_in = settings.cash_per_buy_in() as f64;

    let mut total_balance: i64 = 0;
    let settled: Vec<SettledPlayer> = players
        .iter()
        .map(|player| {
            let cost = player.buy_in_count() * cash_per_buy_in;
            let final_value = player.final_chips() * exchange_rate;
            let net_amount = (final_value - cost).round() as i64;
            total_balance += net_amount;
            SettledPlayer {
                id: player.id().to_string(),
                name: player.name().to_string(),
                buy_in_count: player.buy_in_count(),
                final_chips: player.final_chips(),
                net_amount,
            }
        })
        .collect();

    let is_balanced = total_balance.abs() <= balance_tolerance(exchange_rate);

    let transfers = if is_balanced {
        plan_transfers(&settled)
    } else {
        Vec::new()
    };

    SettlementResult {
        players: settled,
        transfers,
        total_balance,
        is_balanced,
    }
}

/// Tolerance for the balance check, by exchange rate
fn balance_tolerance(exchange_rate: f64) -> i64 {
    if exchange_rate >= 1.0 {
        TIGHT_BALANCE_TOLERANCE
    } else {
        LOOSE_BALANCE_TOLERANCE
    }
}

/// Greedy two-pointer transfer plan over the rounded nets
///
/// Works on i64 remaining amounts, so pointer advancement is an exact zero
/// test. Both working lists hold strictly nonzero nets, which makes every
/// emitted amount strictly positive.
fn plan_transfers(players: &[SettledPlayer]) -> Vec<Transfer> {
    let mut debtors: Vec<(&str, i64)> = players
        .iter()
        .filter(|p| p.net_amount < 0)
        .map(|p| (p.name.as_str(), p.net_amount))
        .collect();
    let mut creditors: Vec<(&str, i64)> = players
        .iter()
        .filter(|p| p.net_amount > 0)
        .map(|p| (p.name.as_str(), p.net_amount))
        .collect();

    // Stable sorts: ties keep the players' input order
    debtors.sort_by_key(|&(_, net)| net);
    creditors.sort_by_key(|&(_, net)| Reverse(net));

    let mut transfers = Vec::new();
    let mut debtor_idx = 0;
    let mut creditor_idx = 0;

    while debtor_idx < debtors.len() && creditor_idx < creditors.len() {
        let debt_amount = -debtors[debtor_idx].1;
        let credit_amount = creditors[creditor_idx].1;

        let transfer_amount = debt_amount.min(credit_amount);
        debug_assert!(transfer_amount > 0);

        transfers.push(Transfer {
            from_name: debtors[debtor_idx].0.to_string(),
            to_name: creditors[creditor_idx].0.to_string(),
            amount: transfer_amount,
        });

        // Move remaining amounts toward zero
        debtors[debtor_idx].1 += transfer_amount;
        creditors[creditor_idx].1 -= transfer_amount;

        if debtors[debtor_idx].1 == 0 {
            debtor_idx += 1;
        }
        if creditors[creditor_idx].1 == 0 {
            creditor_idx += 1;
        }
    }

    transfers
}
