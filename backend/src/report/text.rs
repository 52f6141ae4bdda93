//! Plain-text summary export
//!
//! Human-readable multi-line report: balance warning when the round does not
//! square, player list sorted by net descending with sign-prefixed amounts,
//! then the "who pays whom" list with arrow notation.

use std::cmp::Reverse;
use std::fmt::Write;

use crate::models::settings::GameSettings;
use crate::settlement::SettlementResult;

/// Render a settlement result as a plain-text summary
///
/// # Example
/// ```
/// use poker_settlement_core::{
///     calculate_settlement, generate_text_summary, GameSettings, Player,
/// };
///
/// let players = vec![
///     Player::new("Alice").with_buy_ins(1.0).with_chips(1500.0),
///     Player::new("Bob").with_buy_ins(1.0).with_chips(500.0),
/// ];
/// let settings = GameSettings::new(1000, 500);
/// let result = calculate_settlement(&players, &settings);
/// let text = generate_text_summary(&result, &settings);
///
/// assert!(text.contains("Alice: +$250"));
/// assert!(text.contains("Bob -> Alice: $250"));
/// ```
pub fn generate_text_summary(result: &SettlementResult, settings: &GameSettings) -> String {
    let mut text = String::new();

    let _ = writeln!(text, "Poker Settlement Summary");
    let _ = writeln!(
        text,
        "1 Buy-in = ${} ({} Chips)",
        settings.cash_per_buy_in(),
        settings.chip_per_buy_in()
    );
    text.push('\n');

    if !result.is_balanced {
        let _ = writeln!(
            text,
            "WARNING: totals are off by ${}. Check buy-ins and chip counts;\n\
             transfers are withheld until the round balances.",
            result.total_balance
        );
        text.push('\n');
    }

    let mut players = result.players.clone();
    players.sort_by_key(|p| Reverse(p.net_amount));

    let _ = writeln!(text, "Results:");
    for player in &players {
        let sign = if player.net_amount >= 0 { "+" } else { "-" };
        let _ = writeln!(
            text,
            "  {}: {}${}",
            player.name,
            sign,
            player.net_amount.abs()
        );
    }
    text.push('\n');

    // The unbalanced warning above already explains the missing transfers
    if result.is_balanced {
        if result.transfers.is_empty() {
            let _ = writeln!(text, "No transfers needed.");
        } else {
            let _ = writeln!(text, "Transfers:");
            for transfer in &result.transfers {
                let _ = writeln!(
                    text,
                    "  {} -> {}: ${}",
                    transfer.from_name, transfer.to_name, transfer.amount
                );
            }
        }
    }

    text
}
