//! CSV export
//!
//! Column order is an external contract (spreadsheet import relies on it):
//!
//! ```text
//! Player,Buy-ins,Final Chips,Net Profit/Loss
//! <name>,<buyInCount>,<finalChips>,<netAmount>
//! ...
//!
//! TRANSFERS
//! From,To,Amount
//! <fromName>,<toName>,<amount>
//! ...
//! ```

use std::fmt::Write;

use crate::settlement::SettlementResult;

/// Render a settlement result as CSV
///
/// Players appear in input order (not re-sorted). Counts are rendered
/// without trailing zeros, so integral buy-ins print as plain integers.
///
/// # Example
/// ```
/// use poker_settlement_core::{calculate_settlement, generate_csv, GameSettings, Player};
///
/// let players = vec![
///     Player::new("Alice").with_buy_ins(1.0).with_chips(1500.0),
///     Player::new("Bob").with_buy_ins(1.0).with_chips(500.0),
/// ];
/// let result = calculate_settlement(&players, &GameSettings::new(1000, 500));
/// let csv = generate_csv(&result);
///
/// assert!(csv.starts_with("Player,Buy-ins,Final Chips,Net Profit/Loss\n"));
/// assert!(csv.contains("Alice,1,1500,250\n"));
/// assert!(csv.contains("\nTRANSFERS\nFrom,To,Amount\n"));
/// assert!(csv.ends_with("Bob,Alice,250\n"));
/// ```
pub fn generate_csv(result: &SettlementResult) -> String {
    let mut csv = String::from("Player,Buy-ins,Final Chips,Net Profit/Loss\n");

    for player in &result.players {
        let _ = writeln!(
            csv,
            "{},{},{},{}",
            player.name, player.buy_in_count, player.final_chips, player.net_amount
        );
    }

    csv.push_str("\nTRANSFERS\nFrom,To,Amount\n");
    for transfer in &result.transfers {
        let _ = writeln!(
            csv,
            "{},{},{}",
            transfer.from_name, transfer.to_name, transfer.amount
        );
    }

    csv
}
