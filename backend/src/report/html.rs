//! HTML table export
//!
//! A self-contained fragment with inline styles, suitable for pasting into
//! Google Docs or an email body. Players are sorted by net descending;
//! positive nets render green, negative red.

use std::cmp::Reverse;
use std::fmt::Write;

use crate::models::settings::GameSettings;
use crate::settlement::SettlementResult;

const TABLE_STYLE: &str =
    "border-collapse: collapse; width: 100%; font-family: Arial, sans-serif; border: 1px solid #ccc;";
const TH_STYLE: &str =
    "background-color: #f3f3f3; border: 1px solid #ccc; padding: 8px; text-align: left;";
const TD_STYLE: &str = "border: 1px solid #ccc; padding: 8px;";
const PROFIT_STYLE: &str = "color: #2e7d32; font-weight: bold;";
const LOSS_STYLE: &str = "color: #c62828; font-weight: bold;";

/// Render a settlement result as an inline-styled HTML fragment
///
/// Structure: heading, exchange-rate line, player table sorted by net
/// descending, then either a transfers table, a "No transfers needed."
/// line (settled with nothing to move), or an unbalanced warning.
pub fn generate_html_table(result: &SettlementResult, settings: &GameSettings) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        "<h2 style=\"font-family: Arial, sans-serif;\">Poker Settlement Result</h2>\n\
         <p>1 Buy-in = ${} ({} Chips)</p>\n\
         <h3 style=\"font-family: Arial, sans-serif;\">Player Results</h3>\n\
         <table style=\"{TABLE_STYLE}\"><thead><tr>\
         <th style=\"{TH_STYLE}\">Player</th>\
         <th style=\"{TH_STYLE}\">Buy-ins</th>\
         <th style=\"{TH_STYLE}\">Chips</th>\
         <th style=\"{TH_STYLE}\">Net Amount</th>\
         </tr></thead><tbody>\n",
        settings.cash_per_buy_in(),
        settings.chip_per_buy_in(),
    );

    // Sort a local copy; the result itself is never reordered
    let mut players = result.players.clone();
    players.sort_by_key(|p| Reverse(p.net_amount));

    for player in &players {
        let style = if player.net_amount >= 0 {
            PROFIT_STYLE
        } else {
            LOSS_STYLE
        };
        let sign = if player.net_amount >= 0 { "+" } else { "" };
        let _ = write!(
            html,
            "<tr>\
             <td style=\"{TD_STYLE}\">{}</td>\
             <td style=\"{TD_STYLE}\">{}</td>\
             <td style=\"{TD_STYLE}\">{}</td>\
             <td style=\"{TD_STYLE} {style}\">{sign}${}</td>\
             </tr>\n",
            player.name, player.buy_in_count, player.final_chips, player.net_amount,
        );
    }

    html.push_str("</tbody></table>\n");

    if !result.is_balanced {
        let _ = write!(
            html,
            "<p style=\"font-family: Arial, sans-serif; {LOSS_STYLE} margin-top: 20px;\">\
             Totals do not balance (off by ${}). Check buy-ins and chip counts.</p>\n",
            result.total_balance,
        );
    } else if result.transfers.is_empty() {
        html.push_str(
            "<p style=\"font-family: Arial, sans-serif; margin-top: 20px;\">No transfers needed.</p>\n",
        );
    } else {
        let _ = write!(
            html,
            "<h3 style=\"font-family: Arial, sans-serif; margin-top: 20px;\">Transfers</h3>\n\
             <table style=\"{TABLE_STYLE}\"><thead><tr>\
             <th style=\"{TH_STYLE}\">From</th>\
             <th style=\"{TH_STYLE}\">To</th>\
             <th style=\"{TH_STYLE}\">Amount</th>\
             </tr></thead><tbody>\n",
        );
        for transfer in &result.transfers {
            let _ = write!(
                html,
                "<tr>\
                 <td style=\"{TD_STYLE} color: #c62828;\">{}</td>\
                 <td style=\"{TD_STYLE} color: #2e7d32;\">{}</td>\
                 <td style=\"{TD_STYLE} font-weight: bold;\">${}</td>\
                 </tr>\n",
                transfer.from_name, transfer.to_name, transfer.amount,
            );
        }
        html.push_str("</tbody></table>\n");
    }

    html
}
