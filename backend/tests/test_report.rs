//! Tests for the export renderers (CSV, HTML, plain text)

use poker_settlement_core::{
    calculate_settlement, generate_csv, generate_html_table, generate_text_summary, GameSettings,
    Player,
};

fn settings() -> GameSettings {
    GameSettings::new(1000, 500)
}

fn two_player_result() -> poker_settlement_core::SettlementResult {
    let players = vec![
        Player::new("Bob").with_buy_ins(1.0).with_chips(500.0),
        Player::new("Alice").with_buy_ins(1.0).with_chips(1500.0),
    ];
    calculate_settlement(&players, &settings())
}

fn unbalanced_result() -> poker_settlement_core::SettlementResult {
    let players = vec![
        Player::new("A").with_buy_ins(1.0).with_chips(1100.0),
        Player::new("B").with_buy_ins(1.0).with_chips(1000.0),
    ];
    calculate_settlement(&players, &settings())
}

#[test]
fn test_csv_structure() {
    let csv = generate_csv(&two_player_result());
    let lines: Vec<&str> = csv.split('\n').collect();

    assert_eq!(lines[0], "Player,Buy-ins,Final Chips,Net Profit/Loss");
    // Players in input order, not re-sorted
    assert_eq!(lines[1], "Bob,1,500,-250");
    assert_eq!(lines[2], "Alice,1,1500,250");
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "TRANSFERS");
    assert_eq!(lines[5], "From,To,Amount");
    assert_eq!(lines[6], "Bob,Alice,250");
}

#[test]
fn test_csv_round_trip() {
    let result = two_player_result();
    let csv = generate_csv(&result);

    let lines: Vec<&str> = csv.lines().collect();
    let player_rows: Vec<Vec<&str>> = lines[1..3]
        .iter()
        .map(|line| line.split(',').collect())
        .collect();

    assert_eq!(player_rows.len(), result.players.len());
    for (row, player) in player_rows.iter().zip(&result.players) {
        assert_eq!(row[0], player.name);
        assert_eq!(row[1].parse::<f64>().unwrap(), player.buy_in_count);
        assert_eq!(row[2].parse::<f64>().unwrap(), player.final_chips);
        assert_eq!(row[3].parse::<i64>().unwrap(), player.net_amount);
    }

    let transfer_row: Vec<&str> = lines[6].split(',').collect();
    assert_eq!(transfer_row, vec!["Bob", "Alice", "250"]);
}

#[test]
fn test_csv_without_transfers_keeps_section_marker() {
    let players = vec![
        Player::new("A").with_buy_ins(1.0).with_chips(1000.0),
        Player::new("B").with_buy_ins(1.0).with_chips(1000.0),
    ];
    let csv = generate_csv(&calculate_settlement(&players, &settings()));

    assert!(csv.contains("\nTRANSFERS\nFrom,To,Amount\n"));
    assert!(csv.ends_with("From,To,Amount\n"));
}

#[test]
fn test_csv_fractional_counts_render_plainly() {
    let players = vec![Player::new("A").with_buy_ins(1.5).with_chips(1500.0)];
    let csv = generate_csv(&calculate_settlement(&players, &settings()));

    assert!(csv.contains("A,1.5,1500,0\n"));
}

#[test]
fn test_html_sorts_winners_first() {
    let html = generate_html_table(&two_player_result(), &settings());

    let alice = html.find("Alice").expect("winner row present");
    let bob = html.find("Bob").expect("loser row present");
    assert!(alice < bob);
}

#[test]
fn test_html_sign_and_color_coding() {
    let html = generate_html_table(&two_player_result(), &settings());

    assert!(html.contains("+$250"));
    assert!(html.contains("$-250"));
    assert!(html.contains("color: #2e7d32")); // profit green
    assert!(html.contains("color: #c62828")); // loss red
    assert!(html.contains("1 Buy-in = $500 (1000 Chips)"));
}

#[test]
fn test_html_transfers_table() {
    let html = generate_html_table(&two_player_result(), &settings());

    assert!(html.contains("Transfers"));
    assert!(html.contains("$250"));
    assert!(!html.contains("No transfers needed."));
}

#[test]
fn test_html_settled_round_message() {
    let players = vec![
        Player::new("A").with_buy_ins(1.0).with_chips(1000.0),
        Player::new("B").with_buy_ins(1.0).with_chips(1000.0),
    ];
    let html = generate_html_table(&calculate_settlement(&players, &settings()), &settings());

    assert!(html.contains("No transfers needed."));
}

#[test]
fn test_html_unbalanced_warning() {
    let html = generate_html_table(&unbalanced_result(), &settings());

    assert!(html.contains("Totals do not balance (off by $50)"));
    assert!(!html.contains("No transfers needed."));
}

#[test]
fn test_html_does_not_reorder_the_result() {
    let result = two_player_result();
    let before = result.clone();
    let _ = generate_html_table(&result, &settings());

    assert_eq!(result, before);
    assert_eq!(result.players[0].name, "Bob");
}

#[test]
fn test_text_summary_balanced() {
    let text = generate_text_summary(&two_player_result(), &settings());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Poker Settlement Summary");
    assert_eq!(lines[1], "1 Buy-in = $500 (1000 Chips)");
    assert!(!text.contains("WARNING"));

    // Net descending with sign prefixes
    let alice = text.find("Alice: +$250").expect("winner line");
    let bob = text.find("Bob: -$250").expect("loser line");
    assert!(alice < bob);

    assert!(text.contains("Bob -> Alice: $250"));
}

#[test]
fn test_text_summary_unbalanced() {
    let text = generate_text_summary(&unbalanced_result(), &settings());

    assert!(text.contains("WARNING: totals are off by $50"));
    assert!(!text.contains("Transfers:"));
    assert!(!text.contains("No transfers needed."));
}

#[test]
fn test_text_summary_settled_round() {
    let players = vec![
        Player::new("A").with_buy_ins(1.0).with_chips(1000.0),
        Player::new("B").with_buy_ins(1.0).with_chips(1000.0),
    ];
    let text = generate_text_summary(&calculate_settlement(&players, &settings()), &settings());

    assert!(text.contains("No transfers needed."));
}
