//! Command-line front end for the settlement core
//!
//! Reads a room snapshot (`{"players": [...], "settings": {...}}` JSON) and
//! prints settlement reports or share codes.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use poker_settlement_core::{
    calculate_settlement, decode_share_state, encode_share_state, generate_csv,
    generate_html_table, generate_text_summary, RoomSnapshot,
};

#[derive(Parser)]
#[command(name = "poker-settle", about = "Poker settlement tracker", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute and print the settlement for a room snapshot
    Report {
        /// Path to a snapshot JSON file
        file: PathBuf,

        /// Output rendering
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Print the share code for a room snapshot
    Share {
        /// Path to a snapshot JSON file
        file: PathBuf,
    },

    /// Decode a share code back to snapshot JSON
    Decode {
        /// The share code string
        code: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Csv,
    Html,
}

fn read_snapshot(file: &PathBuf) -> Result<RoomSnapshot> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid snapshot in {}", file.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Report { file, format } => {
            let snapshot = read_snapshot(&file)?;
            let settings = snapshot.settings.game();
            let result = calculate_settlement(&snapshot.players, &settings);
            let rendered = match format {
                Format::Text => generate_text_summary(&result, &settings),
                Format::Csv => generate_csv(&result),
                Format::Html => generate_html_table(&result, &settings),
            };
            print!("{rendered}");
        }
        Command::Share { file } => {
            let snapshot = read_snapshot(&file)?;
            println!(
                "{}",
                encode_share_state(&snapshot.players, &snapshot.settings)
            );
        }
        Command::Decode { code } => {
            let (players, settings) =
                decode_share_state(&code).context("invalid share code")?;
            let snapshot = RoomSnapshot { players, settings };
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }

    Ok(())
}
