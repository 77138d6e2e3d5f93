//! Command-line interface for brix.

use std::path::PathBuf;

use brix_tictactoe::Mode;
use clap::Parser;

use crate::theme::Theme;

/// Brix - tic-tac-toe in the terminal, from 3x3 up to 7x7
#[derive(Parser, Debug, Clone)]
#[command(name = "brix")]
#[command(about = "Tic-tac-toe in the terminal, 3x3 up to 7x7", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (used only if it exists)
    #[arg(short, long, default_value = "brix.toml")]
    pub config: PathBuf,

    /// Board side length
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(3..=7))]
    pub size: Option<u8>,

    /// Skip the menus and start in this mode (single or two)
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Colour theme (light or dark)
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Use the random opponent, seeded for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before the opponent replies, in milliseconds
    #[arg(long)]
    pub opponent_delay_ms: Option<u64>,

    /// Where to write logs (the terminal is taken by the UI)
    #[arg(long, default_value = "brix.log")]
    pub log_file: PathBuf,
}
