//! Command-line interface for the monogram TUI.

use clap::Parser;

/// Monogram tic-tac-toe — play the letters of your name
#[derive(Parser, Debug)]
#[command(name = "monogram_tui")]
#[command(about = "Two-player tic-tac-toe where your mark is your monogram", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Skip the intro animation and go straight to name entry
    #[arg(long)]
    pub skip_intro: bool,

    /// Seconds before the intro auto-advances to name entry
    #[arg(long, default_value = "3.5")]
    pub intro_secs: f64,

    /// Prefill Player A's name on the entry screen
    #[arg(long)]
    pub name_a: Option<String>,

    /// Prefill Player B's name on the entry screen
    #[arg(long)]
    pub name_b: Option<String>,
}
