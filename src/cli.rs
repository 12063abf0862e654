//! Command-line interface for the tic-tac-toe binary.

use clap::Parser;

/// Two-player tic-tac-toe played in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe played in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
