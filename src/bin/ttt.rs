//! Terminal Tic-Tac-Toe against an opponent that never loses
//!
//! - `play`: interactive game, scores kept in a JSON file
//! - `best-move`: how the engine scores a position
//! - `verify`: exhaustive proof that no human strategy wins
//! - `scores`: show or reset the record

use anyhow::Result;
use clap::{Parser, Subcommand};
use unbeatable::cli::{commands, logging};

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Tic-Tac-Toe against minimax with alpha-beta pruning", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer
    Play(commands::play::PlayArgs),

    /// Score every move in a position and show the engine's choice
    BestMove(commands::best_move::BestMoveArgs),

    /// Check the engine against every possible human strategy
    Verify(commands::verify::VerifyArgs),

    /// Show or reset the score record
    Scores(commands::scores::ScoresArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => commands::play::execute(args),
        Commands::BestMove(args) => commands::best_move::execute(args),
        Commands::Verify(args) => commands::verify::execute(args),
        Commands::Scores(args) => commands::scores::execute(args),
    }
}
