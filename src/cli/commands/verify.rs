//! Verify command - play the engine against every human strategy

use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    analysis::{compare_with_reference, move_histogram, reachable_o_positions, verify_engine},
    cli::output::{create_spinner, print_kv, print_section},
};

#[derive(Parser, Debug)]
#[command(about = "Exhaustively check that the computer never loses")]
pub struct VerifyArgs {
    /// Also compare the pruned search with plain minimax on every position
    #[arg(long)]
    pub differential: bool,
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let spinner = create_spinner("Playing every human strategy...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let report = verify_engine();
    spinner.finish_and_clear();

    print_section("Exhaustive play");
    print_kv("games", &report.games.to_string());
    print_kv("computer wins", &report.computer_wins.to_string());
    print_kv("draws", &report.draws.to_string());
    print_kv("human wins", &report.human_wins.to_string());
    print_kv("positions searched", &report.positions_searched.to_string());

    if !report.is_sound() {
        bail!(
            "engine failed: {} human wins, {} illegal moves, {} board mutations",
            report.human_wins,
            report.illegal_moves,
            report.board_mutations
        );
    }

    let positions = reachable_o_positions();
    print_section("Replies over every reachable position");
    print_kv("positions", &positions.len().to_string());
    for (cell, count) in move_histogram(&positions) {
        print_kv(&format!("cell {cell}"), &count.to_string());
    }

    if args.differential {
        let spinner = create_spinner("Comparing pruned search with plain minimax...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        let diff = compare_with_reference();
        spinner.finish_and_clear();

        print_section("Pruned vs. plain minimax");
        print_kv("positions", &diff.positions.to_string());
        print_kv("disagreements", &diff.disagreements.len().to_string());
        print_kv("engine positions", &diff.engine_positions.to_string());
        print_kv("center shortcuts", &diff.shortcut_positions.to_string());
        print_kv(
            "after an O blunder",
            &diff.suboptimal_shortcuts.len().to_string(),
        );
        print_kv(
            "shortcut reorders",
            &diff.shortcut_reorderings.to_string(),
        );
        print_kv("pruned nodes", &diff.pruned_nodes.to_string());

        if let Some(first) = diff.disagreements.first() {
            bail!(
                "pruned search disagrees with reference on {} positions (first: {})",
                diff.disagreements.len(),
                first.board
            );
        }
        if let Some(board) = diff.engine_suboptimal_shortcuts.first() {
            bail!("center shortcut is not optimal in engine position {board}");
        }
    }

    println!("\nThe computer never loses.");
    Ok(())
}
