//! Best-move command - show how the engine scores a position

use anyhow::{Result, bail};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{print_kv, print_section, render_board},
    search::{self, ScoredMove, SearchStats},
    tictactoe::{Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Score every move for O in a position and show the engine's choice")]
pub struct BestMoveArgs {
    /// Board as 9 cells in row-major order, e.g. "X........" ('.' = empty)
    pub board: String,

    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Analysis {
    board: String,
    chosen: usize,
    moves: Vec<ScoredMove>,
    stats: SearchStats,
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let mut board = Board::from_string(&args.board)?;
    board.validate()?;

    if let Some(winner) = board.winner() {
        bail!("{winner} has already won; there is nothing to search");
    }
    if board.is_full() {
        bail!("the board is full; the game is a draw");
    }
    if board.to_move() != Player::O {
        bail!("it is X's turn in this position; the engine only plays O");
    }

    let moves = search::score_moves(&mut board);
    let (chosen, stats) = search::choose_move_with_stats(&mut board);

    if args.json {
        let analysis = Analysis {
            board: board.encode(),
            chosen,
            moves,
            stats,
        };
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    print_section("Position");
    println!("{}", render_board(&board, false));

    print_section("Move scores (O to move)");
    for scored in &moves {
        let marker = if scored.position == chosen { "  <- chosen" } else { "" };
        print_kv(
            &format!("cell {}", scored.position),
            &format!("{:+}{marker}", scored.score),
        );
    }

    print_section("Search");
    print_kv("chosen move", &chosen.to_string());
    if stats.shortcut {
        print_kv("method", "center shortcut");
    } else {
        print_kv("method", "alpha-beta");
        print_kv("nodes", &stats.nodes.to_string());
        print_kv("cutoffs", &stats.cutoffs.to_string());
    }

    Ok(())
}
