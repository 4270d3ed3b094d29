//! Move selection for the computer player (O)
//!
//! The engine runs a depth-unlimited minimax with alpha-beta pruning over the
//! caller's board, placing and removing hypothetical marks in place. Wins
//! score `10 - depth` and losses `depth - 10`, so faster wins and slower
//! losses are preferred. Among equally scored moves the lowest index is
//! kept.

pub mod alpha_beta;
pub mod reference;

pub use alpha_beta::{
    ScoredMove, SearchStats, WIN_SCORE, best_scored_move, choose_move, choose_move_with_stats,
    minimax, score_moves,
};
pub use reference::{choose_move_exhaustive, minimax_exhaustive, score_moves_exhaustive};

use crate::{
    Error, Result,
    tictactoe::{Board, Player},
};

/// Checked variant of [`choose_move`] for callers holding untrusted boards.
///
/// # Errors
///
/// - [`Error::UnreachablePosition`] if the position cannot occur in a game
/// - [`Error::GameOver`] if either side has already won
/// - [`Error::NoValidMoves`] if the board is full
/// - [`Error::NotYourTurn`] if the mark counts say X is to move
pub fn try_choose_move(board: &mut Board) -> Result<usize> {
    board.validate()?;

    if board.winner().is_some() {
        return Err(Error::GameOver);
    }
    if board.is_full() {
        return Err(Error::NoValidMoves);
    }
    if board.to_move() != Player::O {
        return Err(Error::NotYourTurn {
            expected: board.to_move(),
            attempted: Player::O,
        });
    }

    Ok(choose_move(board))
}
