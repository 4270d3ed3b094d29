//! Plain minimax without pruning or shortcuts.
//!
//! Too slow to matter in play, but simple enough to trust: the pruned engine
//! is checked against it position by position.

use super::alpha_beta::{ScoredMove, WIN_SCORE};
use crate::tictactoe::{Board, Player};

/// Lowest-index move with the greatest unpruned minimax score.
///
/// # Panics
///
/// Panics if the game is already over.
pub fn choose_move_exhaustive(board: &mut Board) -> usize {
    assert!(
        !board.is_terminal(),
        "choose_move_exhaustive called on a finished game:\n{board}"
    );

    let mut best: Option<ScoredMove> = None;
    for scored in score_moves_exhaustive(board) {
        if best.is_none_or(|b| scored.score > b.score) {
            best = Some(scored);
        }
    }
    best.map(|b| b.position)
        .expect("non-terminal board has an empty cell")
}

/// Unpruned score of every legal move for O
pub fn score_moves_exhaustive(board: &mut Board) -> Vec<ScoredMove> {
    board
        .legal_moves()
        .into_iter()
        .map(|position| {
            board.place(position, Player::O);
            let score = minimax_exhaustive(board, 0, false);
            board.clear(position);
            ScoredMove { position, score }
        })
        .collect()
}

/// Minimax value with the same terminal scoring as the pruned search
pub fn minimax_exhaustive(board: &mut Board, depth: i32, maximizing: bool) -> i32 {
    if board.has_won(Player::O) {
        return WIN_SCORE - depth;
    }
    if board.has_won(Player::X) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    let mover = if maximizing { Player::O } else { Player::X };
    let children = board.legal_moves().into_iter().map(|position| {
        board.place(position, mover);
        let eval = minimax_exhaustive(board, depth + 1, !maximizing);
        board.clear(position);
        eval
    });

    let best = if maximizing {
        children.max()
    } else {
        children.min()
    };
    best.unwrap_or(0)
}
