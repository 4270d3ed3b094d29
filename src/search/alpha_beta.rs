//! Minimax with alpha-beta pruning over a single backtracking board

use serde::Serialize;
use tracing::debug;

use crate::tictactoe::{Board, CENTER, Player};

/// Score of a win found at depth zero; deeper wins score less
pub const WIN_SCORE: i32 = 10;

/// A candidate move and the minimax value of playing it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    pub position: usize,
    pub score: i32,
}

/// Work counters for one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Calls to the recursive evaluator, terminal positions included
    pub nodes: u64,
    /// Nodes where the remaining siblings were skipped
    pub cutoffs: u64,
    /// Set when the answer came from an opening shortcut
    pub shortcut: bool,
}

/// Pick the computer's (O's) move.
///
/// The board is borrowed exclusively for the duration of the search and is
/// returned unchanged; applying the move is the caller's job.
///
/// # Panics
///
/// Panics if the game is already over (a win for either side or a full
/// board). Callers check for game end after every move.
pub fn choose_move(board: &mut Board) -> usize {
    choose_move_with_stats(board).0
}

/// [`choose_move`] plus the amount of work the search did
pub fn choose_move_with_stats(board: &mut Board) -> (usize, SearchStats) {
    assert!(
        !board.is_terminal(),
        "choose_move called on a finished game:\n{board}"
    );

    let mut stats = SearchStats::default();

    if board.is_blank() {
        stats.shortcut = true;
        debug!("opening move, taking the center");
        return (CENTER, stats);
    }

    // In the engine's own games the center is only free right after X's
    // opening, where taking it is optimal.
    if board.is_empty(CENTER) {
        stats.shortcut = true;
        debug!(board = %board.encode(), "center is free, skipping search");
        return (CENTER, stats);
    }

    let best = best_scored_move(board, &mut stats);
    debug!(
        board = %board.encode(),
        position = best.position,
        score = best.score,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "search finished"
    );
    (best.position, stats)
}

/// Full search without the opening shortcut: the lowest-index move with the
/// greatest score.
///
/// # Panics
///
/// Panics if the board has no empty cell.
pub fn best_scored_move(board: &mut Board, stats: &mut SearchStats) -> ScoredMove {
    let mut best: Option<ScoredMove> = None;

    for position in board.legal_moves() {
        board.place(position, Player::O);
        let score = alpha_beta(board, 0, false, i32::MIN, i32::MAX, stats);
        board.clear(position);

        // Strictly greater only: ties keep the earlier, lower index.
        if best.is_none_or(|b| score > b.score) {
            best = Some(ScoredMove { position, score });
        }
    }

    best.expect("search requires at least one empty cell")
}

/// Score every legal move for O with a full search window.
///
/// The values are exact, so they match the unpruned reference search.
pub fn score_moves(board: &mut Board) -> Vec<ScoredMove> {
    let mut stats = SearchStats::default();
    board
        .legal_moves()
        .into_iter()
        .map(|position| {
            board.place(position, Player::O);
            let score = alpha_beta(board, 0, false, i32::MIN, i32::MAX, &mut stats);
            board.clear(position);
            ScoredMove { position, score }
        })
        .collect()
}

/// Minimax value of `board` from O's point of view.
///
/// `depth` counts plies below the move being evaluated; it shortens wins and
/// lengthens losses. `maximizing` is true when O is to move. The window
/// `alpha..beta` bounds the scores still of interest; pass
/// `i32::MIN, i32::MAX` for an exact value.
pub fn minimax(board: &mut Board, depth: i32, maximizing: bool, alpha: i32, beta: i32) -> i32 {
    let mut stats = SearchStats::default();
    alpha_beta(board, depth, maximizing, alpha, beta, &mut stats)
}

fn alpha_beta(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if board.has_won(Player::O) {
        return WIN_SCORE - depth;
    }
    if board.has_won(Player::X) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    if maximizing {
        let mut max_eval = i32::MIN;
        for position in board.legal_moves() {
            board.place(position, Player::O);
            let eval = alpha_beta(board, depth + 1, false, alpha, beta, stats);
            board.clear(position);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for position in board.legal_moves() {
            board.place(position, Player::X);
            let eval = alpha_beta(board, depth + 1, true, alpha, beta, stats);
            board.clear(position);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        min_eval
    }
}
