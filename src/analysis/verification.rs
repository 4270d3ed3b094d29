//! Exhaustive checks of the engine against every possible human strategy

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    search::{self, ScoredMove, SearchStats},
    tictactoe::{Board, CENTER, Player},
};

/// Tally of every game the human (X) can force against a move chooser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// Distinct move sequences played to the end
    pub games: u64,
    pub computer_wins: u64,
    pub draws: u64,
    pub human_wins: u64,
    /// Replies that landed on an occupied cell (each ends its line of play)
    pub illegal_moves: u64,
    /// Replies after which the chooser had left the board modified
    pub board_mutations: u64,
    /// Number of positions the chooser was asked about
    pub positions_searched: u64,
}

impl VerificationReport {
    /// True when the chooser never lost, never cheated and never corrupted
    /// the board
    pub fn is_sound(&self) -> bool {
        self.human_wins == 0 && self.illegal_moves == 0 && self.board_mutations == 0
    }
}

/// Play the engine against every sequence of legal human moves.
pub fn verify_engine() -> VerificationReport {
    verify_chooser(search::choose_move)
}

/// Play `choose` as O against every sequence of legal X moves from the empty
/// board.
pub fn verify_chooser(mut choose: impl FnMut(&mut Board) -> usize) -> VerificationReport {
    let mut report = VerificationReport::default();
    let mut board = Board::new();
    explore_human_moves(&mut board, &mut choose, &mut report);
    debug!(?report, "verification finished");
    report
}

fn explore_human_moves(
    board: &mut Board,
    choose: &mut impl FnMut(&mut Board) -> usize,
    report: &mut VerificationReport,
) {
    for human in board.legal_moves() {
        board.place(human, Player::X);

        if board.has_won(Player::X) {
            report.games += 1;
            report.human_wins += 1;
            warn!(board = %board.encode(), "human line of play wins");
        } else if board.is_full() {
            report.games += 1;
            report.draws += 1;
        } else {
            answer(board, choose, report);
        }

        board.clear(human);
    }
}

fn answer(
    board: &mut Board,
    choose: &mut impl FnMut(&mut Board) -> usize,
    report: &mut VerificationReport,
) {
    let snapshot = *board;
    report.positions_searched += 1;
    let reply = choose(board);

    if *board != snapshot {
        report.board_mutations += 1;
        *board = snapshot;
    }
    if reply >= 9 || !board.is_empty(reply) {
        report.games += 1;
        report.illegal_moves += 1;
        warn!(board = %board.encode(), reply, "chooser picked an unavailable cell");
        return;
    }

    board.place(reply, Player::O);
    if board.has_won(Player::O) {
        report.games += 1;
        report.computer_wins += 1;
    } else if board.is_full() {
        report.games += 1;
        report.draws += 1;
    } else {
        explore_human_moves(board, choose, report);
    }
    board.clear(reply);
}

/// Every non-terminal position with O to move that arises when X opens and
/// both sides play any legal moves, sorted by encoding.
pub fn reachable_o_positions() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut positions = Vec::new();
    let mut stack = vec![Board::new()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) || board.is_terminal() {
            continue;
        }
        if board.to_move() == Player::O {
            positions.push(board);
        }
        for pos in board.legal_moves() {
            let Ok(next) = board.make_move(pos) else {
                continue;
            };
            stack.push(next);
        }
    }

    positions.sort_by_key(Board::encode);
    positions
}

/// Every O-to-move position the engine itself faces when X tries every
/// legal line of play against it, sorted by encoding.
///
/// This is a small subset of [`reachable_o_positions`]: boards where O has
/// already misplayed never arise, since O is always the engine.
pub fn engine_reachable_positions() -> Vec<Board> {
    let mut seen = HashSet::new();
    verify_chooser(|board| {
        seen.insert(*board);
        search::choose_move(board)
    });

    let mut positions: Vec<Board> = seen.into_iter().collect();
    positions.sort_by_key(Board::encode);
    positions
}

/// A position where the pruned engine and the reference search disagree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Disagreement {
    pub board: String,
    pub pruned: Vec<ScoredMove>,
    pub reference: Vec<ScoredMove>,
}

/// Outcome of comparing the pruned engine against plain minimax
#[derive(Debug, Clone, Default, Serialize)]
pub struct DifferentialReport {
    pub positions: usize,
    /// Positions where the move or any per-move score differs
    pub disagreements: Vec<Disagreement>,
    /// Positions answered by the center shortcut
    pub shortcut_positions: usize,
    /// Shortcut answers whose reference score is below the best available.
    /// Diagnostic only: these boards need an earlier O mistake.
    pub suboptimal_shortcuts: Vec<String>,
    /// Positions the engine faces in its own games
    pub engine_positions: usize,
    /// Shortcut answers on engine positions whose reference score is below
    /// the best available
    pub engine_suboptimal_shortcuts: Vec<String>,
    /// Optimal shortcut answers that are not the lowest-index optimum
    pub shortcut_reorderings: usize,
    /// Nodes visited by the pruned search over all positions
    pub pruned_nodes: u64,
}

impl DifferentialReport {
    pub fn is_consistent(&self) -> bool {
        self.disagreements.is_empty() && self.engine_suboptimal_shortcuts.is_empty()
    }
}

/// Compare pruned and unpruned search on every reachable O-to-move position.
///
/// Full searches must agree on the chosen move and on every move's score.
/// The center shortcut is only required to be optimal on positions from the
/// engine's own games; with an earlier O blunder on the board (for example
/// `XX......O`) taking the center can lose, and such boards are only
/// counted.
pub fn compare_with_reference() -> DifferentialReport {
    let positions = reachable_o_positions();
    let engine_positions: HashSet<Board> = engine_reachable_positions().into_iter().collect();
    let mut report = DifferentialReport {
        positions: positions.len(),
        engine_positions: engine_positions.len(),
        ..DifferentialReport::default()
    };

    for mut board in positions {
        let reference = search::score_moves_exhaustive(&mut board);
        let reference_best = first_best(&reference);

        let (engine_move, stats) = search::choose_move_with_stats(&mut board);
        report.pruned_nodes += stats.nodes;

        if stats.shortcut {
            report.shortcut_positions += 1;
            let center = reference
                .iter()
                .find(|m| m.position == CENTER)
                .map(|m| m.score);
            if center != Some(reference_best.score) {
                report.suboptimal_shortcuts.push(board.encode());
                if engine_positions.contains(&board) {
                    warn!(board = %board.encode(), "center shortcut loses value in engine play");
                    report.engine_suboptimal_shortcuts.push(board.encode());
                }
            } else if reference_best.position != CENTER {
                report.shortcut_reorderings += 1;
            }
        }

        let mut full_stats = SearchStats::default();
        let pruned_best = search::best_scored_move(&mut board, &mut full_stats);
        let pruned = search::score_moves(&mut board);

        if pruned_best != reference_best
            || pruned != reference
            || (!stats.shortcut && engine_move != reference_best.position)
        {
            report.disagreements.push(Disagreement {
                board: board.encode(),
                pruned,
                reference,
            });
        }
    }

    report
}

/// Count how often each cell is chosen over all reachable O positions.
pub fn move_histogram(positions: &[Board]) -> BTreeMap<usize, usize> {
    let mut histogram = BTreeMap::new();
    for board in positions {
        let mut board = *board;
        *histogram.entry(search::choose_move(&mut board)).or_default() += 1;
    }
    histogram
}

fn first_best(moves: &[ScoredMove]) -> ScoredMove {
    let mut best = moves[0];
    for &m in &moves[1..] {
        if m.score > best.score {
            best = m;
        }
    }
    best
}
