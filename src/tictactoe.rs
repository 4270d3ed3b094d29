//! Tic-Tac-Toe rules and match bookkeeping

pub mod board;
pub mod game;
pub mod lines;
pub mod validation;

pub use board::{Board, CENTER, Cell, Player, has_won, is_full, legal_moves};
pub use game::{Game, GameOutcome, Move, TurnReport};
pub use lines::{LineAnalyzer, WINNING_LINES};
