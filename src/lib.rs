//! Unbeatable Tic-Tac-Toe
//!
//! This crate provides:
//! - Rules evaluation for the 3x3 board (wins, draws, legal moves)
//! - A minimax search with alpha-beta pruning that never loses as O
//! - A match session that sequences human and computer turns
//! - A persistent score record and a terminal front end
//!
//! ```
//! use unbeatable::{Board, choose_move};
//!
//! let mut board = Board::from_string("X........")?;
//! assert_eq!(choose_move(&mut board), 4);
//! # Ok::<(), unbeatable::Error>(())
//! ```

pub mod adapters;
pub mod analysis;
pub mod cli;
pub mod error;
pub mod ports;
pub mod scores;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use scores::ScoreBoard;
pub use search::{choose_move, minimax, try_choose_move};
pub use tictactoe::{Board, Cell, Game, GameOutcome, Player, has_won, is_full, legal_moves};
