//! A human-versus-computer match: turn order, end-of-game checks, restart

use serde::{Deserialize, Serialize};
use tracing::info;

use super::board::{Board, Player};
use crate::search;

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// What happened on a single turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub position: usize,
    pub player: Player,
    /// Set when this move ended the game
    pub outcome: Option<GameOutcome>,
}

/// A match between the human (X, always first) and the engine (O).
///
/// The game owns the canonical board. The engine only ever sees it through
/// [`Game::play_computer`], which lends it for the search and then applies
/// the chosen move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game: empty board, X to move
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            to_move: Player::X,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Clear the board and hand the first move back to the human
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// True until someone wins or the board fills up
    pub fn is_active(&self) -> bool {
        self.outcome.is_none()
    }

    /// Place the human's X at `position`.
    ///
    /// # Errors
    ///
    /// Fails without changing anything if the game is over, it is the
    /// computer's turn, or `position` is out of range or occupied.
    pub fn play_human(&mut self, position: usize) -> Result<TurnReport, crate::Error> {
        self.ensure_turn(Player::X)?;
        if position >= 9 {
            return Err(crate::Error::InvalidPosition { position });
        }
        if !self.board.is_empty(position) {
            return Err(crate::Error::InvalidMove { position });
        }

        Ok(self.apply(position, Player::X))
    }

    /// Let the engine pick and place O's move.
    ///
    /// # Errors
    ///
    /// Fails if the game is over or it is the human's turn.
    pub fn play_computer(&mut self) -> Result<TurnReport, crate::Error> {
        self.ensure_turn(Player::O)?;

        let position = search::choose_move(&mut self.board);
        Ok(self.apply(position, Player::O))
    }

    fn ensure_turn(&self, player: Player) -> Result<(), crate::Error> {
        if !self.is_active() {
            return Err(crate::Error::GameOver);
        }
        if self.to_move != player {
            return Err(crate::Error::NotYourTurn {
                expected: self.to_move,
                attempted: player,
            });
        }
        Ok(())
    }

    fn apply(&mut self, position: usize, player: Player) -> TurnReport {
        self.board.place(position, player);
        self.moves.push(Move { position, player });

        // Only the player who just moved can have completed a line.
        self.outcome = if self.board.has_won(player) {
            Some(GameOutcome::Win(player))
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        match self.outcome {
            Some(outcome) => info!(?outcome, moves = self.moves.len(), "game over"),
            None => self.to_move = player.opponent(),
        }

        TurnReport {
            position,
            player,
            outcome: self.outcome,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_moves_first_then_computer() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Player::X);

        let report = game.play_human(0).unwrap();
        assert_eq!(report.player, Player::X);
        assert_eq!(report.outcome, None);
        assert_eq!(game.to_move(), Player::O);

        let reply = game.play_computer().unwrap();
        assert_eq!(reply.position, 4);
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.moves().len(), 2);
    }

    #[test]
    fn out_of_turn_moves_are_rejected() {
        let mut game = Game::new();
        assert!(matches!(
            game.play_computer(),
            Err(crate::Error::NotYourTurn { .. })
        ));

        game.play_human(0).unwrap();
        assert!(matches!(
            game.play_human(1),
            Err(crate::Error::NotYourTurn { .. })
        ));
    }

    #[test]
    fn occupied_and_out_of_range_cells_are_rejected() {
        let mut game = Game::new();
        game.play_human(0).unwrap();
        game.play_computer().unwrap();

        assert!(matches!(
            game.play_human(4),
            Err(crate::Error::InvalidMove { position: 4 })
        ));
        assert!(matches!(
            game.play_human(9),
            Err(crate::Error::InvalidPosition { position: 9 })
        ));
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn restart_clears_everything() {
        let mut game = Game::new();
        game.play_human(0).unwrap();
        game.play_computer().unwrap();

        game.restart();
        assert_eq!(*game.board(), Board::new());
        assert!(game.moves().is_empty());
        assert!(game.is_active());
        assert_eq!(game.to_move(), Player::X);
    }
}
