//! Running tally of finished games

use serde::{Deserialize, Serialize};

use crate::tictactoe::{GameOutcome, Player};

/// Wins for each side plus ties, from the human's point of view.
///
/// Missing fields deserialize as zero, so older or hand-edited score files
/// still load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBoard {
    pub player: u32,
    pub computer: u32,
    pub ties: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game. The human plays X and the computer O.
    ///
    /// Counters stop at `u32::MAX` rather than wrapping.
    pub fn record(&mut self, outcome: GameOutcome) {
        let counter = match outcome {
            GameOutcome::Win(Player::X) => &mut self.player,
            GameOutcome::Win(Player::O) => &mut self.computer,
            GameOutcome::Draw => &mut self.ties,
        };
        *counter = counter.saturating_add(1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn total(&self) -> u32 {
        self.player
            .saturating_add(self.computer)
            .saturating_add(self.ties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_map_to_counters() {
        let mut scores = ScoreBoard::new();
        scores.record(GameOutcome::Win(Player::O));
        scores.record(GameOutcome::Draw);
        scores.record(GameOutcome::Draw);
        scores.record(GameOutcome::Win(Player::X));

        assert_eq!(
            scores,
            ScoreBoard {
                player: 1,
                computer: 1,
                ties: 2
            }
        );
        assert_eq!(scores.total(), 4);

        scores.reset();
        assert_eq!(scores, ScoreBoard::default());
    }

    #[test]
    fn counters_saturate_instead_of_overflowing() {
        let mut scores: ScoreBoard =
            serde_json::from_str(r#"{"player": 0, "computer": 4294967295, "ties": 4294967294}"#)
                .unwrap();
        scores.record(GameOutcome::Win(Player::O));
        scores.record(GameOutcome::Draw);
        scores.record(GameOutcome::Draw);

        assert_eq!(scores.computer, u32::MAX);
        assert_eq!(scores.ties, u32::MAX);
        assert_eq!(scores.total(), u32::MAX);
    }

    #[test]
    fn partial_json_defaults_missing_fields() {
        let scores: ScoreBoard = serde_json::from_str(r#"{"ties": 3}"#).unwrap();
        assert_eq!(
            scores,
            ScoreBoard {
                player: 0,
                computer: 0,
                ties: 3
            }
        );
    }
}
