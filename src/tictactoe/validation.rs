//! Board state validation logic

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
};

impl Board {
    /// Check whether the position can arise in a game where X moves first
    /// and play stops at the first win.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Like [`Board::is_valid`], but explains what is wrong.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnreachablePosition`] naming the violated rule.
    pub fn validate(&self) -> Result<(), crate::Error> {
        let unreachable = |reason: &str| crate::Error::UnreachablePosition {
            board: self.encode(),
            reason: reason.to_string(),
        };

        let count = self.count_pieces();
        if !(count.x == count.o || count.x == count.o + 1) {
            return Err(unreachable(&format!(
                "piece counts X={}, O={} are impossible with X moving first",
                count.x, count.o
            )));
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return Err(unreachable("both players have a winning line"));
        }

        // The winner must have made the last move.
        if x_wins && count.x != count.o + 1 {
            return Err(unreachable("X has won but O moved afterwards"));
        }
        if o_wins && count.x != count.o {
            return Err(unreachable("O has won but X moved afterwards"));
        }

        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return Err(unreachable("X has two separate winning lines"));
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return Err(unreachable("O has two separate winning lines"));
        }

        Ok(())
    }

    /// Check if all winning lines for a player share at least one cell.
    /// Several lines can only be completed by a single move through a
    /// common cell.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::completed_lines(&self.cells, player);
        let Some(first) = lines.first() else {
            return true;
        };

        first
            .iter()
            .any(|idx| lines.iter().all(|line| line.contains(idx)))
    }
}
