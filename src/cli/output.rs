//! Output formatting and progress spinners for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    scores::ScoreBoard,
    tictactoe::{Board, Cell},
};

/// Create a spinner for long-running checks
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render the board as a grid; empty cells show the number to type.
pub fn render_board(board: &Board, one_based: bool) -> String {
    let offset = usize::from(one_based);
    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .map(|col| {
                    let idx = row * 3 + col;
                    match board.get(idx) {
                        Cell::Empty => (idx + offset).to_string(),
                        cell => cell.to_char().to_string(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .map(|line| format!(" {line}"))
        .collect();
    rows.join("\n---+---+---\n")
}

/// One-line summary of the score record
pub fn format_scores(scores: &ScoreBoard) -> String {
    format!(
        "You {}  Computer {}  Ties {}",
        scores.player, scores.computer, scores.ties
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cells_show_their_numbers() {
        let board = Board::from_string("X...O....").unwrap();
        let rendered = render_board(&board, false);
        assert_eq!(
            rendered,
            " X | 1 | 2\n---+---+---\n 3 | O | 5\n---+---+---\n 6 | 7 | 8"
        );
        assert!(render_board(&board, true).starts_with(" X | 2 | 3"));
    }

    #[test]
    fn scores_line() {
        let scores = ScoreBoard {
            player: 0,
            computer: 3,
            ties: 4,
        };
        assert_eq!(format_scores(&scores), "You 0  Computer 3  Ties 4");
    }
}
