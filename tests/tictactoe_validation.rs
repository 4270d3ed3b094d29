//! Test suite for the Tic-tac-toe rules
//! Validates win detection, draws, move generation and position legality

use unbeatable::{
    Error,
    tictactoe::{Board, Cell, Player, WINNING_LINES, has_won, is_full, legal_moves},
};

fn board(s: &str) -> Board {
    Board::from_string(s).unwrap()
}

mod win_detection {
    use super::*;

    #[test]
    fn every_line_is_a_win_for_either_player() {
        for line in WINNING_LINES {
            for player in [Player::X, Player::O] {
                let mut b = Board::new();
                for &pos in &line {
                    b.place(pos, player);
                }
                assert!(has_won(&b, player), "{line:?} for {player}");
                assert!(!has_won(&b, player.opponent()));
            }
        }
    }

    #[test]
    fn two_marks_are_not_a_win() {
        for line in WINNING_LINES {
            let mut b = Board::new();
            b.place(line[0], Player::X);
            b.place(line[1], Player::X);
            assert!(!b.has_won(Player::X));
        }
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        // X X O
        // . . .
        // . . .
        let b = board("XXO......");
        assert!(!b.has_won(Player::X));
        assert!(!b.has_won(Player::O));
    }

    #[test]
    fn empty_board_has_no_winner() {
        let b = Board::new();
        assert!(!has_won(&b, Player::X));
        assert!(!has_won(&b, Player::O));
        assert_eq!(b.winner(), None);
    }
}

mod draws_and_moves {
    use super::*;

    #[test]
    fn full_board_without_line_is_a_draw() {
        // X O X
        // X O O
        // O X X
        let b = board("XOXXOOOXX");
        assert!(is_full(&b));
        assert!(b.is_draw());
        assert!(b.is_terminal());
        assert!(legal_moves(&b).is_empty());
    }

    #[test]
    fn win_on_the_last_move_is_not_a_draw() {
        // X O X
        // O O X
        // O X X
        let b = board("XOXOOXOXX");
        assert!(b.has_won(Player::X));
        assert!(b.is_full());
        assert!(!b.is_draw());
        assert_eq!(b.winner(), Some(Player::X));
    }

    #[test]
    fn legal_moves_are_ascending_empty_cells() {
        let b = board("X...O...X");
        assert_eq!(legal_moves(&b), vec![1, 2, 3, 5, 6, 7]);
        assert_eq!(legal_moves(&Board::new()), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn place_and_clear_restore_the_board() {
        let mut b = board("X........");
        let before = b;
        b.place(4, Player::O);
        assert_eq!(b.get(4), Cell::O);
        b.clear(4);
        assert_eq!(b, before);
    }

    #[test]
    fn to_move_follows_mark_counts() {
        assert_eq!(Board::new().to_move(), Player::X);
        assert_eq!(board("X........").to_move(), Player::O);
        assert_eq!(board("X...O....").to_move(), Player::X);
    }
}

mod position_legality {
    use super::*;

    #[test]
    fn double_line_sharing_a_cell_is_valid() {
        // X X X
        // O O X
        // O O X
        let b = board("XXXOOXOOX");
        assert!(b.is_valid(), "two winning lines sharing a cell can happen");
    }

    #[test]
    fn parallel_double_line_is_invalid() {
        // X X X
        // O O .
        // X X X
        let mut cells = [Cell::Empty; 9];
        for pos in [0, 1, 2, 6, 7, 8] {
            cells[pos] = Cell::X;
        }
        cells[3] = Cell::O;
        cells[4] = Cell::O;
        let b = Board::from_cells(cells);
        assert!(!b.is_valid());
    }

    #[test]
    fn both_players_winning_is_invalid() {
        // X X X
        // O O O
        // . . .
        let b = Board::from_cells([
            Cell::X,
            Cell::X,
            Cell::X,
            Cell::O,
            Cell::O,
            Cell::O,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
        ]);
        assert!(matches!(
            b.validate(),
            Err(Error::UnreachablePosition { .. })
        ));
    }

    #[test]
    fn o_cannot_move_first() {
        assert!(matches!(
            Board::from_string("O........"),
            Err(Error::InvalidPieceCounts {
                x_count: 0,
                o_count: 1
            })
        ));
    }

    #[test]
    fn bad_characters_and_lengths_are_rejected() {
        assert!(matches!(
            Board::from_string("X..Z....."),
            Err(Error::InvalidCellCharacter { character: 'Z', .. })
        ));
        assert!(matches!(
            Board::from_string("X...."),
            Err(Error::InvalidBoardLength { got: 5, .. })
        ));
    }

    #[test]
    fn whitespace_is_ignored_in_board_strings() {
        let spaced = Board::from_string("X.. .O. ...").unwrap();
        assert_eq!(spaced, board("X...O...."));
    }
}
