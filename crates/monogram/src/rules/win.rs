//! Win detection: permutation windows under ownership.

use crate::monogram::Monogram;
use crate::position::Position;
use crate::types::{Board, Seat, Square};
use tracing::instrument;

/// The 8 standard lines of the board.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds a winning window for `seat` on `board`.
///
/// A window is a contiguous run of `monogram.len()` cells within one line,
/// so a 2-letter monogram has two candidate windows per line and a 1-letter
/// monogram three. The window wins when every cell was placed by `seat` and
/// its glyphs, read in line order, form an arrangement of the monogram.
/// Cells placed by the other seat never contribute: a run partially written
/// by the opponent cannot complete a win.
///
/// Returns the winning cells in line order, or `None`.
#[instrument(skip(board, monogram), fields(monogram = monogram.as_str()))]
pub fn find_win(board: &Board, seat: Seat, monogram: &Monogram) -> Option<Vec<Position>> {
    // 1-3 by construction; a match never starts without a monogram.
    let len = monogram.len();

    for line in &LINES {
        for window in line.windows(len) {
            if let Some(candidate) = owned_glyphs(board, seat, window)
                && monogram.matches(&candidate)
            {
                return Some(window.to_vec());
            }
        }
    }

    None
}

/// Joins the window's glyphs in line order, or `None` if any cell is empty
/// or owned by the other seat.
fn owned_glyphs(board: &Board, seat: Seat, window: &[Position]) -> Option<String> {
    window
        .iter()
        .map(|&pos| match board.get(pos) {
            Square::Marked { glyph, owner } if owner == seat => Some(glyph),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(board: &mut Board, pos: Position, glyph: char, owner: Seat) {
        board.set(pos, Square::Marked { glyph, owner });
    }

    #[test]
    fn test_no_win_on_empty_board() {
        let board = Board::new();
        let monogram = Monogram::from_name("Bob").unwrap();
        assert_eq!(find_win(&board, Seat::A, &monogram), None);
    }

    #[test]
    fn test_whole_line_permutation_wins() {
        // "OBB" is an arrangement of "BOB" across the top row.
        let mut board = Board::new();
        let monogram = Monogram::from_name("Bob").unwrap();
        mark(&mut board, Position::TopLeft, 'O', Seat::B);
        mark(&mut board, Position::TopCenter, 'B', Seat::B);
        mark(&mut board, Position::TopRight, 'B', Seat::B);

        let cells = find_win(&board, Seat::B, &monogram).expect("permutation should win");
        assert_eq!(
            cells,
            vec![Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_two_letter_window_wins_mid_line() {
        // "LA" in the middle of the bottom row, both cells owned by A.
        let mut board = Board::new();
        let monogram = Monogram::from_name("Ann Lee").unwrap();
        mark(&mut board, Position::BottomCenter, 'L', Seat::A);
        mark(&mut board, Position::BottomRight, 'A', Seat::A);

        let cells = find_win(&board, Seat::A, &monogram).expect("sub-window should win");
        assert_eq!(cells, vec![Position::BottomCenter, Position::BottomRight]);
    }

    #[test]
    fn test_single_letter_monogram_wins_on_one_cell() {
        let mut board = Board::new();
        let monogram = Monogram::from_name("Q").unwrap();
        mark(&mut board, Position::Center, 'Q', Seat::A);

        let cells = find_win(&board, Seat::A, &monogram).expect("single cell should win");
        assert_eq!(cells, vec![Position::Center]);
    }

    #[test]
    fn test_opponent_cell_never_contributes() {
        // The glyphs spell "AL" but the 'L' belongs to seat B.
        let mut board = Board::new();
        let monogram = Monogram::from_name("Ann Lee").unwrap();
        mark(&mut board, Position::TopLeft, 'A', Seat::A);
        mark(&mut board, Position::TopCenter, 'L', Seat::B);

        assert_eq!(find_win(&board, Seat::A, &monogram), None);
    }

    #[test]
    fn test_ownership_gap_breaks_three_letter_run() {
        // B-O-B on a column reads correctly but the middle cell is A's.
        let mut board = Board::new();
        let monogram = Monogram::from_name("Bob").unwrap();
        mark(&mut board, Position::TopLeft, 'B', Seat::B);
        mark(&mut board, Position::MiddleLeft, 'O', Seat::A);
        mark(&mut board, Position::BottomLeft, 'B', Seat::B);

        assert_eq!(find_win(&board, Seat::B, &monogram), None);
    }

    #[test]
    fn test_glyphs_out_of_arrangement_do_not_win() {
        // Owned cells, but "AA" is not an arrangement of "AL".
        let mut board = Board::new();
        let monogram = Monogram::from_name("Ann Lee").unwrap();
        mark(&mut board, Position::TopLeft, 'A', Seat::A);
        mark(&mut board, Position::TopCenter, 'A', Seat::A);

        assert_eq!(find_win(&board, Seat::A, &monogram), None);
    }

    #[test]
    fn test_diagonal_window_wins() {
        let mut board = Board::new();
        let monogram = Monogram::from_name("Ann Lee").unwrap();
        mark(&mut board, Position::Center, 'A', Seat::A);
        mark(&mut board, Position::BottomLeft, 'L', Seat::A);

        let cells = find_win(&board, Seat::A, &monogram).expect("diagonal window should win");
        assert_eq!(cells, vec![Position::Center, Position::BottomLeft]);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let mut board = Board::new();
        let monogram = Monogram::from_name("Ann Lee").unwrap();
        mark(&mut board, Position::TopLeft, 'A', Seat::A);
        mark(&mut board, Position::TopCenter, 'L', Seat::A);

        let first = find_win(&board, Seat::A, &monogram);
        let second = find_win(&board, Seat::A, &monogram);
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}
