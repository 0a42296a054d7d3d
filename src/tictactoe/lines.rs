//! Winning line scan for the 3x3 board

use super::board::{Cell, Token, CELL_COUNT};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check whether any line holds three equal non-empty cells
pub fn has_winning_line(cells: &[Cell; CELL_COUNT]) -> bool {
    winner(cells).is_some()
}

/// The token owning a completed line, if any.
///
/// Boards produced by legal play can contain at most one winning token,
/// since play stops as soon as a line is completed.
pub fn winner(cells: &[Cell; CELL_COUNT]) -> Option<Token> {
    for line in &WINNING_LINES {
        let first = cells[line[0]];
        if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
            return match first {
                Cell::X => Some(Token::X),
                Cell::O => Some(Token::O),
                Cell::Empty => None,
            };
        }
    }
    None
}
