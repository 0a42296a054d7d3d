//! Board state representation and successor enumeration

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines;
use crate::error::{Error, Result};

/// Board side length
pub const SIDE: usize = 3;

/// Total cell count of the board
pub const CELL_COUNT: usize = SIDE * SIDE;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// One of the two placeable tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    X,
    O,
}

impl Token {
    /// The token placed at a given move index: X opens, the two alternate.
    /// Move index 0 is the first move from the empty board.
    pub fn for_move_index(move_index: usize) -> Token {
        if move_index % 2 == 0 {
            Token::X
        } else {
            Token::O
        }
    }

    /// Convert token to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Token::X => Cell::X,
            Token::O => Cell::O,
        }
    }
}

/// One 3x3 board configuration.
///
/// An immutable value type: equality and hashing are structural, and every
/// operation that "changes" a board returns a new value. `Copy` is cheap
/// since the whole board is 9 bytes.
///
/// Unlike a full game record, a `Board` carries no turn marker; whose move
/// it is falls out of the move index driving successor enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    pub(crate) fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Board { cells }
    }

    /// The raw cell grid in row-major order
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Get the cell at (row, col)
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside 0-2. Use [`with_cell`] for the
    /// checked write path; reads inside the crate always use in-range
    /// indices produced by enumeration.
    ///
    /// [`with_cell`]: Self::with_cell
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < SIDE && col < SIDE, "cell ({row}, {col}) out of range");
        self.cells[row * SIDE + col]
    }

    /// Return a new board with the cell at (row, col) set to `token`.
    ///
    /// Coordinates are validated, but the target cell is deliberately NOT
    /// required to be empty: successor enumeration is the sole legality
    /// gate, and this method stays a plain cell write.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCell`] when `row` or `col` is outside 0-2.
    #[must_use = "with_cell returns a new board; the original is unchanged"]
    pub fn with_cell(&self, row: usize, col: usize, token: Token) -> Result<Board> {
        if row >= SIDE || col >= SIDE {
            return Err(Error::InvalidCell { row, col });
        }

        let mut cells = self.cells;
        cells[row * SIDE + col] = token.to_cell();
        Ok(Board { cells })
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Whether some line of three equal tokens has been completed.
    ///
    /// A fully filled board with no such line is not a winner; it merely
    /// has no successors left.
    pub fn has_winner(&self) -> bool {
        lines::has_winning_line(&self.cells)
    }

    /// The token owning a completed line, if any
    pub fn winner(&self) -> Option<Token> {
        lines::winner(&self.cells)
    }

    /// All boards reachable from this one by a single legal move.
    ///
    /// The token placed is decided by `move_index` parity (even places X,
    /// odd places O; index 0 is the opening move). A board with a completed
    /// line yields no successors. One successor is produced per empty cell,
    /// in row-major order; this order is contractual — it decides which raw
    /// board the registry sees first and therefore which board ends up as a
    /// class's canonical representative.
    pub fn successors(&self, move_index: usize) -> Vec<Board> {
        if self.has_winner() {
            return Vec::new();
        }

        let cell = Token::for_move_index(move_index).to_cell();
        let mut next = Vec::new();
        for row in 0..SIDE {
            for col in 0..SIDE {
                if self.cells[row * SIDE + col] == Cell::Empty {
                    let mut cells = self.cells;
                    cells[row * SIDE + col] = cell;
                    next.push(Board { cells });
                }
            }
        }
        next
    }

    /// Create a board from a 9-character string representation.
    ///
    /// Whitespace is filtered out, so multi-line drawings parse too.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not hold exactly 9 cells or any
    /// character is not a valid cell symbol.
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != CELL_COUNT {
            return Err(Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get the single-line string representation used as a key
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1) % SIDE == 0 && i < CELL_COUNT - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
