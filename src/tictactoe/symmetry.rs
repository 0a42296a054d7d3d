//! D4 symmetry operations and orbit computation.
//!
//! A board's orbit is the set of boards reachable from it under the eight
//! symmetries of the square, with duplicates removed. The orbit is what the
//! equivalence registry stores per class, and its first element is the
//! class's canonical representative.

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell, CELL_COUNT, SIDE};

/// One symmetry of the square (dihedral group D4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symmetry {
    /// Clockwise rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to flip the board top-to-bottom before rotating
    pub reflection: bool,
}

impl Symmetry {
    /// Create identity transform
    pub fn identity() -> Self {
        Symmetry {
            rotation: 0,
            reflection: false,
        }
    }

    /// All 8 symmetries in orbit-generation order: the four rotations of
    /// the board itself, then the four rotations of its vertical mirror.
    ///
    /// The order is contractual. The identity comes first and no later
    /// transform reproduces it, so the input board of [`orbit_of`] is
    /// always retained as the orbit's element 0.
    pub fn all() -> [Symmetry; 8] {
        let mut transforms = [Symmetry::identity(); 8];
        let mut idx = 0;
        for reflection in [false, true] {
            for rotation in [0, 90, 180, 270] {
                transforms[idx] = Symmetry {
                    rotation,
                    reflection,
                };
                idx += 1;
            }
        }
        transforms
    }

    /// Where the content of a position (0-8) ends up under this transform.
    ///
    /// The vertical mirror (row order reversed) is applied before the
    /// clockwise rotation, so a reflected transform moves cells the way
    /// "mirror the board, then rotate the mirror" would.
    pub fn transform_position(&self, pos: usize) -> usize {
        let (mut row, mut col) = (pos / SIDE, pos % SIDE);

        if self.reflection {
            row = SIDE - 1 - row;
        }

        for _ in 0..(self.rotation / 90) {
            let new_row = col;
            let new_col = SIDE - 1 - row;
            row = new_row;
            col = new_col;
        }

        row * SIDE + col
    }
}

impl Board {
    /// Apply a symmetry transform to the board
    pub fn transform(&self, t: &Symmetry) -> Self {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &cell) in self.cells().iter().enumerate() {
            cells[t.transform_position(i)] = cell;
        }
        Board::from_cells(cells)
    }
}

/// An ordered, duplicate-free sequence of mutually symmetric boards.
///
/// Element 0 is the canonical representative of the equivalence class. The
/// length always divides 8 (it is 8 divided by the size of the board's
/// stabilizer subgroup), so it is one of 1, 2, 4, 8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orbit {
    boards: Vec<Board>,
}

impl Orbit {
    /// The representative of this orbit's equivalence class
    pub fn canonical(&self) -> &Board {
        &self.boards[0]
    }

    /// Number of distinct boards in the orbit
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// An orbit always holds at least its generating board
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether a board belongs to this orbit
    pub fn contains(&self, board: &Board) -> bool {
        self.boards.contains(board)
    }

    /// The orbit members in generation order
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Board> {
        self.boards.iter()
    }
}

impl<'a> IntoIterator for &'a Orbit {
    type Item = &'a Board;
    type IntoIter = std::slice::Iter<'a, Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.boards.iter()
    }
}

/// Compute the symmetry orbit of a board.
///
/// Candidates are generated in the fixed order of [`Symmetry::all`] and
/// deduplicated keeping first occurrences, so the input board is always
/// element 0 of the result.
///
/// The representative selected for a class downstream is therefore
/// whichever board was first handed to the registry — a function of the
/// caller's traversal order, not a minimal form. A different traversal
/// order may legitimately pick a different (equally valid) representative
/// for the same class.
pub fn orbit_of(board: &Board) -> Orbit {
    let mut boards: Vec<Board> = Vec::with_capacity(8);
    for transform in Symmetry::all() {
        let candidate = board.transform(&transform);
        if !boards.contains(&candidate) {
            boards.push(candidate);
        }
    }
    Orbit { boards }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    fn encodings(orbit: &Orbit) -> Vec<String> {
        orbit.iter().map(|b| b.encode()).collect()
    }

    #[test]
    fn empty_board_orbit_is_singleton() {
        let orbit = orbit_of(&Board::new());
        assert_eq!(orbit.len(), 1);
        assert_eq!(orbit.canonical(), &Board::new());
    }

    #[test]
    fn center_mark_orbit_is_singleton() {
        let orbit = orbit_of(&board("....X...."));
        assert_eq!(orbit.len(), 1);
    }

    #[test]
    fn corner_orbit_follows_generation_order() {
        // Rotating X in the top-left corner clockwise visits the corners
        // in order; the mirrored rotations only repeat them.
        let orbit = orbit_of(&board("X........"));
        assert_eq!(
            encodings(&orbit),
            vec!["X........", "..X......", "........X", "......X.."]
        );
    }

    #[test]
    fn edge_orbit_follows_generation_order() {
        let orbit = orbit_of(&board(".X......."));
        assert_eq!(
            encodings(&orbit),
            vec![".X.......", ".....X...", ".......X.", "...X....."]
        );
    }

    #[test]
    fn asymmetric_board_has_full_orbit() {
        // X top-left, O top-middle: no transform fixes this board, so all
        // eight candidates are distinct and appear in generation order.
        let orbit = orbit_of(&board("XO......."));
        assert_eq!(
            encodings(&orbit),
            vec![
                "XO.......",
                "..X..O...",
                ".......OX",
                "...O..X..",
                "......XO.",
                "X..O.....",
                ".OX......",
                ".....O..X",
            ]
        );
    }

    #[test]
    fn orbit_length_always_divides_eight() {
        let samples = [
            ".........",
            "X........",
            ".X.......",
            "....X....",
            "XO.......",
            "X...O....",
            "XOX.O.X..",
            "XXO OOX XXO",
        ];
        for s in samples {
            let orbit = orbit_of(&board(s));
            assert!(
                matches!(orbit.len(), 1 | 2 | 4 | 8),
                "orbit of '{s}' has length {}",
                orbit.len()
            );
        }
    }

    #[test]
    fn input_board_is_always_first() {
        let b = board("X...O...X");
        let orbit = orbit_of(&b);
        assert_eq!(orbit.canonical(), &b);
    }

    #[test]
    fn orbit_membership_is_symmetric() {
        let orbit = orbit_of(&board("XO...X..."));
        for member in &orbit {
            let other = orbit_of(member);
            assert_eq!(other.len(), orbit.len());
            for b in &other {
                assert!(orbit.contains(b));
            }
            // The whole set matches even though the ordering starts from
            // a different representative.
            assert_eq!(other.canonical(), member);
        }
    }

    #[test]
    fn winner_status_is_transform_invariant() {
        let won = board("XXX OO. ...");
        let open = board("XX. OO. ...");
        for transform in Symmetry::all() {
            assert!(won.transform(&transform).has_winner());
            assert!(!open.transform(&transform).has_winner());
        }
    }

    #[test]
    fn transforms_preserve_occupancy() {
        let b = board("XO..X...O");
        for transform in Symmetry::all() {
            assert_eq!(b.transform(&transform).occupied_count(), b.occupied_count());
        }
    }
}
