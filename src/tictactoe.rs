//! Tic-Tac-Toe board domain: cells, boards, winning lines, and the D4
//! symmetry machinery used to collapse boards into equivalence classes.

pub mod board;
pub mod lines;
pub mod symmetry;

pub use board::{Board, Cell, Token, CELL_COUNT, SIDE};
pub use lines::{has_winning_line, winner, WINNING_LINES};
pub use symmetry::{orbit_of, Orbit, Symmetry};
