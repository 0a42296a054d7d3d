//! Symmetry-reduced Tic-Tac-Toe state-space enumeration
//!
//! This crate provides:
//! - A 3x3 board value type with terminal detection and move enumeration
//! - D4 symmetry orbit computation with first-seen canonical representatives
//! - An equivalence registry mapping boards to class ids and back
//! - A level-synchronous builder for the DAG of equivalence classes
//! - JSON/CSV/DOT export of the finished graph

pub mod cli;
pub mod error;
pub mod export;
pub mod graph;
pub mod identifiers;
pub mod registry;
pub mod tictactoe;

pub use error::{Error, Result};
pub use export::{dag_export, DagExport};
pub use graph::{build_class_dag, ClassDag, Node};
pub use identifiers::ClassId;
pub use registry::Registry;
pub use tictactoe::{orbit_of, Board, Cell, Orbit, Symmetry, Token};
