//! Error types for the ttt-orbits crate

use thiserror::Error;

use crate::identifiers::ClassId;

/// Main error type for the ttt-orbits crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("cell ({row}, {col}) is out of bounds (rows and columns run 0-2)")]
    InvalidCell { row: usize, col: usize },

    #[error("board '{board}' is already registered as class {class}")]
    AlreadyRegistered { board: String, class: ClassId },

    #[error(
        "orbit member '{board}' of prospective class {candidate} is already \
         mapped to class {existing}; two registered classes are symmetric"
    )]
    OrbitConflict {
        board: String,
        existing: ClassId,
        candidate: ClassId,
    },

    #[error("unknown class id {class}")]
    UnknownClass { class: ClassId },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Whether this error signals a broken internal invariant rather than
    /// malformed external input.
    ///
    /// Invariant violations come from a defect in the caller's
    /// check-then-register sequencing and are not recoverable; validation
    /// errors describe bad input the caller may correct and retry.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Error::AlreadyRegistered { .. } | Error::OrbitConflict { .. }
        )
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
