//! Equivalence registry: bidirectional index between boards and their
//! symmetry-equivalence classes.
//!
//! The registry owns every orbit discovered during an exploration. Class
//! ids index into the orbit store, and a reverse map sends every orbit
//! member back to its class, so membership tests are a single hash lookup.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::identifiers::ClassId;
use crate::tictactoe::{orbit_of, Board, Orbit};

/// Store of all registered equivalence classes.
///
/// Invariant: each board is mapped to exactly one class for the lifetime
/// of the registry. Classes are created exactly once, at first discovery
/// of a previously unseen board, and never mutated afterwards.
#[derive(Debug, Default)]
pub struct Registry {
    /// Orbits indexed by class id
    orbits: Vec<Orbit>,
    /// Reverse map from every orbit member to its class
    class_by_board: HashMap<Board, ClassId>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered classes
    pub fn class_count(&self) -> usize {
        self.orbits.len()
    }

    /// Look up the class a board belongs to, if it has been registered
    pub fn lookup(&self, board: &Board) -> Option<ClassId> {
        self.class_by_board.get(board).copied()
    }

    /// Register the class of a previously unseen board.
    ///
    /// Computes the board's orbit, assigns the next class id, and maps
    /// every orbit member to it. The input board becomes the class's
    /// canonical representative because [`orbit_of`] keeps it first.
    ///
    /// # Errors
    ///
    /// Both failure modes are invariant violations — defects in the
    /// caller's check-then-register sequencing, not recoverable input
    /// problems:
    ///
    /// - [`Error::AlreadyRegistered`] if the board already belongs to a
    ///   class (the caller must check [`lookup`] first);
    /// - [`Error::OrbitConflict`] if another orbit member is mapped to a
    ///   different class, which would mean two registered classes are
    ///   secretly symmetric to one another.
    ///
    /// [`lookup`]: Self::lookup
    pub fn register_new(&mut self, board: Board) -> Result<ClassId> {
        if let Some(class) = self.lookup(&board) {
            return Err(Error::AlreadyRegistered {
                board: board.encode(),
                class,
            });
        }

        let orbit = orbit_of(&board);
        let class = ClassId::new(self.orbits.len() as u32);

        // Reject before touching the map so a failed registration leaves
        // the registry unchanged.
        for member in &orbit {
            if let Some(existing) = self.lookup(member) {
                return Err(Error::OrbitConflict {
                    board: member.encode(),
                    existing,
                    candidate: class,
                });
            }
        }

        for member in &orbit {
            self.class_by_board.insert(*member, class);
        }
        self.orbits.push(orbit);
        Ok(class)
    }

    /// The full orbit of a registered class
    pub fn orbit_of_class(&self, class: ClassId) -> Result<&Orbit> {
        self.orbits
            .get(class.index())
            .ok_or(Error::UnknownClass { class })
    }

    /// The canonical representative of a registered class (orbit element 0)
    pub fn canonical_of(&self, class: ClassId) -> Result<&Board> {
        self.orbit_of_class(class).map(Orbit::canonical)
    }

    /// Iterate over all registered classes in id order
    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &Orbit)> {
        self.orbits
            .iter()
            .enumerate()
            .map(|(idx, orbit)| (ClassId::new(idx as u32), orbit))
    }
}
