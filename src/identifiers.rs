//! Domain identifier types for symmetry-equivalence classes.
//!
//! A [`ClassId`] is an opaque, strictly increasing integer handed out by the
//! equivalence registry. Ids are assigned once at first discovery of a class
//! and never reused or reassigned, so they double as stable indices into the
//! graph's node arena.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for one symmetry-equivalence class of boards.
///
/// Only the registry mints new ids; everything else treats them as opaque
/// tokens that can be compared, hashed, displayed, and used to index the
/// node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(u32);

impl ClassId {
    pub(crate) fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw numeric value of the id.
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// The id as an arena index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_order_by_raw_value() {
        let a = ClassId::new(0);
        let b = ClassId::new(7);
        assert!(a < b);
        assert_eq!(b.index(), 7);
        assert_eq!(b.to_string(), "7");
    }
}
