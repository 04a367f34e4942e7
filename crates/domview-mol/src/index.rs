//! Type-safe atom index
//!
//! Keeps atom positions from being confused with residue numbers, which are
//! also plain integers but live in a completely different numbering space.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of an atom within a [`Structure`](crate::Structure)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct AtomIndex(pub u32);

impl AtomIndex {
    /// Get the raw index value as usize
    #[inline]
    pub const fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AtomIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_conversions() {
        let idx = AtomIndex(42);
        assert_eq!(idx.as_usize(), 42);
        assert_eq!(idx.to_string(), "42");
        assert_eq!(format!("{:?}", AtomIndex(3)), "AtomIndex(3)");
    }
}
