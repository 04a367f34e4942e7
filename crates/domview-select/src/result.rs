//! Selection bitsets
//!
//! A [`SelectionResult`] has one bit per atom of the structure it was
//! evaluated against.

use bitvec::prelude::*;
use domview_mol::AtomIndex;

use crate::error::{SelectError, SelectResult};

/// Which atoms of a structure are selected
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionResult {
    bits: BitVec<u64, Lsb0>,
}

impl SelectionResult {
    /// Empty selection over `atom_count` atoms
    pub fn new(atom_count: usize) -> Self {
        SelectionResult {
            bits: bitvec![u64, Lsb0; 0; atom_count],
        }
    }

    pub fn all(atom_count: usize) -> Self {
        SelectionResult {
            bits: bitvec![u64, Lsb0; 1; atom_count],
        }
    }

    /// Selection from atom indices; indices past `atom_count` are ignored
    pub fn from_indices(atom_count: usize, indices: impl IntoIterator<Item = AtomIndex>) -> Self {
        let mut result = Self::new(atom_count);
        for idx in indices {
            result.set(idx);
        }
        result
    }

    /// Number of atoms this selection covers (selected or not)
    #[inline]
    pub fn atom_count(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn contains(&self, idx: AtomIndex) -> bool {
        self.bits.get(idx.as_usize()).map(|b| *b).unwrap_or(false)
    }

    #[inline]
    pub fn set(&mut self, idx: AtomIndex) {
        if let Some(mut bit) = self.bits.get_mut(idx.as_usize()) {
            *bit = true;
        }
    }

    #[inline]
    pub fn unset(&mut self, idx: AtomIndex) {
        if let Some(mut bit) = self.bits.get_mut(idx.as_usize()) {
            *bit = false;
        }
    }

    /// Number of selected atoms
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    #[inline]
    pub fn any(&self) -> bool {
        self.bits.any()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.any()
    }

    /// Iterate over indices of selected atoms
    pub fn indices(&self) -> impl Iterator<Item = AtomIndex> + '_ {
        self.bits.iter_ones().map(|i| AtomIndex(i as u32))
    }

    pub fn first(&self) -> Option<AtomIndex> {
        self.bits.first_one().map(|i| AtomIndex(i as u32))
    }

    fn check_size(&self, other: &Self) -> SelectResult<()> {
        if self.bits.len() == other.bits.len() {
            Ok(())
        } else {
            Err(SelectError::SizeMismatch(self.bits.len(), other.bits.len()))
        }
    }

    /// Atoms selected in either selection
    pub fn union(&self, other: &Self) -> SelectResult<Self> {
        self.check_size(other)?;
        let mut result = self.clone();
        result.bits |= &other.bits;
        Ok(result)
    }

    /// Atoms selected in both selections
    pub fn intersection(&self, other: &Self) -> SelectResult<Self> {
        self.check_size(other)?;
        let mut result = self.clone();
        result.bits &= &other.bits;
        Ok(result)
    }

    /// Atoms selected here but not in `other`
    pub fn difference(&self, other: &Self) -> SelectResult<Self> {
        self.check_size(other)?;
        let mut result = self.clone();
        for i in other.bits.iter_ones() {
            result.bits.set(i, false);
        }
        Ok(result)
    }

    /// Atoms not in this selection
    pub fn complement(&self) -> Self {
        SelectionResult {
            bits: !self.bits.clone(),
        }
    }

    /// In-place union
    pub fn union_with(&mut self, other: &Self) -> SelectResult<()> {
        self.check_size(other)?;
        self.bits |= &other.bits;
        Ok(())
    }
}

impl std::fmt::Display for SelectionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SelectionResult({} of {} atoms)", self.count(), self.atom_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(n: usize, idx: &[u32]) -> SelectionResult {
        SelectionResult::from_indices(n, idx.iter().map(|&i| AtomIndex(i)))
    }

    #[test]
    fn test_new_and_all() {
        let none = SelectionResult::new(100);
        assert_eq!(none.atom_count(), 100);
        assert!(none.is_empty());

        let all = SelectionResult::all(100);
        assert_eq!(all.count(), 100);
    }

    #[test]
    fn test_set_unset_and_bounds() {
        let mut s = SelectionResult::new(10);
        s.set(AtomIndex(5));
        s.set(AtomIndex(50));
        assert!(s.contains(AtomIndex(5)));
        assert!(!s.contains(AtomIndex(50)));
        assert_eq!(s.count(), 1);

        s.unset(AtomIndex(5));
        assert!(s.is_empty());
    }

    #[test]
    fn test_indices_and_first() {
        let s = sel(10, &[9, 1, 5]);
        let indices: Vec<AtomIndex> = s.indices().collect();
        assert_eq!(indices, vec![AtomIndex(1), AtomIndex(5), AtomIndex(9)]);
        assert_eq!(s.first(), Some(AtomIndex(1)));
        assert_eq!(SelectionResult::new(3).first(), None);
    }

    #[test]
    fn test_set_operations() {
        let a = sel(10, &[1, 2]);
        let b = sel(10, &[2, 3]);

        assert_eq!(a.union(&b).unwrap(), sel(10, &[1, 2, 3]));
        assert_eq!(a.intersection(&b).unwrap(), sel(10, &[2]));
        assert_eq!(a.difference(&b).unwrap(), sel(10, &[1]));
        assert_eq!(sel(4, &[1, 3]).complement(), sel(4, &[0, 2]));

        let mut c = a.clone();
        c.union_with(&b).unwrap();
        assert_eq!(c.count(), 3);
    }

    #[test]
    fn test_size_mismatch() {
        let a = sel(10, &[1]);
        let b = sel(11, &[1]);
        assert_eq!(a.union(&b), Err(SelectError::SizeMismatch(10, 11)));
    }

    #[test]
    fn test_display() {
        assert_eq!(sel(100, &[1, 2]).to_string(), "SelectionResult(2 of 100 atoms)");
    }
}
