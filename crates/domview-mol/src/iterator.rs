//! Iterators grouping consecutive atoms by residue or by chain

use crate::atom::Atom;
use crate::residue::{atoms_same_chain, atoms_same_residue, ChainView, ResidueKey, ResidueView};

/// Groups consecutive atoms for which `same_group(next, first)` holds.
///
/// Shared foundation for [`ResidueIterator`] and [`ChainIterator`].
pub(crate) struct GroupingIterator<'a, F> {
    atoms: &'a [Atom],
    base_index: usize,
    current: usize,
    same_group: F,
}

impl<'a, F> GroupingIterator<'a, F>
where
    F: Fn(&Atom, &Atom) -> bool,
{
    pub(crate) fn new(atoms: &'a [Atom], base_index: usize, same_group: F) -> Self {
        GroupingIterator {
            atoms,
            base_index,
            current: 0,
            same_group,
        }
    }

    /// Advance to the next group and return (start, end, first_atom)
    pub(crate) fn next_group(&mut self) -> Option<(usize, usize, &'a Atom)> {
        if self.current >= self.atoms.len() {
            return None;
        }

        let start = self.current;
        let first_atom = &self.atoms[start];

        let mut end = start + 1;
        while end < self.atoms.len() && (self.same_group)(&self.atoms[end], first_atom) {
            end += 1;
        }

        self.current = end;
        Some((start, end, first_atom))
    }
}

/// Iterator over residues in a slice of atoms
pub struct ResidueIterator<'a> {
    inner: GroupingIterator<'a, fn(&Atom, &Atom) -> bool>,
}

impl<'a> ResidueIterator<'a> {
    /// `base_index` is the index of `atoms[0]` in the parent structure
    pub fn new(atoms: &'a [Atom], base_index: usize) -> Self {
        ResidueIterator {
            inner: GroupingIterator::new(atoms, base_index, atoms_same_residue),
        }
    }
}

impl<'a> Iterator for ResidueIterator<'a> {
    type Item = ResidueView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, end, first_atom) = self.inner.next_group()?;
        let base = self.inner.base_index;

        Some(ResidueView {
            key: ResidueKey::from_atom(first_atom),
            atoms: &self.inner.atoms[start..end],
            atom_range: (base + start)..(base + end),
        })
    }
}

/// Iterator over contiguous chain runs in a slice of atoms
///
/// A chain id that reappears later in the file (e.g. waters appended after
/// all polymer chains) yields a second, separate run.
pub struct ChainIterator<'a> {
    inner: GroupingIterator<'a, fn(&Atom, &Atom) -> bool>,
}

impl<'a> ChainIterator<'a> {
    pub fn new(atoms: &'a [Atom], base_index: usize) -> Self {
        ChainIterator {
            inner: GroupingIterator::new(atoms, base_index, atoms_same_chain),
        }
    }
}

impl<'a> Iterator for ChainIterator<'a> {
    type Item = ChainView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, end, first_atom) = self.inner.next_group()?;
        let base = self.inner.base_index;

        Some(ChainView {
            chain_id: first_atom.chain.clone(),
            atoms: &self.inner.atoms[start..end],
            atom_range: (base + start)..(base + end),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::AtomBuilder;

    #[test]
    fn test_reappearing_chain_is_split() {
        let atoms: Vec<Atom> = [("A", 1), ("A", 2), ("B", 1), ("A", 500)]
            .iter()
            .map(|&(chain, resv)| AtomBuilder::new().name("X").chain(chain).resv(resv).build())
            .collect();

        let runs: Vec<_> = ChainIterator::new(&atoms, 10).collect();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].atom_range, 10..12);
        assert_eq!(runs[2].id(), "A");
        assert_eq!(runs[2].atom_range, 13..14);
    }

    #[test]
    fn test_empty_slice() {
        let atoms: Vec<Atom> = Vec::new();
        assert_eq!(ResidueIterator::new(&atoms, 0).count(), 0);
        assert_eq!(ChainIterator::new(&atoms, 0).count(), 0);
    }
}
