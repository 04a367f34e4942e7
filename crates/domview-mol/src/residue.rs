//! Residue and chain utilities
//!
//! Residue/chain information lives inline on atoms, so this module provides
//! borrowed views over contiguous atom runs plus residue-name lookups.

use phf::phf_set;
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::atom::Atom;

pub use crate::iterator::{ChainIterator, ResidueIterator};

/// Key uniquely identifying a residue within a structure
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResidueKey {
    /// Chain identifier
    pub chain: String,
    /// Residue name (e.g., "ALA", "GLY")
    pub resn: String,
    /// Residue sequence number
    pub resv: i32,
    /// Insertion code
    pub inscode: char,
}

impl ResidueKey {
    pub fn new(chain: impl Into<String>, resn: impl Into<String>, resv: i32, inscode: char) -> Self {
        ResidueKey {
            chain: chain.into(),
            resn: resn.into(),
            resv,
            inscode,
        }
    }

    /// Create a residue key from an atom
    pub fn from_atom(atom: &Atom) -> Self {
        ResidueKey::new(atom.chain.clone(), atom.resn.clone(), atom.resv, atom.inscode)
    }
}

/// A view into the atoms of a single residue
#[derive(Debug)]
pub struct ResidueView<'a> {
    /// The residue key
    pub key: ResidueKey,
    /// Slice of atoms in this residue
    pub atoms: &'a [Atom],
    /// Range of atom indices in the parent structure
    pub atom_range: Range<usize>,
}

impl<'a> ResidueView<'a> {
    #[inline]
    pub fn chain(&self) -> &str {
        &self.key.chain
    }

    #[inline]
    pub fn resn(&self) -> &str {
        &self.key.resn
    }

    #[inline]
    pub fn resv(&self) -> i32 {
        self.key.resv
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Whether the residue has an alpha carbon (any alternate location)
    pub fn has_ca(&self) -> bool {
        self.atoms.iter().any(Atom::is_ca)
    }

    /// Whether the residue has a phosphorus atom
    pub fn has_phosphorus(&self) -> bool {
        self.atoms.iter().any(Atom::is_phosphorus)
    }
}

/// A view into a contiguous run of atoms sharing one chain identifier
#[derive(Debug)]
pub struct ChainView<'a> {
    /// Chain identifier
    pub chain_id: String,
    /// Slice of atoms in this chain run
    pub atoms: &'a [Atom],
    /// Range of atom indices in the parent structure
    pub atom_range: Range<usize>,
}

impl<'a> ChainView<'a> {
    #[inline]
    pub fn id(&self) -> &str {
        &self.chain_id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Iterate over residues in this chain run
    pub fn residues(&self) -> ResidueIterator<'a> {
        ResidueIterator::new(self.atoms, self.atom_range.start)
    }
}

#[inline]
pub(crate) fn atoms_same_residue(a: &Atom, b: &Atom) -> bool {
    a.chain == b.chain && a.resv == b.resv && a.inscode == b.inscode && a.resn == b.resn
}

#[inline]
pub(crate) fn atoms_same_chain(a: &Atom, b: &Atom) -> bool {
    a.chain == b.chain
}

// Modified residues (MSE, SEP, protonation variants) are listed alongside
// the standard ones.

static AMINO_ACIDS: phf::Set<&str> = phf_set! {
    "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE",
    "LEU", "LYS", "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
    "HID", "HIE", "HIP", "HSP", "HSD", "HSE", "CYX",
    "MSE", "SEC", "PYL", "SEP", "TPO", "PTR", "UNK",
};

static NUCLEOTIDES: phf::Set<&str> = phf_set! {
    "DA", "DC", "DG", "DT", "DI", "A", "C", "G", "U", "I", "N", "DN",
    "PSU", "5MC", "OMC", "OMG", "M2G", "5MU", "7MG", "2MG",
    "H2U", "1MA", "4SU", "5CM", "8OG",
};

static WATER_NAMES: phf::Set<&str> = phf_set! {
    "HOH", "WAT", "H2O", "DOD", "TIP", "TIP3", "SPC", "SOL",
};

pub fn is_amino_acid(resn: &str) -> bool {
    AMINO_ACIDS.contains(resn)
}

pub fn is_nucleotide(resn: &str) -> bool {
    NUCLEOTIDES.contains(resn)
}

pub fn is_water(resn: &str) -> bool {
    WATER_NAMES.contains(resn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::AtomBuilder;
    use crate::element::Element;

    fn make_test_atoms() -> Vec<Atom> {
        let mut atoms = Vec::new();
        for (chain, resn, resv, names) in [
            ("A", "ALA", 1, &["N", "CA", "C", "O", "CB"][..]),
            ("A", "GLY", 2, &["N", "CA", "C", "O"][..]),
            ("B", "SER", 1, &["N", "CA", "C", "O", "CB", "OG"][..]),
        ] {
            for name in names {
                atoms.push(
                    AtomBuilder::new()
                        .name(*name)
                        .element_symbol(&name[..1])
                        .resn(resn)
                        .resv(resv)
                        .chain(chain)
                        .build(),
                );
            }
        }
        atoms
    }

    #[test]
    fn test_residue_iterator() {
        let atoms = make_test_atoms();
        let residues: Vec<_> = ResidueIterator::new(&atoms, 0).collect();

        assert_eq!(residues.len(), 3);
        assert_eq!(residues[0].resn(), "ALA");
        assert_eq!(residues[0].len(), 5);
        assert_eq!(residues[1].resv(), 2);
        assert_eq!(residues[2].chain(), "B");
        assert_eq!(residues[2].atom_range, 9..15);
    }

    #[test]
    fn test_chain_iterator() {
        let atoms = make_test_atoms();
        let chains: Vec<_> = ChainIterator::new(&atoms, 0).collect();

        assert_eq!(chains.len(), 2);
        assert_eq!(chains[0].id(), "A");
        assert_eq!(chains[0].len(), 9);
        assert_eq!(chains[0].residues().count(), 2);
        assert_eq!(chains[1].id(), "B");
    }

    #[test]
    fn test_residue_markers() {
        let atoms = make_test_atoms();
        let residue = ResidueIterator::new(&atoms, 0).next().unwrap();
        assert!(residue.has_ca());
        assert!(!residue.has_phosphorus());
        assert_eq!(residue.key, ResidueKey::new("A", "ALA", 1, ' '));
        assert_eq!(residue.atoms[1].element, Element::Carbon);
    }

    #[test]
    fn test_residue_names() {
        assert!(is_amino_acid("ALA"));
        assert!(is_amino_acid("MSE"));
        assert!(is_nucleotide("DG"));
        assert!(is_water("HOH"));
        assert!(!is_amino_acid("HOH"));
        assert!(!is_nucleotide("HEM"));
    }
}
