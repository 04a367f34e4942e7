//! Parsed structure container
//!
//! A [`Structure`] holds the atoms of the first model of a structure file
//! together with one coordinate per atom.

use lin_alg::f32::Vec3;

use crate::atom::Atom;
use crate::error::{MolError, MolResult};
use crate::flags::AtomFlags;
use crate::index::AtomIndex;
use crate::residue::{is_amino_acid, is_nucleotide, is_water, ChainIterator, ResidueIterator};

/// A loaded 3D structure: atoms with inline residue/chain data plus coordinates
#[derive(Debug, Clone)]
pub struct Structure {
    atoms: Vec<Atom>,
    coords: Vec<Vec3>,

    /// Object name (usually derived from the file name)
    pub name: String,

    /// Title or description
    pub title: String,
}

impl Structure {
    /// Create a new empty structure
    pub fn new(name: impl Into<String>) -> Self {
        Structure {
            atoms: Vec::new(),
            coords: Vec::new(),
            name: name.into(),
            title: String::new(),
        }
    }

    /// Assemble a structure from parallel atom and coordinate vectors
    pub fn from_parts(name: impl Into<String>, atoms: Vec<Atom>, coords: Vec<Vec3>) -> MolResult<Self> {
        if atoms.len() != coords.len() {
            return Err(MolError::CoordinateMismatch {
                expected: atoms.len(),
                actual: coords.len(),
            });
        }
        Ok(Structure {
            atoms,
            coords,
            name: name.into(),
            title: String::new(),
        })
    }

    // =========================================================================
    // Atom Operations
    // =========================================================================

    /// Add an atom with its coordinate, returning its index
    pub fn add_atom(&mut self, atom: Atom, coord: Vec3) -> AtomIndex {
        let index = AtomIndex(self.atoms.len() as u32);
        self.atoms.push(atom);
        self.coords.push(coord);
        index
    }

    pub fn get_atom(&self, index: AtomIndex) -> Option<&Atom> {
        self.atoms.get(index.as_usize())
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.iter()
    }

    // =========================================================================
    // Coordinates
    // =========================================================================

    pub fn coord(&self, index: AtomIndex) -> Option<Vec3> {
        self.coords.get(index.as_usize()).copied()
    }

    /// Axis-aligned bounding box of the given atoms, or of all atoms when
    /// `indices` is `None`
    pub fn bounding_box(&self, indices: Option<&[AtomIndex]>) -> Option<(Vec3, Vec3)> {
        let mut min = Vec3::new(f32::MAX, f32::MAX, f32::MAX);
        let mut max = Vec3::new(f32::MIN, f32::MIN, f32::MIN);
        let mut any = false;

        let mut extend = |c: Vec3| {
            min.x = min.x.min(c.x);
            min.y = min.y.min(c.y);
            min.z = min.z.min(c.z);
            max.x = max.x.max(c.x);
            max.y = max.y.max(c.y);
            max.z = max.z.max(c.z);
            any = true;
        };

        match indices {
            Some(indices) => indices.iter().filter_map(|&i| self.coord(i)).for_each(&mut extend),
            None => self.coords.iter().copied().for_each(&mut extend),
        }

        any.then_some((min, max))
    }

    // =========================================================================
    // Residue / Chain Access
    // =========================================================================

    pub fn residues(&self) -> ResidueIterator<'_> {
        ResidueIterator::new(&self.atoms, 0)
    }

    /// Iterate over contiguous chain runs
    pub fn chains(&self) -> ChainIterator<'_> {
        ChainIterator::new(&self.atoms, 0)
    }

    /// Distinct chain identifiers in order of first appearance
    pub fn chain_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for atom in &self.atoms {
            if !ids.iter().any(|id| *id == atom.chain) {
                ids.push(atom.chain.clone());
            }
        }
        ids
    }

    // =========================================================================
    // Atom Classification
    // =========================================================================

    /// Classify atoms as protein, nucleic acid, solvent, organic or inorganic
    ///
    /// Amino-acid and nucleotide residues from HETATM records are still
    /// classified as polymer when they carry the matching backbone marker
    /// (CA or P), which covers modified residues such as MSE.
    pub fn classify_atoms(&mut self) {
        let residue_info: Vec<(std::ops::Range<usize>, AtomFlags)> = self
            .residues()
            .map(|residue| {
                let resn = residue.resn();
                let is_hetatm = residue.atoms.first().map(|a| a.hetatm).unwrap_or(true);
                let has_ca = residue.has_ca();
                let has_p = residue.has_phosphorus();

                let mask = if is_amino_acid(resn) && (!is_hetatm || has_ca) {
                    AtomFlags::POLYMER | AtomFlags::PROTEIN
                } else if is_nucleotide(resn) && (!is_hetatm || has_p) {
                    AtomFlags::POLYMER | AtomFlags::NUCLEIC
                } else if is_water(resn) {
                    AtomFlags::SOLVENT
                } else if residue.atoms.iter().any(|a| a.element.is_carbon()) {
                    AtomFlags::ORGANIC
                } else {
                    AtomFlags::INORGANIC
                };

                (residue.atom_range, mask)
            })
            .collect();

        for (range, mask) in residue_info {
            for atom in &mut self.atoms[range] {
                atom.flags.remove(AtomFlags::CLASS);
                atom.flags |= mask;
            }
        }
    }

    // =========================================================================
    // Selection Support
    // =========================================================================

    /// Get atoms matching a predicate
    pub fn select<F>(&self, predicate: F) -> Vec<AtomIndex>
    where
        F: Fn(&Atom) -> bool,
    {
        self.atoms
            .iter()
            .enumerate()
            .filter(|(_, a)| predicate(*a))
            .map(|(i, _)| AtomIndex(i as u32))
            .collect()
    }
}

impl std::fmt::Display for Structure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Structure({}: {} atoms, {} chains)",
            self.name,
            self.atom_count(),
            self.chain_ids().len()
        )
    }
}

/// Builder for creating structures with a fluent interface
///
/// Atoms are classified on [`build`](StructureBuilder::build).
#[derive(Debug)]
pub struct StructureBuilder {
    structure: Structure,
}

impl StructureBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        StructureBuilder {
            structure: Structure::new(name),
        }
    }

    /// Add an atom with coordinates
    pub fn add_atom(mut self, atom: Atom, coord: Vec3) -> Self {
        self.structure.add_atom(atom, coord);
        self
    }

    pub fn build(mut self) -> Structure {
        self.structure.classify_atoms();
        self.structure
    }
}
