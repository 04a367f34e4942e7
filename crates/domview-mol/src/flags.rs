//! Atom classification flags

use bitflags::bitflags;

bitflags! {
    /// Classification assigned by [`Structure::classify_atoms`](crate::Structure::classify_atoms)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AtomFlags: u32 {
        /// Atom belongs to an amino-acid residue
        const PROTEIN = 0x0000_0040;
        /// Atom belongs to a nucleotide residue
        const NUCLEIC = 0x0000_0080;
        /// Atom belongs to a polymer (protein or nucleic acid)
        const POLYMER = 0x0800_0000;
        /// Atom is part of a solvent molecule
        const SOLVENT = 0x1000_0000;
        /// Atom is part of a small organic ligand
        const ORGANIC = 0x2000_0000;
        /// Atom is an ion or other inorganic species
        const INORGANIC = 0x4000_0000;

        /// Classification mask
        const CLASS = Self::PROTEIN.bits()
            | Self::NUCLEIC.bits()
            | Self::POLYMER.bits()
            | Self::SOLVENT.bits()
            | Self::ORGANIC.bits()
            | Self::INORGANIC.bits();
    }
}

impl AtomFlags {
    /// Atom belongs to a water molecule
    #[inline]
    pub fn is_solvent(&self) -> bool {
        self.contains(AtomFlags::SOLVENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_mask() {
        let flags = AtomFlags::PROTEIN | AtomFlags::POLYMER;
        assert!(!flags.is_solvent());
        assert!(AtomFlags::SOLVENT.is_solvent());
        assert_eq!(flags & AtomFlags::CLASS, flags);
    }
}
