//! Atom data structure
//!
//! Residue and chain information is stored inline on each atom, the same way
//! PDB and mmCIF files carry it. Residue and chain views are derived on demand.

use crate::element::Element;
use crate::flags::AtomFlags;

/// A single atom of a parsed structure
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    // =========================================================================
    // Identity
    // =========================================================================
    /// Atom name (e.g., "CA", "N", "P")
    pub name: String,

    /// Chemical element
    pub element: Element,

    // =========================================================================
    // Residue Information
    // =========================================================================
    /// Residue name (e.g., "ALA", "DG")
    pub resn: String,

    /// Residue sequence number in the structure's own numbering
    pub resv: i32,

    /// Insertion code (space when absent)
    pub inscode: char,

    /// Chain identifier (e.g., "A", "B")
    pub chain: String,

    /// Segment identifier
    pub segi: String,

    /// Alternate location indicator
    pub alt: char,

    // =========================================================================
    // Experimental Properties
    // =========================================================================
    /// B-factor (temperature factor)
    pub b_factor: f32,

    /// Occupancy (0.0 to 1.0)
    pub occupancy: f32,

    // =========================================================================
    // State
    // =========================================================================
    /// Whether this atom came from a HETATM record
    pub hetatm: bool,

    /// Classification flags (protein, nucleic, solvent, ...)
    pub flags: AtomFlags,

    /// Serial number from the source file
    pub id: i32,
}

impl Default for Atom {
    fn default() -> Self {
        Atom {
            name: String::new(),
            element: Element::Unknown,
            resn: String::new(),
            resv: 0,
            inscode: ' ',
            chain: String::new(),
            segi: String::new(),
            alt: ' ',
            b_factor: 0.0,
            occupancy: 1.0,
            hetatm: false,
            flags: AtomFlags::empty(),
            id: 0,
        }
    }
}

impl Atom {
    /// Create a new atom with the given name and element
    pub fn new(name: impl Into<String>, element: Element) -> Self {
        Atom {
            name: name.into(),
            element,
            ..Default::default()
        }
    }

    /// Check if this is an alpha-carbon
    ///
    /// Calcium ions are also named `CA` in PDB files, so the element must be carbon.
    #[inline]
    pub fn is_ca(&self) -> bool {
        self.name == "CA" && self.element.is_carbon()
    }

    /// Check if this is a phosphorus atom (nucleotide backbone marker)
    #[inline]
    pub fn is_phosphorus(&self) -> bool {
        self.element.is_phosphorus()
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Atom({} {} {} {}{})",
            self.name,
            self.element.symbol(),
            self.chain,
            self.resn,
            self.resv
        )
    }
}

/// Builder for creating atoms with a fluent interface
#[derive(Debug, Default)]
pub struct AtomBuilder {
    atom: Atom,
}

impl AtomBuilder {
    pub fn new() -> Self {
        AtomBuilder::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.atom.name = name.into();
        self
    }

    pub fn element(mut self, element: Element) -> Self {
        self.atom.element = element;
        self
    }

    /// Set the element from a symbol; unknown symbols leave the element untouched
    pub fn element_symbol(mut self, symbol: &str) -> Self {
        if let Some(element) = Element::from_symbol(symbol) {
            self.atom.element = element;
        }
        self
    }

    pub fn resn(mut self, resn: impl Into<String>) -> Self {
        self.atom.resn = resn.into();
        self
    }

    pub fn resv(mut self, resv: i32) -> Self {
        self.atom.resv = resv;
        self
    }

    pub fn inscode(mut self, inscode: char) -> Self {
        self.atom.inscode = inscode;
        self
    }

    pub fn chain(mut self, chain: impl Into<String>) -> Self {
        self.atom.chain = chain.into();
        self
    }

    pub fn hetatm(mut self, hetatm: bool) -> Self {
        self.atom.hetatm = hetatm;
        self
    }

    pub fn build(self) -> Atom {
        self.atom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_builder() {
        let atom = AtomBuilder::new()
            .name("CA")
            .element(Element::Carbon)
            .resn("ALA")
            .resv(1)
            .chain("A")
            .build();

        assert_eq!(atom.name, "CA");
        assert_eq!(atom.resn, "ALA");
        assert_eq!(atom.resv, 1);
        assert_eq!(atom.chain, "A");
        assert_eq!(atom.inscode, ' ');
        assert!(atom.is_ca());
    }

    #[test]
    fn test_calcium_is_not_alpha_carbon() {
        let ion = AtomBuilder::new()
            .name("CA")
            .element(Element::Calcium)
            .resn("CA")
            .hetatm(true)
            .build();
        assert!(!ion.is_ca());
    }

    #[test]
    fn test_display_and_phosphorus() {
        let atom = AtomBuilder::new()
            .name("P")
            .element_symbol("P")
            .resn("DG")
            .resv(12)
            .chain("W")
            .build();
        assert!(atom.is_phosphorus());
        assert_eq!(format!("{}", atom), "Atom(P P W DG12)");
    }
}
