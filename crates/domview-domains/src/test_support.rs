//! Synthetic structures for unit tests

use domview_mol::{Atom, AtomBuilder, Element, Structure, StructureBuilder};
use lin_alg::f32::Vec3;

pub(crate) mod chain_atoms {
    use super::*;

    pub(crate) fn atom(name: &str, element: Element, resn: &str, chain: &str, resv: i32) -> Atom {
        AtomBuilder::new()
            .name(name)
            .element(element)
            .resn(resn)
            .resv(resv)
            .chain(chain)
            .build()
    }

    pub(crate) fn calcium(chain: &str, resv: i32) -> Atom {
        AtomBuilder::new()
            .name("CA")
            .element(Element::Calcium)
            .resn("CA")
            .resv(resv)
            .chain(chain)
            .hetatm(true)
            .build()
    }
}

/// Builds structures chain by chain
pub(crate) struct StructureSpec {
    atoms: Vec<Atom>,
}

impl StructureSpec {
    pub(crate) fn new() -> Self {
        StructureSpec { atoms: Vec::new() }
    }

    pub(crate) fn atom(mut self, atom: Atom) -> Self {
        self.atoms.push(atom);
        self
    }

    /// Residues `start..=end` with N, CA, C, O backbone atoms
    pub(crate) fn protein(mut self, chain: &str, start: i32, end: i32) -> Self {
        for resv in start..=end {
            for (name, element) in [
                ("N", Element::Nitrogen),
                ("CA", Element::Carbon),
                ("C", Element::Carbon),
                ("O", Element::Oxygen),
            ] {
                self.atoms.push(chain_atoms::atom(name, element, "ALA", chain, resv));
            }
        }
        self
    }

    /// Nucleotides `start..=end` with P and C1' atoms
    pub(crate) fn nucleic(mut self, chain: &str, start: i32, end: i32) -> Self {
        for resv in start..=end {
            self.atoms.push(chain_atoms::atom("P", Element::Phosphorus, "DA", chain, resv));
            self.atoms.push(chain_atoms::atom("C1'", Element::Carbon, "DA", chain, resv));
        }
        self
    }

    pub(crate) fn water(mut self, chain: &str, start: i32, end: i32) -> Self {
        for resv in start..=end {
            let mut atom = chain_atoms::atom("O", Element::Oxygen, "HOH", chain, resv);
            atom.hetatm = true;
            self.atoms.push(atom);
        }
        self
    }

    pub(crate) fn build(self) -> Structure {
        let mut builder = StructureBuilder::new("test");
        for (i, atom) in self.atoms.into_iter().enumerate() {
            builder = builder.add_atom(atom, Vec3::new(i as f32 * 1.5, 0.0, 0.0));
        }
        builder.build()
    }
}
