//! Atom selectors: a conjunction of chain, residue and name predicates

use domview_mol::{Atom, Structure};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::pattern::{Pattern, ResiSpec};
use crate::result::SelectionResult;

/// Selects atoms by chain, residue number and atom name
///
/// Unset fields match everything, so the default selector selects all atoms.
/// Chain ids and atom names match case-sensitively (chains `a` and `A`
/// are different chains in deposited structures).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomSelector {
    pub chain: Option<Pattern>,
    pub resi: Option<ResiSpec>,
    pub name: Option<Pattern>,
}

impl AtomSelector {
    /// Selector matching every atom
    pub fn all() -> Self {
        AtomSelector::default()
    }

    /// Selector for every atom of one chain
    pub fn chain(chain: impl Into<String>) -> Self {
        AtomSelector::all().with_chain(Pattern::exact(chain))
    }

    /// Selector for residues `start..=end` of one chain
    pub fn chain_range(chain: impl Into<String>, start: i32, end: i32) -> Self {
        AtomSelector::chain(chain).with_resi(ResiSpec::range(start, end))
    }

    pub fn with_chain(mut self, chain: Pattern) -> Self {
        self.chain = Some(chain);
        self
    }

    pub fn with_resi(mut self, resi: ResiSpec) -> Self {
        self.resi = Some(resi);
        self
    }

    pub fn with_name(mut self, name: Pattern) -> Self {
        self.name = Some(name);
        self
    }

    pub fn is_all(&self) -> bool {
        self.chain.is_none() && self.resi.is_none() && self.name.is_none()
    }

    /// Check a single atom against every set predicate
    pub fn matches(&self, atom: &Atom) -> bool {
        self.chain.as_ref().map_or(true, |p| p.matches(&atom.chain, true))
            && self
                .resi
                .as_ref()
                .map_or(true, |r| r.matches(atom.resv, atom.inscode))
            && self.name.as_ref().map_or(true, |p| p.matches(&atom.name, true))
    }

    /// Evaluate against a structure
    pub fn evaluate(&self, structure: &Structure) -> SelectionResult {
        if self.is_all() {
            return SelectionResult::all(structure.atom_count());
        }
        SelectionResult::from_indices(
            structure.atom_count(),
            structure.select(|atom| self.matches(atom)),
        )
    }
}

impl fmt::Display for AtomSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            return write!(f, "all");
        }
        let mut clauses = Vec::new();
        if let Some(chain) = &self.chain {
            clauses.push(format!("chain {}", chain));
        }
        if let Some(resi) = &self.resi {
            clauses.push(format!("resi {}", resi));
        }
        if let Some(name) = &self.name {
            clauses.push(format!("name {}", name));
        }
        write!(f, "{}", clauses.join(" and "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domview_mol::{AtomBuilder, Element, StructureBuilder};
    use lin_alg::f32::Vec3;

    fn structure() -> Structure {
        let mut builder = StructureBuilder::new("sel");
        for (chain, resv) in [("A", 9), ("A", 10), ("A", 50), ("A", 51), ("B", 10)] {
            for name in ["N", "CA"] {
                builder = builder.add_atom(
                    AtomBuilder::new()
                        .name(name)
                        .element_symbol(&name[..1])
                        .resn("GLY")
                        .resv(resv)
                        .chain(chain)
                        .build(),
                    Vec3::new(0.0, 0.0, 0.0),
                );
            }
        }
        builder.build()
    }

    #[test]
    fn test_all() {
        let s = structure();
        assert_eq!(AtomSelector::all().evaluate(&s).count(), 10);
        assert_eq!(AtomSelector::all().to_string(), "all");
    }

    #[test]
    fn test_chain_range() {
        let s = structure();
        let selector = AtomSelector::chain_range("A", 10, 50);
        let result = selector.evaluate(&s);
        assert_eq!(result.count(), 4);
        assert_eq!(selector.to_string(), "chain A and resi 10-50");
    }

    #[test]
    fn test_name_and_chain_case() {
        let s = structure();
        let ca = AtomSelector::chain("B").with_name(Pattern::exact("CA"));
        assert_eq!(ca.evaluate(&s).count(), 1);

        let lower = AtomSelector::chain("a");
        assert_eq!(lower.evaluate(&s).count(), 0);
    }

    #[test]
    fn test_matches_single_atom() {
        let atom = AtomBuilder::new()
            .name("CA")
            .element(Element::Carbon)
            .resv(12)
            .inscode('A')
            .chain("A")
            .build();
        assert!(AtomSelector::chain_range("A", 10, 20).matches(&atom));
        assert!(!AtomSelector::chain_range("A", 13, 20).matches(&atom));
    }
}
