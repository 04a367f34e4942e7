//! Structure model for domain visualization
//!
//! This crate provides the parsed-structure data model:
//!
//! - [`Atom`] - atom properties with residue and chain information inline
//! - [`Element`] - the chemical elements found in biomolecular structures
//! - [`Structure`] - atoms plus one coordinate per atom (first model only)
//! - [`ResidueView`] / [`ChainView`] - borrowed views over contiguous atom runs
//!
//! # Example
//!
//! ```rust
//! use domview_mol::{AtomBuilder, Element, StructureBuilder};
//! use lin_alg::f32::Vec3;
//!
//! let structure = StructureBuilder::new("tiny")
//!     .add_atom(
//!         AtomBuilder::new().name("CA").element(Element::Carbon).resn("GLY").resv(1).chain("A").build(),
//!         Vec3::new(0.0, 0.0, 0.0),
//!     )
//!     .build();
//!
//! assert_eq!(structure.atom_count(), 1);
//! assert_eq!(structure.chain_ids(), vec!["A".to_string()]);
//! ```

mod atom;
mod element;
mod error;
mod flags;
mod index;
mod iterator;
mod residue;
mod structure;

pub use atom::{Atom, AtomBuilder};
pub use element::Element;
pub use error::{MolError, MolResult};
pub use flags::AtomFlags;
pub use index::AtomIndex;
pub use residue::{
    is_amino_acid, is_nucleotide, is_water, ChainIterator, ChainView, ResidueIterator,
    ResidueKey, ResidueView,
};
pub use structure::{Structure, StructureBuilder};
