//! Atom selection for domain views
//!
//! Selections here are deliberately small: a conjunction of chain, residue and
//! atom-name predicates, evaluated to a bitset over a structure's atoms.
//! Structure-range strings (`A:12-80,90-95`) parse into one selector per chain.
//!
//! # Example
//!
//! ```
//! use domview_select::{parse_selector, StructureRange};
//!
//! let selector = parse_selector("chain A and resi 10-50").unwrap();
//! assert_eq!(selector.to_string(), "chain A and resi 10-50");
//!
//! let range = StructureRange::parse("A:12-80,B:5").unwrap();
//! assert_eq!(range.to_selectors("A").len(), 2);
//! ```

pub mod error;
pub mod parser;
pub mod pattern;
pub mod range;
pub mod result;
pub mod selector;

pub use error::{SelectError, SelectResult};
pub use parser::{parse_resi_spec, parse_selector};
pub use pattern::{Pattern, ResiItem, ResiSpec};
pub use range::{RangeSegment, ResidueBound, StructureRange};
pub use result::SelectionResult;
pub use selector::AtomSelector;
