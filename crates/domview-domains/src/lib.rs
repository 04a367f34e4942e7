//! Projection of classified protein domains onto 3D structures
//!
//! A domain is defined by a residue range in sequence numbering, while the
//! deposited structure may number its residues differently. This crate:
//!
//! - classifies chains and picks the target protein chain ([`StructureAnalyzer`])
//! - maps each domain range into the chain's own numbering ([`map_range`])
//! - styles the result on a viewer and reports which domains matched
//!   ([`DomainStyler`])
//!
//! # Example
//!
//! ```no_run
//! use domview_domains::{render_domains, ChainRequest, DomainDescriptor};
//! use domview_scene::ViewerSession;
//! use domview_settings::DomainViewConfig;
//! use std::path::Path;
//!
//! let structure = domview_io::read_structure(Path::new("1abc.pdb")).unwrap();
//! let mut viewer = ViewerSession::new(structure);
//! let domains = vec![DomainDescriptor::new("d1", 1, 120), DomainDescriptor::new("d2", 121, 260)];
//!
//! let (info, report) =
//!     render_domains(&mut viewer, &domains, &ChainRequest::Auto, &DomainViewConfig::default()).unwrap();
//! println!("chain {}: {}", info.actual_chain, report.summary());
//! ```

pub mod analyzer;
pub mod domain;
pub mod error;
pub mod mapper;
pub mod report;
pub mod styler;

#[cfg(test)]
pub(crate) mod test_support;

pub use analyzer::{analyze, ChainDescriptor, ChainRequest, ChainType, StructureAnalyzer, StructureInfo};
pub use domain::DomainDescriptor;
pub use error::{AnalysisWarning, DomainViewError, DomainViewResult};
pub use mapper::{map_range, MappedRange, MappingSource};
pub use report::{DomainMiss, DomainOutcome, OutcomeStatus, StylingReport};
pub use styler::{apply_styling, highlight_domain, render_domains, DomainStyler};
