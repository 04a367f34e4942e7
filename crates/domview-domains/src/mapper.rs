//! Projection of domain ranges onto structure residue numbering
//!
//! Mapping tries, in order: the explicit structure-range string, explicit
//! structure start/end fields, the sequence range as-is, and the sequence
//! range shifted so that sequence position 1 lands on the first residue of
//! the chain. No sequence alignment is attempted.

use std::fmt;

use domview_select::{SelectResult, StructureRange};
use serde::{Serialize, Serializer};

use crate::analyzer::StructureInfo;
use crate::domain::DomainDescriptor;

/// How a range was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingSource {
    ExplicitRange,
    ExplicitFields,
    Direct,
    /// Sequence range shifted by this many residues
    Offset(i32),
}

impl fmt::Display for MappingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingSource::ExplicitRange => f.write_str("explicit-range"),
            MappingSource::ExplicitFields => f.write_str("explicit-fields"),
            MappingSource::Direct => f.write_str("direct"),
            MappingSource::Offset(k) => write!(f, "offset({:+})", k),
        }
    }
}

impl Serialize for MappingSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A domain range in structure numbering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedRange {
    /// Range text; explicit range strings are kept verbatim
    pub range: String,
    /// Numeric bounds when the range came from numbers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<(i32, i32)>,
    pub source: MappingSource,
}

impl MappedRange {
    fn span(start: i32, end: i32, source: MappingSource) -> Self {
        MappedRange {
            range: format!("{}-{}", start, end),
            span: Some((start, end)),
            source,
        }
    }

    fn verbatim(range: &str) -> Self {
        MappedRange {
            range: range.to_string(),
            span: None,
            source: MappingSource::ExplicitRange,
        }
    }

    /// Whether a heuristic rather than caller data produced the range
    pub fn is_heuristic(&self) -> bool {
        matches!(self.source, MappingSource::Direct | MappingSource::Offset(_))
    }

    /// Parse the range text for selection
    pub fn to_structure_range(&self) -> SelectResult<StructureRange> {
        StructureRange::parse(&self.range)
    }
}

impl fmt::Display for MappedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.range, self.source)
    }
}

/// Map a domain onto the analyzed chain, or `None` when it cannot be placed
///
/// The heuristics use the bounds of the domain's own chain when it names one
/// present in the structure (see [`StructureInfo::mapping_bounds`]).
pub fn map_range(domain: &DomainDescriptor, info: &StructureInfo) -> Option<MappedRange> {
    if let Some(range) = domain.structure_range.as_deref() {
        if !range.trim().is_empty() {
            return Some(MappedRange::verbatim(range));
        }
    }

    if let (Some(start), Some(end)) = (domain.structure_start, domain.structure_end) {
        return Some(MappedRange::span(start, end, MappingSource::ExplicitFields));
    }

    let (start, end) = (domain.start, domain.end);
    if start > end {
        log::debug!("Domain {}: inverted range {}-{}", domain.id, start, end);
        return None;
    }

    let (min_residue, max_residue) = info.mapping_bounds(domain.chain.as_deref());
    let contains = |lo: i32, hi: i32| lo >= min_residue && hi <= max_residue;

    if contains(start, end) {
        return Some(MappedRange::span(start, end, MappingSource::Direct));
    }

    let offset = min_residue - 1;
    let (shifted_start, shifted_end) = (start.checked_add(offset)?, end.checked_add(offset)?);
    if offset != 0 && contains(shifted_start, shifted_end) {
        log::debug!(
            "Domain {}: {}-{} mapped with offset {:+} to {}-{}",
            domain.id,
            start,
            end,
            offset,
            shifted_start,
            shifted_end
        );
        return Some(MappedRange::span(
            shifted_start,
            shifted_end,
            MappingSource::Offset(offset),
        ));
    }

    log::debug!(
        "Domain {}: {}-{} outside chain {} bounds {}..{}",
        domain.id,
        start,
        end,
        domain.chain.as_deref().unwrap_or(&info.actual_chain),
        min_residue,
        max_residue
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{analyze, ChainRequest, ChainType};
    use crate::test_support::StructureSpec;

    fn info(min: i32, max: i32) -> StructureInfo {
        StructureInfo {
            actual_chain: "A".into(),
            requested_chain: None,
            min_residue: min,
            max_residue: max,
            residues: (min..=max).collect(),
            all_chains: vec!["A".into()],
            chain_type: ChainType::Protein,
            chains: Vec::new(),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_direct_mapping() {
        let mapped = map_range(&DomainDescriptor::new("d", 10, 50), &info(1, 300)).unwrap();
        assert_eq!(mapped.range, "10-50");
        assert_eq!(mapped.span, Some((10, 50)));
        assert_eq!(mapped.source, MappingSource::Direct);
        assert!(mapped.is_heuristic());
    }

    #[test]
    fn test_offset_mapping() {
        let mapped = map_range(&DomainDescriptor::new("d", 1, 50), &info(159, 400)).unwrap();
        assert_eq!(mapped.range, "159-208");
        assert_eq!(mapped.source, MappingSource::Offset(158));
        assert_eq!(mapped.source.to_string(), "offset(+158)");
    }

    #[test]
    fn test_negative_offset() {
        let mapped = map_range(&DomainDescriptor::new("d", 1, 5), &info(-3, 2)).unwrap();
        assert_eq!(mapped.span, Some((-3, 1)));
        assert_eq!(mapped.source, MappingSource::Offset(-4));
        assert_eq!(mapped.range, "-3-1");
        assert_eq!(mapped.to_structure_range().unwrap().bounds(), Some((-3, 1)));
    }

    #[test]
    fn test_unmappable() {
        assert_eq!(map_range(&DomainDescriptor::new("d", 1, 300), &info(159, 400)), None);
        assert_eq!(map_range(&DomainDescriptor::new("d", 50, 10), &info(1, 400)), None);
        assert_eq!(map_range(&DomainDescriptor::new("d", 0, 500), &info(1, 400)), None);
    }

    #[test]
    fn test_explicit_range_is_verbatim() {
        let domain = DomainDescriptor::new("d", 10, 50).with_structure_range("A:200-240,B:5");
        let mapped = map_range(&domain, &info(1, 300)).unwrap();
        assert_eq!(mapped.range, "A:200-240,B:5");
        assert_eq!(mapped.source, MappingSource::ExplicitRange);
        assert!(!mapped.is_heuristic());

        let garbage = DomainDescriptor::new("d", 10, 50).with_structure_range("nonsense");
        assert_eq!(map_range(&garbage, &info(1, 300)).unwrap().range, "nonsense");

        let blank = DomainDescriptor::new("d", 10, 50).with_structure_range("  ");
        assert_eq!(map_range(&blank, &info(1, 300)).unwrap().source, MappingSource::Direct);
    }

    #[test]
    fn test_explicit_fields() {
        let domain = DomainDescriptor::new("d", 1, 50).with_structure_span(700, 760);
        let mapped = map_range(&domain, &info(1, 300)).unwrap();
        assert_eq!(mapped.range, "700-760");
        assert_eq!(mapped.source, MappingSource::ExplicitFields);
    }

    #[test]
    fn test_in_bounds_range_never_offset() {
        let bounds = info(1, 100);
        for (start, end) in [(1, 1), (1, 100), (40, 60), (100, 100)] {
            let mapped = map_range(&DomainDescriptor::new("d", start, end), &bounds).unwrap();
            assert_eq!(mapped.source, MappingSource::Direct);
            assert_eq!(mapped.span, Some((start, end)));
        }
    }

    #[test]
    fn test_domain_chain_uses_its_own_bounds() {
        let structure = StructureSpec::new()
            .protein("A", 159, 400)
            .protein("B", 501, 560)
            .build();
        let info = analyze(&structure, &ChainRequest::Auto).unwrap();

        let on_b = DomainDescriptor::new("d", 1, 20).with_chain("B");
        let mapped = map_range(&on_b, &info).unwrap();
        assert_eq!(mapped.range, "501-520");
        assert_eq!(mapped.source, MappingSource::Offset(500));

        let on_target = DomainDescriptor::new("d", 1, 20);
        assert_eq!(map_range(&on_target, &info).unwrap().range, "159-178");

        let on_missing = DomainDescriptor::new("d", 1, 20).with_chain("Z");
        assert_eq!(map_range(&on_missing, &info).unwrap().range, "159-178");
    }
}
