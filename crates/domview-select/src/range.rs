//! Structure-range strings as stored alongside classified domains
//!
//! Accepted forms, comma separated: `12-80`, `5`, `A:12-80`, `-3-45`,
//! `12A-80`, `A:-10--2`.

use nom::{
    branch::alt,
    character::complete::{alphanumeric1, char, digit1, satisfy, space0},
    combinator::{all_consuming, map, map_res, opt, recognize},
    multi::separated_list1,
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SelectError, SelectResult};
use crate::pattern::{Pattern, ResiItem, ResiSpec};
use crate::selector::AtomSelector;

/// One end of a residue range
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResidueBound {
    pub resv: i32,
    /// Insertion code, space when absent
    pub inscode: char,
}

impl ResidueBound {
    pub fn new(resv: i32) -> Self {
        ResidueBound { resv, inscode: ' ' }
    }
}

impl fmt::Display for ResidueBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inscode == ' ' {
            write!(f, "{}", self.resv)
        } else {
            write!(f, "{}{}", self.resv, self.inscode)
        }
    }
}

/// A contiguous residue span, optionally pinned to a chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSegment {
    pub chain: Option<String>,
    pub start: ResidueBound,
    pub end: ResidueBound,
}

impl RangeSegment {
    /// Residue item matching this span
    pub fn resi_item(&self) -> ResiItem {
        let (s, e) = (self.start, self.end);
        match (s.inscode, e.inscode) {
            (' ', ' ') if s.resv == e.resv => ResiItem::Single(s.resv),
            (' ', ' ') => ResiItem::Range(s.resv, e.resv),
            _ if s == e => ResiItem::InsCode(s.resv, s.inscode),
            _ => ResiItem::InsCodeRange(s.resv, s.inscode, e.resv, e.inscode),
        }
    }
}

impl fmt::Display for RangeSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(chain) = &self.chain {
            write!(f, "{}:", chain)?;
        }
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A parsed structure-range string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureRange {
    pub segments: Vec<RangeSegment>,
}

impl StructureRange {
    /// Parse a structure-range string
    pub fn parse(text: &str) -> SelectResult<Self> {
        let invalid = || SelectError::InvalidRange(text.to_string());
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let (_, segments) = all_consuming(segment_list)(trimmed).map_err(|_| invalid())?;
        if segments.iter().any(|s| s.start > s.end) {
            return Err(invalid());
        }
        Ok(StructureRange { segments })
    }

    /// Single `start-end` span without a chain prefix
    pub fn span(start: i32, end: i32) -> Self {
        StructureRange {
            segments: vec![RangeSegment {
                chain: None,
                start: ResidueBound::new(start),
                end: ResidueBound::new(end),
            }],
        }
    }

    /// Smallest start and largest end residue number over all segments
    pub fn bounds(&self) -> Option<(i32, i32)> {
        let lo = self.segments.iter().map(|s| s.start.resv).min()?;
        let hi = self.segments.iter().map(|s| s.end.resv).max()?;
        Some((lo, hi))
    }

    /// One selector per distinct chain, in order of first appearance
    ///
    /// Segments without a chain prefix use `default_chain`.
    pub fn to_selectors(&self, default_chain: &str) -> Vec<AtomSelector> {
        let mut grouped: Vec<(String, Vec<ResiItem>)> = Vec::new();
        for segment in &self.segments {
            let chain = segment.chain.as_deref().unwrap_or(default_chain);
            match grouped.iter_mut().find(|(c, _)| c == chain) {
                Some((_, items)) => items.push(segment.resi_item()),
                None => grouped.push((chain.to_string(), vec![segment.resi_item()])),
            }
        }

        grouped
            .into_iter()
            .map(|(chain, items)| {
                AtomSelector::all()
                    .with_chain(Pattern::exact(chain))
                    .with_resi(ResiSpec { items })
            })
            .collect()
    }

    /// A single selector, failing when segments name different chains
    pub fn to_selector(&self, default_chain: &str) -> SelectResult<AtomSelector> {
        let mut selectors = self.to_selectors(default_chain);
        match selectors.len() {
            1 => Ok(selectors.remove(0)),
            _ => Err(SelectError::MixedChains(self.to_string())),
        }
    }
}

impl fmt::Display for StructureRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strings: Vec<String> = self.segments.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", strings.join(","))
    }
}

impl std::str::FromStr for StructureRange {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StructureRange::parse(s)
    }
}

// ============================================================================
// nom parsers
// ============================================================================

fn signed_int(input: &str) -> IResult<&str, i32> {
    map_res(recognize(pair(opt(char('-')), digit1)), str::parse)(input)
}

/// Residue number with optional insertion code: `12`, `-3`, `52A`
pub(crate) fn residue_bound(input: &str) -> IResult<&str, ResidueBound> {
    map(
        pair(signed_int, opt(satisfy(|c| c.is_ascii_alphabetic()))),
        |(resv, code)| ResidueBound {
            resv,
            inscode: code.map(|c| c.to_ascii_uppercase()).unwrap_or(' '),
        },
    )(input)
}

/// `start` or `start-end`
pub(crate) fn bound_pair(input: &str) -> IResult<&str, (ResidueBound, ResidueBound)> {
    map(
        pair(residue_bound, opt(preceded(char('-'), residue_bound))),
        |(start, end)| (start, end.unwrap_or(start)),
    )(input)
}

fn segment(input: &str) -> IResult<&str, RangeSegment> {
    map(
        tuple((opt(terminated(alphanumeric1, char(':'))), bound_pair)),
        |(chain, (start, end))| RangeSegment {
            chain: chain.map(str::to_string),
            start,
            end,
        },
    )(input)
}

fn segment_list(input: &str) -> IResult<&str, Vec<RangeSegment>> {
    separated_list1(delimited(space0, alt((char(','), char(';'))), space0), segment)(input)
}
