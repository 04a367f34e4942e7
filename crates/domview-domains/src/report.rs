//! Outcome of a styling pass

use std::fmt;

use serde::Serialize;

use crate::mapper::MappedRange;

/// Why a domain was not styled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DomainMiss {
    /// No mapping placed the domain inside the chain
    Unmappable,
    /// The structure range could not be parsed
    InvalidRange { range: String, reason: String },
    /// The range matched no atoms
    EmptySelection { selection: String },
}

impl fmt::Display for DomainMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainMiss::Unmappable => f.write_str("range could not be mapped onto the structure"),
            DomainMiss::InvalidRange { range, reason } => {
                write!(f, "invalid structure range '{}': {}", range, reason)
            }
            DomainMiss::EmptySelection { selection } => {
                write!(f, "no atoms match '{}'", selection)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    Styled {
        atoms: usize,
        /// `#rrggbb`
        color: String,
        /// Color came from the fallback palette
        fallback_color: bool,
    },
    Missed { miss: DomainMiss },
}

/// What happened to one domain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainOutcome {
    /// Position in the caller's domain list
    pub index: usize,
    pub id: String,
    pub name: String,
    /// Chain the domain was placed on
    pub chain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapped: Option<MappedRange>,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

impl DomainOutcome {
    pub fn is_styled(&self) -> bool {
        matches!(self.status, OutcomeStatus::Styled { .. })
    }

    pub fn miss(&self) -> Option<&DomainMiss> {
        match &self.status {
            OutcomeStatus::Missed { miss } => Some(miss),
            OutcomeStatus::Styled { .. } => None,
        }
    }

    /// Atoms styled for this domain
    pub fn atom_count(&self) -> usize {
        match self.status {
            OutcomeStatus::Styled { atoms, .. } => atoms,
            OutcomeStatus::Missed { .. } => 0,
        }
    }
}

impl fmt::Display for DomainOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: ", self.index, self.name)?;
        match (&self.status, &self.mapped) {
            (OutcomeStatus::Styled { atoms, color, .. }, Some(mapped)) => {
                write!(f, "chain {} {} -> {} atoms in {}", self.chain, mapped, atoms, color)
            }
            (OutcomeStatus::Styled { atoms, color, .. }, None) => {
                write!(f, "chain {} -> {} atoms in {}", self.chain, atoms, color)
            }
            (OutcomeStatus::Missed { miss }, _) => write!(f, "skipped, {}", miss),
        }
    }
}

/// Tally of a styling pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StylingReport {
    pub structure: String,
    pub chain: String,
    /// Atoms in the gray backdrop
    pub base_atoms: usize,
    pub success_count: usize,
    pub total: usize,
    pub outcomes: Vec<DomainOutcome>,
}

impl StylingReport {
    pub(crate) fn new(structure: &str, chain: &str, base_atoms: usize) -> Self {
        StylingReport {
            structure: structure.to_string(),
            chain: chain.to_string(),
            base_atoms,
            success_count: 0,
            total: 0,
            outcomes: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, outcome: DomainOutcome) {
        self.total += 1;
        if outcome.is_styled() {
            self.success_count += 1;
        }
        self.outcomes.push(outcome);
    }

    /// Every domain was styled
    pub fn is_complete(&self) -> bool {
        self.success_count == self.total
    }

    pub fn misses(&self) -> impl Iterator<Item = &DomainOutcome> {
        self.outcomes.iter().filter(|o| !o.is_styled())
    }

    /// `N of M domains mapped`
    pub fn summary(&self) -> String {
        format!("{} of {} domains mapped", self.success_count, self.total)
    }
}

impl fmt::Display for StylingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} chain {}: {}", self.structure, self.chain, self.summary())?;
        for outcome in &self.outcomes {
            writeln!(f, "  {}", outcome)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missed(index: usize) -> DomainOutcome {
        DomainOutcome {
            index,
            id: format!("d{}", index),
            name: format!("d{}", index),
            chain: "A".into(),
            mapped: None,
            status: OutcomeStatus::Missed {
                miss: DomainMiss::Unmappable,
            },
        }
    }

    #[test]
    fn test_tally() {
        let mut report = StylingReport::new("1abc", "A", 100);
        assert!(report.is_complete());

        let mut styled = missed(0);
        styled.status = OutcomeStatus::Styled {
            atoms: 12,
            color: "#ff0000".into(),
            fallback_color: false,
        };
        report.record(styled);
        report.record(missed(1));

        assert_eq!(report.summary(), "1 of 2 domains mapped");
        assert!(!report.is_complete());
        assert_eq!(report.misses().count(), 1);
        assert_eq!(report.outcomes[0].atom_count(), 12);
        assert_eq!(report.outcomes[1].miss(), Some(&DomainMiss::Unmappable));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(missed(3)).unwrap();
        assert_eq!(json["status"], "missed");
        assert_eq!(json["miss"]["kind"], "unmappable");
        assert!(json.get("mapped").is_none());
    }
}
