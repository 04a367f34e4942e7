//! Error taxonomy for domain views
//!
//! Fatal conditions abort a styling pass and are returned as
//! [`DomainViewError`]. Non-fatal findings from chain analysis are collected
//! as [`AnalysisWarning`]s; per-domain misses live in the styling report.

use domview_scene::ViewerError;
use domview_settings::SettingError;
use serde::Serialize;
use thiserror::Error;

use crate::analyzer::ChainType;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainViewError {
    /// No chain in the structure qualifies as protein
    #[error("no protein chain found (requested {}, chains present: {})", display_requested(.requested), .all_chains.join(", "))]
    NoProteinChainFound {
        requested: Option<String>,
        all_chains: Vec<String>,
    },

    /// The requested chain does not exist in the structure
    #[error("chain '{requested}' not present (chains present: {})", .all_chains.join(", "))]
    ChainNotPresent {
        requested: String,
        all_chains: Vec<String>,
    },

    /// The requested chain exists but is not classified as protein
    #[error("chain '{chain}' is {chain_type}, not protein")]
    ChainNotProtein { chain: String, chain_type: ChainType },

    /// The viewer cannot be reached
    #[error("viewer unavailable: {0}")]
    ViewerUnavailable(String),

    /// Any other viewer failure during the reset or backdrop phases
    #[error("viewer error: {0}")]
    Viewer(ViewerError),

    /// Highlight requested for a domain that does not exist
    #[error("domain index {index} out of range ({count} domains)")]
    DomainIndexOutOfRange { index: usize, count: usize },

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(#[from] SettingError),

    /// Domain list could not be decoded
    #[error("invalid domain list: {0}")]
    InvalidDomains(String),
}

fn display_requested(requested: &Option<String>) -> String {
    match requested {
        Some(chain) => format!("'{}'", chain),
        None => "none".to_string(),
    }
}

impl From<ViewerError> for DomainViewError {
    fn from(err: ViewerError) -> Self {
        match err {
            ViewerError::Unavailable(reason) => DomainViewError::ViewerUnavailable(reason),
            other => DomainViewError::Viewer(other),
        }
    }
}

pub type DomainViewResult<T> = Result<T, DomainViewError>;

/// Non-fatal finding of chain analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisWarning {
    /// Requested chain missing; a chain was selected automatically
    ChainNotPresent {
        requested: String,
        all_chains: Vec<String>,
    },
    /// Requested chain honored although it is not protein
    ChainNotProtein { chain: String, chain_type: ChainType },
}

impl AnalysisWarning {
    /// Promote the warning to an error, for callers that treat it as fatal
    pub fn into_error(self) -> DomainViewError {
        match self {
            AnalysisWarning::ChainNotPresent {
                requested,
                all_chains,
            } => DomainViewError::ChainNotPresent {
                requested,
                all_chains,
            },
            AnalysisWarning::ChainNotProtein { chain, chain_type } => {
                DomainViewError::ChainNotProtein { chain, chain_type }
            }
        }
    }
}

impl std::fmt::Display for AnalysisWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.clone().into_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_unavailable_mapping() {
        let err: DomainViewError = ViewerError::Unavailable("closed".into()).into();
        assert_eq!(err, DomainViewError::ViewerUnavailable("closed".into()));

        let err: DomainViewError = ViewerError::EmptySelection.into();
        assert!(matches!(err, DomainViewError::Viewer(ViewerError::EmptySelection)));
    }

    #[test]
    fn test_messages_list_chains() {
        let err = DomainViewError::NoProteinChainFound {
            requested: None,
            all_chains: vec!["W".into(), "X".into()],
        };
        assert_eq!(
            err.to_string(),
            "no protein chain found (requested none, chains present: W, X)"
        );

        let warning = AnalysisWarning::ChainNotPresent {
            requested: "Z".into(),
            all_chains: vec!["A".into()],
        };
        assert_eq!(warning.to_string(), "chain 'Z' not present (chains present: A)");
        assert!(matches!(
            warning.into_error(),
            DomainViewError::ChainNotPresent { ref requested, .. } if requested == "Z"
        ));
    }
}
