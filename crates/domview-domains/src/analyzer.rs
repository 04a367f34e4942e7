//! Chain classification and target-chain selection
//!
//! Every chain is described by its backbone markers: residues carrying an
//! alpha carbon for protein, residues carrying phosphorus for nucleic acid. The target chain is the requested one
//! when it exists, otherwise the protein chain with the most alpha carbons.

use std::collections::BTreeSet;
use std::fmt;

use ahash::{AHashMap, AHashSet};
use domview_mol::Structure;
use domview_settings::DomainViewConfig;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisWarning, DomainViewError, DomainViewResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainType {
    #[serde(rename = "protein")]
    Protein,
    #[serde(rename = "nucleic acid")]
    NucleicAcid,
    #[serde(rename = "unknown")]
    Unknown,
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChainType::Protein => "protein",
            ChainType::NucleicAcid => "nucleic acid",
            ChainType::Unknown => "unknown",
        })
    }
}

/// Summary of one chain, computed per structure load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainDescriptor {
    pub id: String,
    pub atom_count: usize,
    /// Residues with an alpha carbon, each counted once across alternate locations
    pub ca_count: usize,
    /// Residues with a phosphorus atom
    pub p_count: usize,
    /// Residue numbers observed, water excluded unless configured otherwise
    pub residues: BTreeSet<i32>,
    /// Residue numbers of water molecules
    pub water_residues: BTreeSet<i32>,
    pub atom_names: BTreeSet<String>,
    pub is_protein: bool,
    pub is_nucleic_acid: bool,
}

impl ChainDescriptor {
    fn new(id: &str) -> Self {
        ChainDescriptor {
            id: id.to_string(),
            atom_count: 0,
            ca_count: 0,
            p_count: 0,
            residues: BTreeSet::new(),
            water_residues: BTreeSet::new(),
            atom_names: BTreeSet::new(),
            is_protein: false,
            is_nucleic_acid: false,
        }
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    /// Fraction of atoms that are alpha carbons
    pub fn protein_score(&self) -> f32 {
        if self.atom_count == 0 {
            0.0
        } else {
            self.ca_count as f32 / self.atom_count as f32
        }
    }

    /// Fraction of atoms that are phosphorus
    pub fn nucleic_acid_score(&self) -> f32 {
        if self.atom_count == 0 {
            0.0
        } else {
            self.p_count as f32 / self.atom_count as f32
        }
    }

    pub fn chain_type(&self) -> ChainType {
        if self.is_protein {
            ChainType::Protein
        } else if self.is_nucleic_acid {
            ChainType::NucleicAcid
        } else {
            ChainType::Unknown
        }
    }

    /// Residue numbers used for bounds; water is used only when nothing else exists
    fn bound_residues(&self) -> &BTreeSet<i32> {
        if self.residues.is_empty() {
            &self.water_residues
        } else {
            &self.residues
        }
    }

    /// Lowest and highest residue number of the chain
    pub fn bounds(&self) -> Option<(i32, i32)> {
        let residues = self.bound_residues();
        Some((*residues.first()?, *residues.last()?))
    }
}

/// Which chain the caller wants analyzed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChainRequest {
    /// Pick the best protein chain
    #[default]
    Auto,
    /// Use this chain whenever it exists, protein or not
    Explicit(String),
    /// Prefer this chain if it exists and is protein
    Hint(String),
}

impl ChainRequest {
    pub fn requested(&self) -> Option<&str> {
        match self {
            ChainRequest::Auto => None,
            ChainRequest::Explicit(id) | ChainRequest::Hint(id) => Some(id),
        }
    }
}

impl From<Option<String>> for ChainRequest {
    fn from(chain: Option<String>) -> Self {
        chain.map_or(ChainRequest::Auto, ChainRequest::Explicit)
    }
}

/// Result of chain analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureInfo {
    pub actual_chain: String,
    pub requested_chain: Option<String>,
    pub min_residue: i32,
    pub max_residue: i32,
    /// Sorted residue numbers of the target chain
    pub residues: Vec<i32>,
    /// Chain ids in order of first appearance
    pub all_chains: Vec<String>,
    pub chain_type: ChainType,
    pub chains: Vec<ChainDescriptor>,
    pub warnings: Vec<AnalysisWarning>,
}

impl StructureInfo {
    pub fn total_residues(&self) -> usize {
        self.residues.len()
    }

    /// Residue bounds a domain is mapped against
    ///
    /// A domain naming another chain present in the structure uses that
    /// chain's bounds, so its offset follows its own numbering. Otherwise the
    /// target chain's bounds apply.
    pub fn mapping_bounds(&self, chain: Option<&str>) -> (i32, i32) {
        chain
            .filter(|id| *id != self.actual_chain)
            .and_then(|id| self.chain(id))
            .and_then(ChainDescriptor::bounds)
            .unwrap_or((self.min_residue, self.max_residue))
    }

    pub fn chain(&self, id: &str) -> Option<&ChainDescriptor> {
        self.chains.iter().find(|c| c.id == id)
    }
}

/// Classifies chains and selects the target chain
#[derive(Debug, Clone)]
pub struct StructureAnalyzer {
    pub ca_threshold: usize,
    pub p_threshold: usize,
    pub ignore_water: bool,
}

impl Default for StructureAnalyzer {
    fn default() -> Self {
        StructureAnalyzer::from_config(&DomainViewConfig::default())
    }
}

impl StructureAnalyzer {
    pub fn from_config(config: &DomainViewConfig) -> Self {
        StructureAnalyzer {
            ca_threshold: config.protein_ca_threshold,
            p_threshold: config.nucleic_p_threshold,
            ignore_water: config.ignore_water_in_bounds,
        }
    }

    /// Describe every chain, in order of first appearance
    ///
    /// Runs of the same chain id are merged even when a chain's atoms are not
    /// contiguous in the file. Backbone markers are counted per residue, so
    /// alternate conformers of one alpha carbon count once.
    pub fn describe_chains(&self, structure: &Structure) -> Vec<ChainDescriptor> {
        let mut chains: Vec<ChainDescriptor> = Vec::new();
        let mut by_id: AHashMap<String, usize> = AHashMap::new();
        let mut ca_seen: Vec<AHashSet<(i32, char)>> = Vec::new();
        let mut p_seen: Vec<AHashSet<(i32, char)>> = Vec::new();

        for run in structure.chains() {
            let slot = match by_id.get(run.id()) {
                Some(&slot) => slot,
                None => {
                    chains.push(ChainDescriptor::new(run.id()));
                    ca_seen.push(AHashSet::new());
                    p_seen.push(AHashSet::new());
                    by_id.insert(run.id().to_string(), chains.len() - 1);
                    chains.len() - 1
                }
            };
            let chain = &mut chains[slot];
            chain.atom_count += run.len();

            for residue in run.residues() {
                let key = (residue.resv(), residue.key.inscode);
                if residue.has_ca() && ca_seen[slot].insert(key) {
                    chain.ca_count += 1;
                }
                if residue.has_phosphorus() && p_seen[slot].insert(key) {
                    chain.p_count += 1;
                }

                let solvent = residue.atoms.first().is_some_and(|a| a.flags.is_solvent());
                if self.ignore_water && solvent {
                    chain.water_residues.insert(residue.resv());
                } else {
                    chain.residues.insert(residue.resv());
                }
                for atom in residue.atoms {
                    if !chain.atom_names.contains(atom.name.as_str()) {
                        chain.atom_names.insert(atom.name.clone());
                    }
                }
            }
        }

        for chain in &mut chains {
            chain.is_protein = chain.ca_count > self.ca_threshold;
            chain.is_nucleic_acid = chain.p_count > self.p_threshold;
        }
        chains
    }

    /// Classify chains and choose the target chain
    pub fn analyze(&self, structure: &Structure, request: &ChainRequest) -> DomainViewResult<StructureInfo> {
        let chains = self.describe_chains(structure);
        let all_chains: Vec<String> = chains.iter().map(|c| c.id.clone()).collect();
        let mut warnings = Vec::new();

        let find = |id: &str| chains.iter().find(|c| c.id == id);

        let chosen = match request {
            ChainRequest::Explicit(id) => match find(id) {
                Some(chain) => {
                    if !chain.is_protein {
                        warnings.push(AnalysisWarning::ChainNotProtein {
                            chain: chain.id.clone(),
                            chain_type: chain.chain_type(),
                        });
                    }
                    Some(chain)
                }
                None => {
                    warnings.push(AnalysisWarning::ChainNotPresent {
                        requested: id.clone(),
                        all_chains: all_chains.clone(),
                    });
                    None
                }
            },
            ChainRequest::Hint(id) => match find(id) {
                Some(chain) if chain.is_protein => Some(chain),
                Some(chain) => {
                    log::debug!(
                        "Hinted chain '{}' is {}; selecting automatically",
                        id,
                        chain.chain_type()
                    );
                    None
                }
                None => {
                    warnings.push(AnalysisWarning::ChainNotPresent {
                        requested: id.clone(),
                        all_chains: all_chains.clone(),
                    });
                    None
                }
            },
            ChainRequest::Auto => None,
        };

        let chosen = match chosen {
            Some(chain) => chain,
            None => best_protein_chain(&chains).ok_or_else(|| {
                DomainViewError::NoProteinChainFound {
                    requested: request.requested().map(str::to_string),
                    all_chains: all_chains.clone(),
                }
            })?,
        };

        for warning in &warnings {
            log::warn!("{}", warning);
        }

        let residues: Vec<i32> = chosen.bound_residues().iter().copied().collect();
        let (min_residue, max_residue) = chosen.bounds().unwrap_or((0, 0));

        log::info!(
            "Target chain {} ({}, {} residues, {}..{}) of [{}]",
            chosen.id,
            chosen.chain_type(),
            residues.len(),
            min_residue,
            max_residue,
            all_chains.join(", ")
        );

        Ok(StructureInfo {
            actual_chain: chosen.id.clone(),
            requested_chain: request.requested().map(str::to_string),
            min_residue,
            max_residue,
            residues,
            chain_type: chosen.chain_type(),
            all_chains,
            chains: chains.clone(),
            warnings,
        })
    }
}

/// Protein chain with the most alpha carbons; the earliest chain wins ties
fn best_protein_chain(chains: &[ChainDescriptor]) -> Option<&ChainDescriptor> {
    chains
        .iter()
        .filter(|c| c.is_protein)
        .rev()
        .max_by_key(|c| c.ca_count)
}

/// Analyze with default thresholds
pub fn analyze(structure: &Structure, request: &ChainRequest) -> DomainViewResult<StructureInfo> {
    StructureAnalyzer::default().analyze(structure, request)
}
