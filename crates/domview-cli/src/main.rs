//! `domview` command-line entry point
//!
//! ```bash
//! domview 1abc.cif.gz --domains domains.json
//! domview 1abc.pdb --domains domains.json --chain B --highlight 0 --json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use domview_domains::{
    highlight_domain, render_domains, ChainRequest, DomainDescriptor, DomainOutcome,
    StructureInfo, StylingReport,
};
use domview_io::{read_structure_with, CifOptions, Numbering};
use domview_scene::{LoadTracker, ViewerSession};
use domview_settings::DomainViewConfig;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "domview")]
#[command(about = "Project classified protein domains onto a 3D structure")]
#[command(version)]
struct Cli {
    /// Structure file (.pdb, .ent, .cif, .mmcif, optionally .gz)
    structure: PathBuf,

    /// JSON array of domain descriptors
    #[arg(short, long)]
    domains: PathBuf,

    /// Chain to use whenever it exists
    #[arg(short, long, conflicts_with = "hint_chain")]
    chain: Option<String>,

    /// Chain to prefer if it exists and is protein
    #[arg(long)]
    hint_chain: Option<String>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Highlight the domain at this index after styling
    #[arg(long)]
    highlight: Option<usize>,

    /// Use mmCIF label (sequence) numbering instead of author numbering
    #[arg(long)]
    label_numbering: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn chain_request(&self) -> ChainRequest {
        match (&self.chain, &self.hint_chain) {
            (Some(chain), _) => ChainRequest::Explicit(chain.clone()),
            (None, Some(hint)) => ChainRequest::Hint(hint.clone()),
            (None, None) => ChainRequest::Auto,
        }
    }

    fn cif_options(&self) -> CifOptions {
        CifOptions {
            numbering: if self.label_numbering {
                Numbering::Label
            } else {
                Numbering::Author
            },
        }
    }
}

#[derive(Serialize)]
struct Output<'a> {
    analysis: &'a StructureInfo,
    report: &'a StylingReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    highlight: Option<&'a DomainOutcome>,
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => DomainViewConfig::from_path(path)?,
        None => DomainViewConfig::default(),
    };

    let json = std::fs::read_to_string(&cli.domains)
        .with_context(|| format!("reading {}", cli.domains.display()))?;
    let domains = DomainDescriptor::list_from_json(&json)?;

    let tracker = LoadTracker::new();
    let ticket = tracker.begin();
    let structure = read_structure_with(&cli.structure, cli.cif_options())
        .with_context(|| format!("loading {}", cli.structure.display()))?;
    log::info!("Loaded {}", structure);
    let mut viewer = tracker
        .accept(ticket, ViewerSession::new(structure))
        .context("structure load was superseded")?;

    let (info, report) = render_domains(&mut viewer, &domains, &cli.chain_request(), &config)?;
    let highlight = match cli.highlight {
        Some(index) => Some(highlight_domain(&mut viewer, &info, &domains, index, &config)?),
        None => None,
    };
    viewer.close();

    if cli.json {
        let output = Output {
            analysis: &info,
            report: &report,
            highlight: highlight.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for warning in &info.warnings {
            println!("warning: {}", warning);
        }
        print!("{}", report);
        if let Some(outcome) = &highlight {
            println!("highlight: {}", outcome);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    run(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_chain_request() {
        let cli = Cli::parse_from(["domview", "1abc.pdb", "--domains", "d.json", "--chain", "B"]);
        assert_eq!(cli.chain_request(), ChainRequest::Explicit("B".into()));

        let cli = Cli::parse_from(["domview", "1abc.pdb", "-d", "d.json", "--hint-chain", "C"]);
        assert_eq!(cli.chain_request(), ChainRequest::Hint("C".into()));

        let cli = Cli::parse_from(["domview", "1abc.cif", "-d", "d.json", "--label-numbering"]);
        assert_eq!(cli.chain_request(), ChainRequest::Auto);
        assert_eq!(cli.cif_options().numbering, Numbering::Label);

        assert!(Cli::try_parse_from([
            "domview", "x.pdb", "-d", "d.json", "--chain", "A", "--hint-chain", "B"
        ])
        .is_err());
    }
}
