//! Three-phase domain styling
//!
//! 1. hide every atom
//! 2. show the target chain as a translucent backdrop
//! 3. paint each domain over it, in caller order (later domains win overlaps)
//!
//! Viewer failures in phases 1 and 2 abort the pass. Domains that cannot be
//! placed are recorded as misses and never abort it.

use domview_color::{Color, DomainPalette, NamedColors};
use domview_mol::Structure;
use domview_scene::StructureViewer;
use domview_select::{AtomSelector, SelectionResult};
use domview_settings::{DomainViewConfig, Representation, StyleDelta};

use crate::analyzer::{ChainRequest, StructureAnalyzer, StructureInfo};
use crate::domain::DomainDescriptor;
use crate::error::{DomainViewError, DomainViewResult};
use crate::mapper::map_range;
use crate::report::{DomainMiss, DomainOutcome, OutcomeStatus, StylingReport};

/// Styles domains onto a viewer according to a configuration
#[derive(Debug, Clone)]
pub struct DomainStyler {
    named: NamedColors,
    palette: DomainPalette,
    base: StyleDelta,
    domain_opacity: f32,
    representation: Representation,
}

impl DomainStyler {
    pub fn new(config: &DomainViewConfig) -> DomainViewResult<Self> {
        config.validate()?;
        Ok(DomainStyler {
            named: NamedColors::new(),
            palette: config.palette()?,
            base: StyleDelta::show(config.base_color()?, config.base_opacity)
                .with_representation(config.representation),
            domain_opacity: config.domain_opacity,
            representation: config.representation,
        })
    }

    fn ensure_available<V: StructureViewer + ?Sized>(viewer: &V) -> DomainViewResult<()> {
        if viewer.is_available() {
            Ok(())
        } else {
            Err(DomainViewError::ViewerUnavailable(
                "viewer is not accepting calls".to_string(),
            ))
        }
    }

    /// Gray backdrop over the whole target chain
    fn style_base<V: StructureViewer + ?Sized>(&self, viewer: &mut V, chain: &str) -> DomainViewResult<usize> {
        let selection = viewer.select(&AtomSelector::chain(chain))?;
        let atoms = viewer.apply_style(&selection, &self.base)?;
        log::debug!("Backdrop: {} atoms of chain {}", atoms, chain);
        Ok(atoms)
    }

    /// Domain color, or the palette entry for its position
    fn domain_color(&self, domain: &DomainDescriptor, index: usize) -> (Color, bool) {
        match domain.color.as_deref().map(|spec| self.named.resolve(spec)) {
            Some(Ok(color)) => (color, false),
            Some(Err(err)) => {
                log::warn!("Domain {}: {}; using palette color", domain.id, err);
                (self.palette.color_for(index), true)
            }
            None => (self.palette.color_for(index), true),
        }
    }

    /// Atoms covered by the domain's range, one selector per chain
    fn select_range<V: StructureViewer + ?Sized>(
        viewer: &V,
        selectors: &[AtomSelector],
    ) -> DomainViewResult<SelectionResult> {
        let mut combined = SelectionResult::new(viewer.structure()?.atom_count());
        for selector in selectors {
            let selection = viewer.select(selector)?;
            combined
                .union_with(&selection)
                .map_err(|e| DomainViewError::Viewer(e.into()))?;
        }
        Ok(combined)
    }

    /// Phase 3 for one domain; returns the outcome and the atoms styled
    fn style_domain<V: StructureViewer + ?Sized>(
        &self,
        viewer: &mut V,
        info: &StructureInfo,
        domain: &DomainDescriptor,
        index: usize,
    ) -> DomainViewResult<(DomainOutcome, Option<SelectionResult>)> {
        let chain = domain.chain.clone().unwrap_or_else(|| info.actual_chain.clone());
        let mut outcome = DomainOutcome {
            index,
            id: domain.id.clone(),
            name: domain.display_name().to_string(),
            chain,
            mapped: None,
            status: OutcomeStatus::Missed {
                miss: DomainMiss::Unmappable,
            },
        };

        let Some(mapped) = map_range(domain, info) else {
            log::info!("Domain {}: unmappable range {}-{}", domain.id, domain.start, domain.end);
            return Ok((outcome, None));
        };
        outcome.mapped = Some(mapped.clone());

        let range = match mapped.to_structure_range() {
            Ok(range) => range,
            Err(err) => {
                log::warn!("Domain {}: {}", domain.id, err);
                outcome.status = OutcomeStatus::Missed {
                    miss: DomainMiss::InvalidRange {
                        range: mapped.range.clone(),
                        reason: err.to_string(),
                    },
                };
                return Ok((outcome, None));
            }
        };

        let selectors = range.to_selectors(&outcome.chain);
        let selection = Self::select_range(viewer, &selectors)?;
        if selection.is_empty() {
            let description = selectors
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(" or ");
            log::info!("Domain {}: no atoms match {}", domain.id, description);
            outcome.status = OutcomeStatus::Missed {
                miss: DomainMiss::EmptySelection {
                    selection: description,
                },
            };
            return Ok((outcome, None));
        }

        let (color, fallback_color) = self.domain_color(domain, index);
        let delta = StyleDelta::show(color, self.domain_opacity).with_representation(self.representation);
        let atoms = viewer.apply_style(&selection, &delta)?;
        log::debug!("Domain {}: {} -> {} atoms", domain.id, mapped, atoms);

        outcome.status = OutcomeStatus::Styled {
            atoms,
            color: color.to_hex(),
            fallback_color,
        };
        Ok((outcome, Some(selection)))
    }

    /// Run all three phases over `domains`
    pub fn apply_styling<V: StructureViewer + ?Sized>(
        &self,
        viewer: &mut V,
        info: &StructureInfo,
        domains: &[DomainDescriptor],
    ) -> DomainViewResult<StylingReport> {
        Self::ensure_available(viewer)?;
        let structure_name = viewer.structure()?.name.clone();

        viewer.hide_all()?;
        let base_atoms = self.style_base(viewer, &info.actual_chain)?;

        let mut report = StylingReport::new(&structure_name, &info.actual_chain, base_atoms);
        for (index, domain) in domains.iter().enumerate() {
            let (outcome, _) = self.style_domain(viewer, info, domain, index)?;
            report.record(outcome);
        }

        log::info!("{}: {}", structure_name, report.summary());
        Ok(report)
    }

    /// Backdrop plus one domain, then zoom onto that domain
    ///
    /// Other chains keep their current style. A domain that cannot be placed
    /// is reported as a miss and leaves the camera where it was.
    pub fn highlight_domain<V: StructureViewer + ?Sized>(
        &self,
        viewer: &mut V,
        info: &StructureInfo,
        domains: &[DomainDescriptor],
        index: usize,
    ) -> DomainViewResult<DomainOutcome> {
        let domain = domains.get(index).ok_or(DomainViewError::DomainIndexOutOfRange {
            index,
            count: domains.len(),
        })?;
        Self::ensure_available(viewer)?;

        self.style_base(viewer, &info.actual_chain)?;
        let (outcome, selection) = self.style_domain(viewer, info, domain, index)?;
        if let Some(selection) = selection {
            viewer.zoom_to(&selection)?;
            log::info!("Highlighted domain {}", outcome.name);
        }
        Ok(outcome)
    }
}

/// Style `domains` onto `viewer` with `config`
pub fn apply_styling<V: StructureViewer + ?Sized>(
    viewer: &mut V,
    info: &StructureInfo,
    domains: &[DomainDescriptor],
    config: &DomainViewConfig,
) -> DomainViewResult<StylingReport> {
    DomainStyler::new(config)?.apply_styling(viewer, info, domains)
}

/// Highlight the domain at `index` and focus the camera on it
pub fn highlight_domain<V: StructureViewer + ?Sized>(
    viewer: &mut V,
    info: &StructureInfo,
    domains: &[DomainDescriptor],
    index: usize,
    config: &DomainViewConfig,
) -> DomainViewResult<DomainOutcome> {
    DomainStyler::new(config)?.highlight_domain(viewer, info, domains, index)
}

/// Analyze the loaded structure, then style every domain
pub fn render_domains<V: StructureViewer + ?Sized>(
    viewer: &mut V,
    domains: &[DomainDescriptor],
    request: &ChainRequest,
    config: &DomainViewConfig,
) -> DomainViewResult<(StructureInfo, StylingReport)> {
    if !viewer.is_available() {
        return Err(DomainViewError::ViewerUnavailable(
            "viewer is not accepting calls".to_string(),
        ));
    }
    let styler = DomainStyler::new(config)?;
    let info = analyze_loaded(viewer.structure()?, request, config)?;
    let report = styler.apply_styling(viewer, &info, domains)?;
    Ok((info, report))
}

fn analyze_loaded(
    structure: &Structure,
    request: &ChainRequest,
    config: &DomainViewConfig,
) -> DomainViewResult<StructureInfo> {
    StructureAnalyzer::from_config(config).analyze(structure, request)
}
