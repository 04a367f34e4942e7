//! Run configuration for domain styling
//!
//! Loaded from JSON; every field is optional and falls back to its default.

use std::path::Path;

use domview_color::{Color, DomainPalette, NamedColors};
use serde::{Deserialize, Serialize};

use crate::error::{SettingError, SettingResult};
use crate::representation::Representation;

fn default_ca_threshold() -> usize {
    10
}

fn default_p_threshold() -> usize {
    5
}

fn default_base_color() -> String {
    "gray".to_string()
}

fn default_base_opacity() -> f32 {
    0.4
}

fn default_domain_opacity() -> f32 {
    1.0
}

fn default_palette() -> Vec<String> {
    DomainPalette::default_specs()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainViewConfig {
    /// A chain is protein when its alpha-carbon count exceeds this
    #[serde(default = "default_ca_threshold")]
    pub protein_ca_threshold: usize,
    /// A chain is nucleic acid when its phosphorus count exceeds this
    #[serde(default = "default_p_threshold")]
    pub nucleic_p_threshold: usize,
    #[serde(default = "default_base_color")]
    pub base_color: String,
    #[serde(default = "default_base_opacity")]
    pub base_opacity: f32,
    #[serde(default = "default_domain_opacity")]
    pub domain_opacity: f32,
    pub representation: Representation,
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    /// Leave water residues out of chain residue bounds
    #[serde(default = "default_true")]
    pub ignore_water_in_bounds: bool,
}

impl Default for DomainViewConfig {
    fn default() -> Self {
        DomainViewConfig {
            protein_ca_threshold: default_ca_threshold(),
            nucleic_p_threshold: default_p_threshold(),
            base_color: default_base_color(),
            base_opacity: default_base_opacity(),
            domain_opacity: default_domain_opacity(),
            representation: Representation::default(),
            palette: default_palette(),
            ignore_water_in_bounds: true,
        }
    }
}

impl DomainViewConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> SettingResult<Self> {
        let config: DomainViewConfig =
            serde_json::from_str(json).map_err(|e| SettingError::Deserialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> SettingResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| SettingError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        log::debug!("Loaded configuration from {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> SettingResult<()> {
        for (name, value) in [
            ("base_opacity", self.base_opacity),
            ("domain_opacity", self.domain_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingError::invalid(
                    name,
                    format!("{} is outside [0, 1]", value),
                ));
            }
        }
        if self.palette.is_empty() {
            return Err(SettingError::invalid("palette", "palette is empty"));
        }
        self.base_color()?;
        self.palette()?;
        Ok(())
    }

    /// Resolved backdrop color for the target chain
    pub fn base_color(&self) -> SettingResult<Color> {
        NamedColors::new()
            .resolve(&self.base_color)
            .map_err(|e| SettingError::invalid("base_color", e.to_string()))
    }

    /// Resolved fallback palette
    pub fn palette(&self) -> SettingResult<DomainPalette> {
        DomainPalette::from_specs(&self.palette, &NamedColors::new())
            .map_err(|e| SettingError::invalid("palette", e.to_string()))
    }
}
