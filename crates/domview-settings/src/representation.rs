//! Molecular representations a style can request

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    #[default]
    Cartoon,
    Ribbon,
    Lines,
    Sticks,
    Spheres,
    Surface,
}

impl Representation {
    /// Parse from a name or alias (case-insensitive)
    pub fn from_str_alias(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cartoon" | "cartoons" => Some(Representation::Cartoon),
            "ribbon" | "ribbons" | "trace" => Some(Representation::Ribbon),
            "lines" | "line" => Some(Representation::Lines),
            "sticks" | "stick" => Some(Representation::Sticks),
            "spheres" | "sphere" => Some(Representation::Spheres),
            "surface" => Some(Representation::Surface),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Representation::Cartoon => "cartoon",
            Representation::Ribbon => "ribbon",
            Representation::Lines => "lines",
            Representation::Sticks => "sticks",
            Representation::Spheres => "spheres",
            Representation::Surface => "surface",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
