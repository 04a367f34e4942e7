//! Cyclic fallback palette for domains that carry no usable color

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ColorError, ColorResult};
use crate::named::NamedColors;

/// Ordered list of colors, indexed cyclically by domain position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainPalette {
    colors: Vec<Color>,
}

impl DomainPalette {
    /// Default palette: twelve well-separated hues
    const DEFAULT: [Color; 12] = [
        Color::new(0.894, 0.102, 0.110),
        Color::new(0.216, 0.494, 0.722),
        Color::new(0.302, 0.686, 0.290),
        Color::new(0.596, 0.306, 0.639),
        Color::new(1.000, 0.498, 0.000),
        Color::new(1.000, 1.000, 0.200),
        Color::new(0.651, 0.337, 0.157),
        Color::new(0.969, 0.506, 0.749),
        Color::new(0.106, 0.620, 0.467),
        Color::new(0.851, 0.373, 0.008),
        Color::new(0.459, 0.439, 0.702),
        Color::new(0.400, 0.651, 0.118),
    ];

    pub fn new(colors: Vec<Color>) -> ColorResult<Self> {
        if colors.is_empty() {
            return Err(ColorError::EmptyPalette);
        }
        Ok(DomainPalette { colors })
    }

    /// Build a palette from color specs resolved against `named`
    pub fn from_specs<S: AsRef<str>>(specs: &[S], named: &NamedColors) -> ColorResult<Self> {
        let colors = specs
            .iter()
            .map(|s| named.resolve(s.as_ref()))
            .collect::<ColorResult<Vec<_>>>()?;
        Self::new(colors)
    }

    /// Color for the domain at `index`, wrapping around
    pub fn color_for(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Hex strings of the default palette
    pub fn default_specs() -> Vec<String> {
        Self::DEFAULT.iter().map(Color::to_hex).collect()
    }
}

impl Default for DomainPalette {
    fn default() -> Self {
        DomainPalette {
            colors: Self::DEFAULT.to_vec(),
        }
    }
}
