//! Color handling for domain views
//!
//! - RGB colors with hex parsing
//! - a registry of named colors
//! - the cyclic fallback palette used when a domain has no usable color

mod color;
mod error;
mod named;
mod palette;

pub use color::Color;
pub use error::{ColorError, ColorResult};
pub use named::{parse_color, NamedColors};
pub use palette::DomainPalette;
