//! Styles and configuration for domain views
//!
//! [`StyleOptions`] is the complete visual state of one atom and is only ever
//! replaced, never patched: a [`StyleDelta`] describes a change and
//! [`StyleOptions::apply`] returns the updated value.
//!
//! ```rust
//! use domview_color::Color;
//! use domview_settings::{StyleDelta, StyleOptions};
//!
//! let base = StyleOptions::default();
//! let dimmed = base.apply(&StyleDelta::show(Color::GRAY, 0.4));
//! assert_eq!(dimmed.opacity, 0.4);
//! assert_eq!(base.opacity, 1.0);
//! ```

mod config;
mod error;
mod representation;
mod style;

pub use config::DomainViewConfig;
pub use error::{SettingError, SettingResult};
pub use representation::Representation;
pub use style::{StyleDelta, StyleOptions};
