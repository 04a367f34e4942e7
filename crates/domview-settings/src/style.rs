//! Per-atom visual style as an immutable value
//!
//! A style is never patched in place. Callers describe a change as a
//! [`StyleDelta`] and obtain a new [`StyleOptions`] from
//! [`StyleOptions::apply`], which leaves the original untouched.

use domview_color::Color;
use serde::{Deserialize, Serialize};

use crate::representation::Representation;

/// Complete visual state of one atom
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleOptions {
    pub visible: bool,
    pub color: Color,
    /// 0.0 (transparent) to 1.0 (opaque)
    pub opacity: f32,
    pub representation: Representation,
}

impl Default for StyleOptions {
    fn default() -> Self {
        StyleOptions {
            visible: true,
            color: Color::WHITE,
            opacity: 1.0,
            representation: Representation::Cartoon,
        }
    }
}

impl StyleOptions {
    /// Fully hidden style
    pub fn hidden() -> Self {
        StyleOptions {
            visible: false,
            opacity: 0.0,
            ..StyleOptions::default()
        }
    }

    /// New options with every field set in `delta` replaced
    ///
    /// Opacity is clamped to [0, 1].
    #[must_use]
    pub fn apply(&self, delta: &StyleDelta) -> StyleOptions {
        StyleOptions {
            visible: delta.visible.unwrap_or(self.visible),
            color: delta.color.unwrap_or(self.color),
            opacity: delta.opacity.map_or(self.opacity, |o| o.clamp(0.0, 1.0)),
            representation: delta.representation.unwrap_or(self.representation),
        }
    }

    /// Visible with non-zero opacity
    pub fn is_shown(&self) -> bool {
        self.visible && self.opacity > 0.0
    }
}

/// A partial style change; unset fields keep their current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleDelta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representation: Option<Representation>,
}

impl StyleDelta {
    pub fn new() -> Self {
        StyleDelta::default()
    }

    /// Delta that hides atoms
    pub fn hide() -> Self {
        StyleDelta {
            visible: Some(false),
            opacity: Some(0.0),
            ..StyleDelta::default()
        }
    }

    /// Delta that shows atoms in `color` at `opacity`
    pub fn show(color: Color, opacity: f32) -> Self {
        StyleDelta {
            visible: Some(true),
            color: Some(color),
            opacity: Some(opacity),
            representation: None,
        }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = Some(representation);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == StyleDelta::default()
    }

    /// Combine two deltas; fields set in `later` win
    #[must_use]
    pub fn then(&self, later: &StyleDelta) -> StyleDelta {
        StyleDelta {
            visible: later.visible.or(self.visible),
            color: later.color.or(self.color),
            opacity: later.opacity.or(self.opacity),
            representation: later.representation.or(self.representation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_is_pure() {
        let base = StyleOptions::default();
        let delta = StyleDelta::new().with_color(Color::GRAY).with_opacity(0.4);
        let styled = base.apply(&delta);

        assert_eq!(base, StyleOptions::default());
        assert_eq!(styled.color, Color::GRAY);
        assert_eq!(styled.opacity, 0.4);
        assert_eq!(styled.representation, base.representation);
        assert!(styled.visible);
    }

    #[test]
    fn test_empty_delta_is_identity() {
        let base = StyleOptions::hidden();
        assert!(StyleDelta::default().is_empty());
        assert_eq!(base.apply(&StyleDelta::default()), base);
    }

    #[test]
    fn test_opacity_is_clamped() {
        let styled = StyleOptions::default().apply(&StyleDelta::new().with_opacity(3.0));
        assert_eq!(styled.opacity, 1.0);
        let styled = styled.apply(&StyleDelta::new().with_opacity(-1.0));
        assert_eq!(styled.opacity, 0.0);
        assert!(!styled.is_shown());
    }

    #[test]
    fn test_then_matches_sequential_apply() {
        let first = StyleDelta::show(Color::GRAY, 0.4);
        let second = StyleDelta::new()
            .with_color(Color::BLACK)
            .with_representation(Representation::Sticks);
        let base = StyleOptions::hidden();

        assert_eq!(
            base.apply(&first.then(&second)),
            base.apply(&first).apply(&second)
        );
        assert_eq!(base.apply(&StyleDelta::hide()), base);
    }

    #[test]
    fn test_delta_serde_skips_unset() {
        let delta = StyleDelta::new().with_opacity(0.5);
        let json = serde_json::to_string(&delta).unwrap();
        assert_eq!(json, r#"{"opacity":0.5}"#);
        let back: StyleDelta = serde_json::from_str(&json).unwrap();
        assert_eq!(back, delta);
    }
}
