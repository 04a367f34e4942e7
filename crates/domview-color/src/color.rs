//! Core color type

use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGB color with values in the range [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b }
    }

    /// Create a color from RGB bytes (0-255)
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a color from six hex digits, with an optional `#` or `0x` prefix
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let digits = hex
            .strip_prefix('#')
            .or_else(|| hex.strip_prefix("0x"))
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;

        Some(Self::from_rgb8(r, g, b))
    }

    /// Convert to RGB bytes (0-255)
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// `#rrggbb`
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_rgba(&self, alpha: f32) -> [f32; 4] {
        [self.r, self.g, self.b, alpha]
    }

    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const GRAY: Color = Color::new(0.5, 0.5, 0.5);
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[f32; 3]> for Color {
    fn from(arr: [f32; 3]) -> Self {
        Color::new(arr[0], arr[1], arr[2])
    }
}

impl From<Color> for [f32; 3] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_prefixes() {
        let expected = Color::from_rgb8(0xff, 0x80, 0x00);
        assert_eq!(Color::from_hex("#ff8000"), Some(expected));
        assert_eq!(Color::from_hex("FF8000"), Some(expected));
        assert_eq!(Color::from_hex("0xff8000"), Some(expected));
        assert_eq!(Color::from_hex(" #ff8000 "), Some(expected));
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex("#ff80001"), None);
        assert_eq!(Color::from_hex("+1+2+3"), None);
    }

    #[test]
    fn test_hex_display() {
        assert_eq!(Color::from_rgb8(18, 52, 86).to_string(), "#123456");
        assert_eq!(Color::GRAY.to_rgb8(), [128, 128, 128]);
    }
}
