//! Named color registry and color-spec parsing

use ahash::AHashMap;

use crate::color::Color;
use crate::error::{ColorError, ColorResult};

/// Registry of named colors
#[derive(Debug, Clone)]
pub struct NamedColors {
    colors: Vec<Color>,
    by_name: AHashMap<String, u32>,
}

impl NamedColors {
    /// Registry preloaded with the standard color names
    pub fn new() -> Self {
        let mut registry = NamedColors {
            colors: Vec::with_capacity(64),
            by_name: AHashMap::new(),
        };
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        self.register("white", Color::new(1.0, 1.0, 1.0));
        self.register("black", Color::new(0.0, 0.0, 0.0));
        self.register("red", Color::new(1.0, 0.0, 0.0));
        self.register("green", Color::new(0.0, 1.0, 0.0));
        self.register("blue", Color::new(0.0, 0.0, 1.0));
        self.register("yellow", Color::new(1.0, 1.0, 0.0));
        self.register("cyan", Color::new(0.0, 1.0, 1.0));
        self.register("magenta", Color::new(1.0, 0.0, 1.0));

        self.register("gray", Color::new(0.5, 0.5, 0.5));
        self.register("grey", Color::new(0.5, 0.5, 0.5));
        self.register("lightgray", Color::new(0.75, 0.75, 0.75));
        self.register("lightgrey", Color::new(0.75, 0.75, 0.75));
        self.register("darkgray", Color::new(0.25, 0.25, 0.25));
        self.register("darkgrey", Color::new(0.25, 0.25, 0.25));

        self.register("orange", Color::new(1.0, 0.5, 0.0));
        self.register("pink", Color::new(1.0, 0.65, 0.85));
        self.register("purple", Color::new(0.75, 0.0, 0.75));
        self.register("brown", Color::new(0.65, 0.32, 0.17));
        self.register("salmon", Color::new(1.0, 0.6, 0.6));
        self.register("lime", Color::new(0.5, 1.0, 0.5));
        self.register("slate", Color::new(0.5, 0.5, 1.0));
        self.register("hotpink", Color::new(1.0, 0.0, 0.5));
        self.register("teal", Color::new(0.0, 0.75, 0.75));
        self.register("olive", Color::new(0.77, 0.7, 0.0));
        self.register("marine", Color::new(0.0, 0.5, 1.0));
        self.register("forest", Color::new(0.2, 0.6, 0.2));
        self.register("firebrick", Color::new(0.7, 0.13, 0.13));
        self.register("wheat", Color::new(0.99, 0.82, 0.65));
        self.register("violet", Color::new(1.0, 0.5, 1.0));
        self.register("lightblue", Color::new(0.75, 0.75, 1.0));
        self.register("lightgreen", Color::new(0.75, 1.0, 0.75));
        self.register("palecyan", Color::new(0.8, 1.0, 1.0));
        self.register("paleyellow", Color::new(1.0, 1.0, 0.8));
        self.register("deepteal", Color::new(0.1, 0.6, 0.6));
        self.register("deeppurple", Color::new(0.6, 0.1, 0.6));
    }

    /// Register a named color, replacing any previous color of that name
    pub fn register(&mut self, name: &str, color: Color) -> u32 {
        let key = name.to_lowercase();
        if let Some(&idx) = self.by_name.get(&key) {
            self.colors[idx as usize] = color;
            return idx;
        }
        let index = self.colors.len() as u32;
        self.colors.push(color);
        self.by_name.insert(key, index);
        index
    }

    /// Case-insensitive lookup
    pub fn get_by_name(&self, name: &str) -> Option<(u32, Color)> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| (idx, self.colors[idx as usize]))
    }

    pub fn get_by_index(&self, index: u32) -> Option<Color> {
        self.colors.get(index as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Resolve a color spec: `#rrggbb`, `rrggbb`, `0xrrggbb` or a registered name
    pub fn resolve(&self, spec: &str) -> ColorResult<Color> {
        let spec = spec.trim();
        if let Some((_, color)) = self.get_by_name(spec) {
            return Ok(color);
        }
        Color::from_hex(spec).ok_or_else(|| ColorError::NotFound(spec.to_string()))
    }
}

impl Default for NamedColors {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a color spec against the default registry
pub fn parse_color(spec: &str) -> ColorResult<Color> {
    NamedColors::new().resolve(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        let colors = NamedColors::new();

        let (_, red) = colors.get_by_name("red").unwrap();
        assert_eq!(red, Color::new(1.0, 0.0, 0.0));

        let (_, red2) = colors.get_by_name("RED").unwrap();
        assert_eq!(red, red2);
        assert_eq!(colors.get_by_name("gray").unwrap().1, Color::GRAY);
    }

    #[test]
    fn test_register_replaces() {
        let mut colors = NamedColors::new();
        let before = colors.len();
        let idx = colors.register("Domain1", Color::new(0.1, 0.2, 0.3));
        assert_eq!(colors.len(), before + 1);
        assert_eq!(colors.register("domain1", Color::BLACK), idx);
        assert_eq!(colors.len(), before + 1);
        assert_eq!(colors.get_by_index(idx), Some(Color::BLACK));
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("gray").unwrap(), Color::GRAY);
        assert_eq!(parse_color("#ff0000").unwrap(), Color::new(1.0, 0.0, 0.0));
        assert_eq!(parse_color("0x0000FF").unwrap(), Color::new(0.0, 0.0, 1.0));
        assert_eq!(parse_color("00ff00").unwrap(), Color::new(0.0, 1.0, 0.0));
        assert_eq!(
            parse_color("not-a-color"),
            Err(ColorError::NotFound("not-a-color".to_string()))
        );
    }
}
