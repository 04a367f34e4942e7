//! Chemical element definitions
//!
//! Provides the `Element` enum for the elements that show up in deposited
//! biomolecular structures, with case-insensitive symbol lookup.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Chemical element
///
/// Discriminants are atomic numbers. Anything not listed here parses as
/// [`Element::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Element {
    /// Unrecognized element symbol
    #[default]
    Unknown = 0,
    /// Hydrogen
    Hydrogen = 1,
    /// Carbon
    Carbon = 6,
    /// Nitrogen
    Nitrogen = 7,
    /// Oxygen
    Oxygen = 8,
    /// Fluorine
    Fluorine = 9,
    /// Sodium
    Sodium = 11,
    /// Magnesium
    Magnesium = 12,
    /// Phosphorus
    Phosphorus = 15,
    /// Sulfur
    Sulfur = 16,
    /// Chlorine
    Chlorine = 17,
    /// Potassium
    Potassium = 19,
    /// Calcium
    Calcium = 20,
    /// Manganese
    Manganese = 25,
    /// Iron
    Iron = 26,
    /// Cobalt
    Cobalt = 27,
    /// Nickel
    Nickel = 28,
    /// Copper
    Copper = 29,
    /// Zinc
    Zinc = 30,
    /// Selenium
    Selenium = 34,
    /// Bromine
    Bromine = 35,
    /// Cadmium
    Cadmium = 48,
    /// Iodine
    Iodine = 53,
    /// Mercury
    Mercury = 80,
}

const ELEMENT_TABLE: &[(Element, &str)] = &[
    (Element::Unknown, "X"),
    (Element::Hydrogen, "H"),
    (Element::Carbon, "C"),
    (Element::Nitrogen, "N"),
    (Element::Oxygen, "O"),
    (Element::Fluorine, "F"),
    (Element::Sodium, "Na"),
    (Element::Magnesium, "Mg"),
    (Element::Phosphorus, "P"),
    (Element::Sulfur, "S"),
    (Element::Chlorine, "Cl"),
    (Element::Potassium, "K"),
    (Element::Calcium, "Ca"),
    (Element::Manganese, "Mn"),
    (Element::Iron, "Fe"),
    (Element::Cobalt, "Co"),
    (Element::Nickel, "Ni"),
    (Element::Copper, "Cu"),
    (Element::Zinc, "Zn"),
    (Element::Selenium, "Se"),
    (Element::Bromine, "Br"),
    (Element::Cadmium, "Cd"),
    (Element::Iodine, "I"),
    (Element::Mercury, "Hg"),
];

static SYMBOL_MAP: OnceLock<AHashMap<String, Element>> = OnceLock::new();

fn symbol_map() -> &'static AHashMap<String, Element> {
    SYMBOL_MAP.get_or_init(|| {
        let mut map = AHashMap::with_capacity(ELEMENT_TABLE.len() + 2);
        for &(element, symbol) in ELEMENT_TABLE {
            if element != Element::Unknown {
                map.insert(symbol.to_ascii_uppercase(), element);
            }
        }
        // Deuterium
        map.insert("D".to_string(), Element::Hydrogen);
        map
    })
}

impl Element {
    /// Look up an element by symbol (case-insensitive, surrounding whitespace ignored)
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return None;
        }
        symbol_map().get(&symbol.to_ascii_uppercase()).copied()
    }

    /// Element symbol (e.g. "C", "Zn")
    pub fn symbol(&self) -> &'static str {
        ELEMENT_TABLE
            .iter()
            .find(|(e, _)| e == self)
            .map_or("X", |&(_, symbol)| symbol)
    }

    #[inline]
    pub fn is_carbon(&self) -> bool {
        *self == Element::Carbon
    }

    #[inline]
    pub fn is_phosphorus(&self) -> bool {
        *self == Element::Phosphorus
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol_case_insensitive() {
        assert_eq!(Element::from_symbol("C"), Some(Element::Carbon));
        assert_eq!(Element::from_symbol("zn"), Some(Element::Zinc));
        assert_eq!(Element::from_symbol(" CA "), Some(Element::Calcium));
        assert_eq!(Element::from_symbol("D"), Some(Element::Hydrogen));
        assert_eq!(Element::from_symbol("Xx"), None);
        assert_eq!(Element::from_symbol(""), None);
    }

    #[test]
    fn test_symbol() {
        assert_eq!(Element::Phosphorus.symbol(), "P");
        assert_eq!(Element::Selenium.to_string(), "Se");
        assert_eq!(Element::Unknown.symbol(), "X");
        assert!(Element::Phosphorus.is_phosphorus());
        assert!(!Element::Calcium.is_carbon());
    }
}
