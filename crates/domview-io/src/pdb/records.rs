//! PDB ATOM/HETATM record and element inference

use domview_mol::{is_amino_acid, is_nucleotide, Element};

/// Parsed ATOM or HETATM record
#[derive(Debug, Clone)]
pub struct AtomRecord {
    /// Record type: true for HETATM, false for ATOM
    pub hetatm: bool,
    /// Atom serial number
    pub serial: i32,
    /// Atom name as it appears in columns 13-16, alignment preserved
    pub raw_name: String,
    /// Alternate location indicator
    pub alt_loc: char,
    /// Residue name
    pub resn: String,
    /// Chain identifier
    pub chain: String,
    /// Residue sequence number
    pub resv: i32,
    /// Insertion code
    pub icode: char,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub occupancy: f32,
    /// Temperature factor (B-factor)
    pub b_factor: f32,
    /// Segment identifier
    pub segi: String,
    /// Element symbol (columns 77-78), possibly blank
    pub element: String,
}

impl Default for AtomRecord {
    fn default() -> Self {
        AtomRecord {
            hetatm: false,
            serial: 0,
            raw_name: String::new(),
            alt_loc: ' ',
            resn: String::new(),
            chain: String::new(),
            resv: 0,
            icode: ' ',
            x: 0.0,
            y: 0.0,
            z: 0.0,
            occupancy: 1.0,
            b_factor: 0.0,
            segi: String::new(),
            element: String::new(),
        }
    }
}

impl AtomRecord {
    /// Atom name without alignment padding
    pub fn name(&self) -> &str {
        self.raw_name.trim()
    }

    /// Element from the element column, inferred from the atom name when blank
    pub fn get_element(&self) -> Element {
        if let Some(elem) = Element::from_symbol(&self.element) {
            return elem;
        }
        infer_element_from_name(&self.raw_name, &self.resn)
    }
}

/// Infer the element from a column-aligned PDB atom name
///
/// One-letter elements are right-aligned in the first two columns (`" CA "`
/// is an alpha carbon) while two-letter elements start in column 13
/// (`"CA  "` in residue `CA` is calcium). Left-aligned names inside polymer
/// residues are hydrogens like `HG21`, so only the first letter counts there.
pub fn infer_element_from_name(raw_name: &str, resn: &str) -> Element {
    if raw_name.trim().is_empty() {
        return Element::Unknown;
    }

    let chars: Vec<char> = raw_name.chars().collect();
    let right_aligned = chars[0] == ' ' || chars[0].is_ascii_digit();

    if !right_aligned && chars.len() > 1 && chars[1].is_ascii_alphabetic() {
        let polymer = is_amino_acid(resn) || is_nucleotide(resn);
        if !polymer {
            let two: String = chars[..2].iter().collect();
            if let Some(elem) = Element::from_symbol(&two) {
                return elem;
            }
        }
    }

    chars
        .iter()
        .find(|c| c.is_ascii_alphabetic())
        .and_then(|c| Element::from_symbol(&c.to_string()))
        .unwrap_or(Element::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_element() {
        assert_eq!(infer_element_from_name(" CA ", "ALA"), Element::Carbon);
        assert_eq!(infer_element_from_name("CA  ", "CA"), Element::Calcium);
        assert_eq!(infer_element_from_name("FE  ", "HEM"), Element::Iron);
        assert_eq!(infer_element_from_name(" N  ", "GLY"), Element::Nitrogen);
        assert_eq!(infer_element_from_name("1HB ", "ALA"), Element::Hydrogen);
        assert_eq!(infer_element_from_name("HG21", "THR"), Element::Hydrogen);
        assert_eq!(infer_element_from_name(" P  ", "DG"), Element::Phosphorus);
        assert_eq!(infer_element_from_name("    ", "ALA"), Element::Unknown);
    }

    #[test]
    fn test_element_column_wins() {
        let record = AtomRecord {
            raw_name: "CA  ".to_string(),
            resn: "ALA".to_string(),
            element: "CA".to_string(),
            ..Default::default()
        };
        assert_eq!(record.get_element(), Element::Calcium);
        assert_eq!(record.name(), "CA");
    }
}
