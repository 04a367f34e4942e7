//! mmCIF file parser
//!
//! Builds a [`Structure`] from the `_atom_site` loop of the first data block.

use std::io::Read;

use ahash::AHashMap;
use domview_mol::{Atom, Element, Structure};
use lin_alg::f32::Vec3;

use crate::error::{IoError, IoResult};
use crate::format::{CifOptions, Numbering, StructureReader};

use super::lexer::{tokenize, Token};

const ATOM_SITE: &str = "_atom_site.";

/// mmCIF file reader
pub struct CifReader<R> {
    reader: R,
    options: CifOptions,
    name: String,
}

impl<R: Read> CifReader<R> {
    pub fn new(reader: R) -> Self {
        CifReader {
            reader,
            options: CifOptions::default(),
            name: String::new(),
        }
    }

    pub fn with_options(mut self, options: CifOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the name given to the parsed structure (defaults to the data block name)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn parse(&mut self) -> IoResult<Structure> {
        let content = crate::compress::read_to_string_maybe_gz(&mut self.reader)?;
        let tokens = tokenize(&content);
        let mut structure = parse_cif_tokens(&tokens, &self.options)?;
        if !self.name.is_empty() {
            structure.name = self.name.clone();
        }
        Ok(structure)
    }
}

impl<R: Read> StructureReader for CifReader<R> {
    fn read(&mut self) -> IoResult<Structure> {
        self.parse()
    }
}

fn parse_cif_tokens(tokens: &[Token<'_>], options: &CifOptions) -> IoResult<Structure> {
    let mut pos = 0;
    let mut block_name = "";

    while let Some(token) = tokens.get(pos) {
        pos += 1;
        if let Token::DataBlock(name) = token {
            block_name = *name;
            break;
        }
    }

    let mut title = String::new();
    let mut site: Option<AtomSite> = None;

    while let Some(token) = tokens.get(pos) {
        match token {
            Token::Loop => {
                pos += 1;
                let (tags, next) = collect_tags(tokens, pos);
                pos = next;
                if site.is_none() && tags.iter().any(|t| t.starts_with(ATOM_SITE)) {
                    let (parsed, next) = parse_atom_site_loop(tokens, pos, &tags, options)?;
                    site = Some(parsed);
                    pos = next;
                } else {
                    pos = skip_cells(tokens, pos);
                }
            }
            Token::Tag(tag) => {
                pos += 1;
                if let Some(value) = tokens.get(pos).filter(|t| t.is_cell()) {
                    if *tag == "_struct.title" {
                        title = value.value().unwrap_or("").to_string();
                    }
                    pos += 1;
                }
            }
            Token::DataBlock(_) => break,
            _ => pos += 1,
        }
    }

    let site = site.ok_or(IoError::EmptyFile)?;
    if site.atoms.is_empty() {
        return Err(IoError::EmptyFile);
    }

    let mut structure = Structure::from_parts(block_name, site.atoms, site.coords)?;
    structure.title = title;
    structure.classify_atoms();
    log::debug!("mmCIF: read {} ({:?} numbering)", structure, options.numbering);
    Ok(structure)
}

fn collect_tags<'a>(tokens: &[Token<'a>], mut pos: usize) -> (Vec<&'a str>, usize) {
    let mut tags = Vec::new();
    while let Some(Token::Tag(tag)) = tokens.get(pos) {
        tags.push(*tag);
        pos += 1;
    }
    (tags, pos)
}

fn skip_cells(tokens: &[Token<'_>], mut pos: usize) -> usize {
    while tokens.get(pos).map(Token::is_cell).unwrap_or(false) {
        pos += 1;
    }
    pos
}

struct AtomSite {
    atoms: Vec<Atom>,
    coords: Vec<Vec3>,
}

/// Column lookup for one `_atom_site` row
struct Row<'r, 'a> {
    cells: &'r [Token<'a>],
    columns: &'r AHashMap<&'a str, usize>,
}

impl<'r, 'a> Row<'r, 'a> {
    fn get(&self, item: &str) -> Option<&'a str> {
        let idx = *self.columns.get(item)?;
        self.cells.get(idx)?.value()
    }

    /// First present value among `items`
    fn first(&self, items: &[&str]) -> Option<&'a str> {
        items.iter().find_map(|item| self.get(item))
    }
}

fn parse_atom_site_loop<'a>(
    tokens: &[Token<'a>],
    start: usize,
    tags: &[&'a str],
    options: &CifOptions,
) -> IoResult<(AtomSite, usize)> {
    let columns: AHashMap<&str, usize> = tags
        .iter()
        .copied()
        .enumerate()
        .map(|(i, tag)| (tag.strip_prefix(ATOM_SITE).unwrap_or(tag), i))
        .collect();

    for required in ["Cartn_x", "Cartn_y", "Cartn_z"] {
        if !columns.contains_key(required) {
            return Err(IoError::missing_field(format!("{}{}", ATOM_SITE, required)));
        }
    }

    let (seq_items, asym_items): (&[&str], &[&str]) = match options.numbering {
        Numbering::Author => (
            &["auth_seq_id", "label_seq_id"],
            &["auth_asym_id", "label_asym_id"],
        ),
        // hetero groups have no label_seq_id, so fall back to author numbering
        Numbering::Label => (
            &["label_seq_id", "auth_seq_id"],
            &["label_asym_id", "auth_asym_id"],
        ),
    };

    let n_cols = tags.len();
    let end = skip_cells(tokens, start);
    let cells = &tokens[start..end];
    if cells.len() % n_cols != 0 {
        log::warn!(
            "mmCIF: _atom_site has {} values for {} columns, ignoring trailing partial row",
            cells.len(),
            n_cols
        );
    }

    let mut site = AtomSite {
        atoms: Vec::with_capacity(cells.len() / n_cols),
        coords: Vec::with_capacity(cells.len() / n_cols),
    };
    let mut first_model: Option<&str> = None;

    for (row_idx, chunk) in cells.chunks_exact(n_cols).enumerate() {
        let row = Row {
            cells: chunk,
            columns: &columns,
        };

        let model = row.get("pdbx_PDB_model_num").unwrap_or("1");
        match first_model {
            None => first_model = Some(model),
            Some(first) if first != model => continue,
            Some(_) => {}
        }

        let coordinate = |item: &str| -> IoResult<f32> {
            row.get(item)
                .and_then(|v| v.parse().ok())
                .ok_or_else(|| IoError::parse(0, format!("atom_site row {}: bad {}", row_idx + 1, item)))
        };
        let coord = Vec3::new(
            coordinate("Cartn_x")?,
            coordinate("Cartn_y")?,
            coordinate("Cartn_z")?,
        );

        let name = row.first(&["auth_atom_id", "label_atom_id"]).unwrap_or("X");
        let element = row
            .get("type_symbol")
            .and_then(Element::from_symbol)
            .or_else(|| name.get(..1).and_then(Element::from_symbol))
            .unwrap_or(Element::Unknown);

        let mut atom = Atom::new(name, element);
        atom.resn = row
            .first(&["auth_comp_id", "label_comp_id"])
            .unwrap_or("")
            .to_string();
        atom.resv = row
            .first(seq_items)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);
        atom.chain = row.first(asym_items).unwrap_or("").to_string();
        if options.numbering == Numbering::Author {
            atom.inscode = row
                .get("pdbx_PDB_ins_code")
                .and_then(|s| s.chars().next())
                .unwrap_or(' ');
        }
        atom.segi = row.get("label_asym_id").unwrap_or("").to_string();
        atom.alt = row
            .get("label_alt_id")
            .and_then(|s| s.chars().next())
            .unwrap_or(' ');
        atom.b_factor = row
            .get("B_iso_or_equiv")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.0);
        atom.occupancy = row
            .get("occupancy")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        atom.hetatm = row.get("group_PDB") == Some("HETATM");
        atom.id = row.get("id").and_then(|s| s.parse().ok()).unwrap_or(0);

        site.atoms.push(atom);
        site.coords.push(coord);
    }

    Ok((site, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domview_mol::AtomIndex;

    const SAMPLE: &str = r#"data_1XYZ
_struct.title 'Tiny test entry'
loop_
_atom_site.group_PDB
_atom_site.id
_atom_site.type_symbol
_atom_site.label_atom_id
_atom_site.label_comp_id
_atom_site.label_asym_id
_atom_site.label_seq_id
_atom_site.pdbx_PDB_ins_code
_atom_site.Cartn_x
_atom_site.Cartn_y
_atom_site.Cartn_z
_atom_site.auth_seq_id
_atom_site.auth_asym_id
_atom_site.pdbx_PDB_model_num
ATOM   1 N N   MET A 1 ? 1.0 2.0 3.0 159 X 1
ATOM   2 C CA  MET A 1 ? 2.0 2.0 3.0 159 X 1
HETATM 3 O O   HOH B . ? 9.0 9.0 9.0 501 X 1
ATOM   4 N N   MET A 1 ? 7.0 7.0 7.0 159 X 2
"#;

    #[test]
    fn test_author_numbering() {
        let tokens = tokenize(SAMPLE);
        let s = parse_cif_tokens(&tokens, &CifOptions::default()).unwrap();

        assert_eq!(s.name, "1XYZ");
        assert_eq!(s.title, "Tiny test entry");
        assert_eq!(s.atom_count(), 3);

        let ca = s.get_atom(AtomIndex(1)).unwrap();
        assert_eq!(ca.chain, "X");
        assert_eq!(ca.resv, 159);
        assert!(ca.is_ca());
        assert_eq!(ca.segi, "A");
    }

    #[test]
    fn test_label_numbering() {
        let tokens = tokenize(SAMPLE);
        let options = CifOptions {
            numbering: Numbering::Label,
        };
        let s = parse_cif_tokens(&tokens, &options).unwrap();

        let ca = s.get_atom(AtomIndex(1)).unwrap();
        assert_eq!(ca.chain, "A");
        assert_eq!(ca.resv, 1);

        let water = s.get_atom(AtomIndex(2)).unwrap();
        assert_eq!(water.chain, "B");
        assert_eq!(water.resv, 501);
        assert!(water.hetatm);
    }

    #[test]
    fn test_missing_coordinates_column() {
        let cif = "data_X\nloop_\n_atom_site.id\n_atom_site.Cartn_x\n1 0.0\n";
        let err = parse_cif_tokens(&tokenize(cif), &CifOptions::default()).unwrap_err();
        assert!(matches!(err, IoError::MissingField(ref f) if f == "_atom_site.Cartn_y"));
    }

    #[test]
    fn test_no_atom_site() {
        let cif = "data_X\n_cell.length_a 10.0\n";
        let err = parse_cif_tokens(&tokenize(cif), &CifOptions::default()).unwrap_err();
        assert!(matches!(err, IoError::EmptyFile));
    }
}
