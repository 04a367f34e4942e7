//! PDB file format reader

mod parser;
mod records;

pub use parser::PdbReader;
pub use records::{infer_element_from_name, AtomRecord};

use std::io::Read;
use std::path::Path;

use domview_mol::Structure;

use crate::error::IoResult;
use crate::format::{structure_name_from_path, StructureReader};

/// Read a PDB file from a path (`.gz` is decompressed transparently)
pub fn read_pdb(path: &Path) -> IoResult<Structure> {
    let file = crate::compress::open_file(path)?;
    PdbReader::new(file)
        .with_name(structure_name_from_path(path))
        .read()
}

/// Read a PDB file from a string
pub fn read_pdb_str(content: &str) -> IoResult<Structure> {
    PdbReader::new(content.as_bytes()).read()
}

/// Read a PDB file from a reader
pub fn read_pdb_from<R: Read>(reader: R) -> IoResult<Structure> {
    PdbReader::new(reader).read()
}
