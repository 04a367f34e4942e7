//! mmCIF file format reader

mod lexer;
mod parser;

pub use lexer::{tokenize, Lexer, Token};
pub use parser::CifReader;

use std::io::Read;
use std::path::Path;

use domview_mol::Structure;

use crate::error::IoResult;
use crate::format::{structure_name_from_path, CifOptions, StructureReader};

/// Read an mmCIF file from a path (`.gz` is decompressed transparently)
pub fn read_cif(path: &Path, options: CifOptions) -> IoResult<Structure> {
    let file = crate::compress::open_file(path)?;
    CifReader::new(file)
        .with_options(options)
        .with_name(structure_name_from_path(path))
        .read()
}

/// Read an mmCIF file from a string
pub fn read_cif_str(content: &str, options: CifOptions) -> IoResult<Structure> {
    CifReader::new(content.as_bytes()).with_options(options).read()
}

/// Read an mmCIF file from a reader
pub fn read_cif_from<R: Read>(reader: R, options: CifOptions) -> IoResult<Structure> {
    CifReader::new(reader).with_options(options).read()
}
