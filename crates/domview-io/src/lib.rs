//! Structure file readers
//!
//! Reads the first model of PDB and mmCIF files (optionally gzip-compressed)
//! into a [`domview_mol::Structure`].
//!
//! ```no_run
//! use domview_io::{read_structure_with, CifOptions, Numbering};
//! use std::path::Path;
//!
//! let options = CifOptions { numbering: Numbering::Label };
//! let structure = read_structure_with(Path::new("1abc.cif.gz"), options).unwrap();
//! println!("{}", structure);
//! ```

pub mod cif;
pub mod compress;
pub mod error;
pub mod format;
pub mod pdb;

use std::path::Path;

use domview_mol::Structure;

pub use cif::{read_cif_from, read_cif_str, CifReader};
pub use error::{IoError, IoResult};
pub use format::{CifOptions, FileFormat, Numbering, StructureReader};
pub use pdb::{read_pdb_from, read_pdb_str, PdbReader};

/// Read a structure file, detecting the format from its extension
pub fn read_structure(path: &Path) -> IoResult<Structure> {
    read_structure_with(path, CifOptions::default())
}

/// Read a structure file with explicit mmCIF options
pub fn read_structure_with(path: &Path, options: CifOptions) -> IoResult<Structure> {
    let format = FileFormat::from_path(path);
    log::info!("Reading {} as {}", path.display(), format.name());
    match format {
        FileFormat::Pdb => pdb::read_pdb(path),
        FileFormat::Cif => cif::read_cif(path, options),
        FileFormat::Unknown => Err(IoError::UnknownFormat(path.display().to_string())),
    }
}
