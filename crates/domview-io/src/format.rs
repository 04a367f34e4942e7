//! File format detection and the common reader interface

use std::path::Path;

use domview_mol::Structure;

use crate::error::IoResult;

/// Supported structure file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Protein Data Bank format
    Pdb,
    /// Macromolecular Crystallographic Information File
    Cif,
    /// Unknown format
    Unknown,
}

impl FileFormat {
    /// Get the file format from a file extension (without the leading dot)
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdb" | "ent" => FileFormat::Pdb,
            "cif" | "mmcif" => FileFormat::Cif,
            _ => FileFormat::Unknown,
        }
    }

    /// Get the file format from a path, looking through a trailing `.gz`
    pub fn from_path(path: &Path) -> Self {
        let inner = if crate::compress::is_gzip_path(path) {
            path.file_stem().map(Path::new)
        } else {
            Some(path)
        };

        inner
            .and_then(|p| p.extension())
            .and_then(|s| s.to_str())
            .map(FileFormat::from_extension)
            .unwrap_or(FileFormat::Unknown)
    }

    /// Get a human-readable name for the format
    pub fn name(&self) -> &'static str {
        match self {
            FileFormat::Pdb => "PDB",
            FileFormat::Cif => "mmCIF",
            FileFormat::Unknown => "Unknown",
        }
    }
}

/// Which residue numbering and chain labelling scheme to read from mmCIF
///
/// PDB files only carry author numbering, so this has no effect on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Numbering {
    /// `auth_seq_id` / `auth_asym_id`: the depositor's structure numbering
    #[default]
    Author,
    /// `label_seq_id` / `label_asym_id`: sequential numbering from 1
    Label,
}

/// Options for the mmCIF reader
#[derive(Debug, Clone, Copy, Default)]
pub struct CifOptions {
    pub numbering: Numbering,
}

/// Trait for reading a structure from a source
pub trait StructureReader {
    /// Read the first model of the source as a structure
    fn read(&mut self) -> IoResult<Structure>;
}

/// Derive a structure name from a path (`/data/1abc.cif.gz` -> `1abc`)
pub fn structure_name_from_path(path: &Path) -> String {
    let mut name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_string();
    if let Some(stripped) = name.strip_suffix(".gz") {
        name = stripped.to_string();
    }
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(FileFormat::from_path(Path::new("a/1abc.pdb")), FileFormat::Pdb);
        assert_eq!(FileFormat::from_path(Path::new("pdb1abc.ent.gz")), FileFormat::Pdb);
        assert_eq!(FileFormat::from_path(Path::new("1abc.CIF")), FileFormat::Cif);
        assert_eq!(FileFormat::from_path(Path::new("1abc.mmcif.gz")), FileFormat::Cif);
        assert_eq!(FileFormat::from_path(Path::new("1abc.gz")), FileFormat::Unknown);
        assert_eq!(FileFormat::from_path(Path::new("notes.txt")), FileFormat::Unknown);
    }

    #[test]
    fn test_structure_name() {
        assert_eq!(structure_name_from_path(Path::new("/data/1abc.cif.gz")), "1abc");
        assert_eq!(structure_name_from_path(Path::new("model.pdb")), "model");
        assert_eq!(structure_name_from_path(Path::new("plain")), "plain");
    }
}
