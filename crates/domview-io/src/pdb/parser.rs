//! PDB file parser
//!
//! Reads the ATOM/HETATM records of the first model of a PDB file.

use std::io::{BufRead, BufReader, Read};
use std::str::FromStr;

use domview_mol::{Atom, Structure};
use lin_alg::f32::Vec3;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::combinator::map;
use nom::IResult;

use crate::error::{IoError, IoResult};
use crate::format::StructureReader;

use super::records::AtomRecord;

/// PDB file reader
pub struct PdbReader<R> {
    reader: BufReader<R>,
    line_number: usize,
    name: String,
}

impl<R: Read> PdbReader<R> {
    pub fn new(reader: R) -> Self {
        PdbReader {
            reader: BufReader::new(reader),
            line_number: 0,
            name: String::new(),
        }
    }

    /// Set the name given to the parsed structure (defaults to the HEADER id code)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn read_line(&mut self) -> IoResult<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => {
                self.line_number += 1;
                Ok(Some(line))
            }
            Err(e) => Err(IoError::Io(e)),
        }
    }

    fn parse(&mut self) -> IoResult<Structure> {
        let mut records: Vec<AtomRecord> = Vec::new();
        let mut title = String::new();
        let mut id_code = String::new();
        let mut models_seen = 0;

        while let Some(line) = self.read_line()? {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            let record_type = line.get(0..6).unwrap_or(line);

            match record_type {
                "ATOM  " | "HETATM" => {
                    let (_, record) = parse_atom_record(line).map_err(|_| {
                        IoError::parse(self.line_number, "malformed ATOM/HETATM record")
                    })?;
                    records.push(record);
                }
                "HEADER" => {
                    if let Some(code) = line.get(62..66) {
                        id_code = code.trim().to_string();
                    }
                }
                "TITLE " => {
                    if let Some(text) = line.get(10..) {
                        if !title.is_empty() {
                            title.push(' ');
                        }
                        title.push_str(text.trim());
                    }
                }
                "MODEL " => {
                    models_seen += 1;
                    if models_seen > 1 {
                        break;
                    }
                }
                "ENDMDL" => {
                    log::debug!("PDB: stopping after first model at line {}", self.line_number);
                    break;
                }
                "END   " | "END" => break,
                _ => {}
            }
        }

        if records.is_empty() {
            return Err(IoError::EmptyFile);
        }

        let name = if self.name.is_empty() { id_code } else { self.name.clone() };
        let mut structure = build_structure(name, records)?;
        structure.title = title;
        Ok(structure)
    }
}

impl<R: Read> StructureReader for PdbReader<R> {
    fn read(&mut self) -> IoResult<Structure> {
        self.parse()
    }
}

fn build_structure(name: String, records: Vec<AtomRecord>) -> IoResult<Structure> {
    let mut atoms = Vec::with_capacity(records.len());
    let mut coords = Vec::with_capacity(records.len());

    for record in records {
        let mut atom = Atom::new(record.name(), record.get_element());
        atom.resn = record.resn;
        atom.resv = record.resv;
        atom.inscode = record.icode;
        atom.chain = record.chain;
        atom.segi = record.segi;
        atom.alt = record.alt_loc;
        atom.b_factor = record.b_factor;
        atom.occupancy = record.occupancy;
        atom.hetatm = record.hetatm;
        atom.id = record.serial;

        atoms.push(atom);
        coords.push(Vec3::new(record.x, record.y, record.z));
    }

    let mut structure = Structure::from_parts(name, atoms, coords)?;
    structure.classify_atoms();
    log::debug!("PDB: read {}", structure);
    Ok(structure)
}

// ============================================================================
// Record parsing
// ============================================================================

fn column<T: FromStr>(line: &str, start: usize, end: usize) -> Option<T> {
    let field = line.get(start..end.min(line.len()))?.trim();
    field.parse().ok()
}

fn column_str(line: &str, start: usize, end: usize) -> String {
    line.get(start..end.min(line.len()))
        .unwrap_or("")
        .trim()
        .to_string()
}

fn column_char(line: &str, idx: usize) -> char {
    line.chars().nth(idx).unwrap_or(' ')
}

fn coordinate(line: &str, start: usize) -> Result<f32, nom::Err<nom::error::Error<&str>>> {
    column(line, start, start + 8).ok_or_else(|| {
        nom::Err::Error(nom::error::Error::new(line, nom::error::ErrorKind::Float))
    })
}

fn record_kind(input: &str) -> IResult<&str, bool> {
    alt((map(tag("ATOM  "), |_| false), map(tag("HETATM"), |_| true)))(input)
}

/// Parse an ATOM or HETATM record
///
/// Columns (0-indexed): serial 6-10, name 12-15, altLoc 16, resName 17-19,
/// chainID 21, resSeq 22-25, iCode 26, x/y/z 30-53, occupancy 54-59,
/// tempFactor 60-65, segment 72-75, element 76-77.
fn parse_atom_record(input: &str) -> IResult<&str, AtomRecord> {
    let (_, hetatm) = record_kind(input)?;

    let x = coordinate(input, 30)?;
    let y = coordinate(input, 38)?;
    let z = coordinate(input, 46)?;

    let raw_name = input
        .get(12..16.min(input.len()))
        .unwrap_or("")
        .to_string();

    let record = AtomRecord {
        hetatm,
        serial: column(input, 6, 11).unwrap_or(0),
        raw_name,
        alt_loc: column_char(input, 16),
        resn: column_str(input, 17, 20),
        chain: column_str(input, 21, 22),
        resv: column(input, 22, 26).unwrap_or(0),
        icode: column_char(input, 26),
        x,
        y,
        z,
        occupancy: column(input, 54, 60).unwrap_or(1.0),
        b_factor: column(input, 60, 66).unwrap_or(0.0),
        segi: column_str(input, 72, 76),
        element: column_str(input, 76, 78),
    };

    Ok(("", record))
}
