//! Error types for structure file I/O

use domview_mol::MolError;
use thiserror::Error;

/// Errors that can occur while reading structure files
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error with location information
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// Line number where the error occurred (1-based, 0 if unknown)
        line: usize,
        /// Error message
        message: String,
    },

    /// Unknown or unsupported file format
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// File is empty or contains no atoms
    #[error("Empty file or no atoms found")]
    EmptyFile,

    /// Decompression error
    #[error("Decompression error: {0}")]
    Decompression(String),

    /// Parsed records could not be assembled into a structure
    #[error(transparent)]
    Structure(#[from] MolError),
}

impl IoError {
    /// Create a parse error at a specific line
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        IoError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        IoError::MissingField(field.into())
    }
}

/// Result type for structure file I/O operations
pub type IoResult<T> = Result<T, IoError>;
