//! Error types for the color system

use thiserror::Error;

/// Errors that can occur when resolving colors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Neither a hex triplet nor a registered name
    #[error("Unknown color: {0}")]
    NotFound(String),

    /// Palette with no entries
    #[error("Palette is empty")]
    EmptyPalette,
}

pub type ColorResult<T> = Result<T, ColorError>;
