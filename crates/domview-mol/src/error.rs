//! Error types for structure model operations

use thiserror::Error;

/// Errors that can occur when assembling structure data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MolError {
    /// Coordinate count doesn't match atom count
    #[error("Coordinate count mismatch: expected {expected}, got {actual}")]
    CoordinateMismatch { expected: usize, actual: usize },
}

/// Result type for structure model operations
pub type MolResult<T> = Result<T, MolError>;
