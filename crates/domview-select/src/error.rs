//! Error types for selector and range parsing

use thiserror::Error;

/// Errors that can occur while parsing selectors or structure ranges
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SelectError {
    /// Unexpected end of input
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Unexpected token encountered
    #[error("unexpected token: {0}")]
    UnexpectedToken(String),

    /// Unknown keyword
    #[error("unknown keyword: {0}")]
    UnknownKeyword(String),

    /// Keyword given more than once in a conjunction
    #[error("duplicate keyword: {0}")]
    DuplicateKeyword(String),

    /// Invalid residue specification
    #[error("invalid residue specification: {0}")]
    InvalidResidue(String),

    /// Invalid structure range string
    #[error("invalid structure range: {0}")]
    InvalidRange(String),

    /// A multi-chain range cannot be expressed as a single selector
    #[error("range spans several chains: {0}")]
    MixedChains(String),

    /// Selection sizes differ in a set operation
    #[error("selection size mismatch: {0} vs {1}")]
    SizeMismatch(usize, usize),
}

/// Result type for selection operations
pub type SelectResult<T> = Result<T, SelectError>;
