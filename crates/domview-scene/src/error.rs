//! Error types for viewer operations

use domview_select::SelectError;
use thiserror::Error;

/// Viewer-related errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ViewerError {
    /// The viewer cannot be reached (closed session, failed initialization)
    #[error("Viewer unavailable: {0}")]
    Unavailable(String),

    /// Selection could not be evaluated against the loaded structure
    #[error("Selection error: {0}")]
    Selection(#[from] SelectError),

    /// Camera operation on a selection without atoms
    #[error("Selection is empty")]
    EmptySelection,
}

/// Result type for viewer operations
pub type ViewerResult<T> = Result<T, ViewerError>;
