//! ATCF error types.

use thiserror::Error;

/// Errors raised around A-deck parsing.
///
/// Record-level problems (bad coordinates, unknown models) never surface
/// here; those records are skipped.
#[derive(Debug, Error)]
pub enum AtcfError {
    #[error("Decompression failed: {0}")]
    Decompression(String),

    #[error("Invalid cycle timestamp: {0}")]
    InvalidCycle(String),
}

/// Result type alias using AtcfError.
pub type Result<T> = std::result::Result<T, AtcfError>;
