//! Error types shared by the storm-proxy crates.

use thiserror::Error;

/// Errors raised while parsing an NHC storm identifier such as `AL092025`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StormIdError {
    #[error("Invalid storm id '{0}': expected 8 characters like AL092025")]
    InvalidLength(String),

    #[error("Unknown basin '{0}': expected AL, EP or CP")]
    UnknownBasin(String),

    #[error("Invalid storm number '{0}': expected 01-99")]
    InvalidNumber(String),

    #[error("Invalid storm year '{0}'")]
    InvalidYear(String),
}
