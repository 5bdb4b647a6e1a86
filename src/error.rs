//! Error types shared by every docsmith module

use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by docsmith operations
///
/// Each variant belongs to exactly one operation family; nothing is
/// retried or recovered internally, callers decide what to do.
#[derive(Error, Debug)]
pub enum Error {
    #[error("not a hex color string: {0:?}")]
    NotHexColor(String),

    #[error("no text or target format provided")]
    MissingCaseInput,

    #[error("unsupported format: {0}")]
    UnsupportedCaseFormat(String),

    #[error("invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("invalid option: {0}")]
    InvalidFilterOption(String),

    #[error("invalid doc type: {0}")]
    InvalidDocType(String),

    #[error("minimum size cannot exceed maximum size")]
    MinExceedsMax,

    #[error("invalid date, expected MM-DD-YYYY: {0:?}")]
    InvalidDate(String),

    #[error("{0} overflowed")]
    Overflow(&'static str),

    #[error("unknown plugin option: {0}")]
    UnknownPluginOption(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
