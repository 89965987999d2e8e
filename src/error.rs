//! Error types for the parts of the crate that parse external input.
//!
//! The row/cell binding itself never fails; only configuration loading and
//! keyboard-type parsing can.

use thiserror::Error;

/// Errors produced while reading configuration or parsing input classes.
#[derive(Debug, Error)]
pub enum Error {
    /// The field configuration JSON could not be decoded.
    #[error("invalid field configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// A keyboard type name did not match any known input class.
    #[error("unknown keyboard type `{0}`")]
    UnknownKeyboardType(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
