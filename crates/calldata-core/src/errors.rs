//! Error types for the calldata encoder

use thiserror::Error;

/// Top-level error for a document-to-calldata transformation
#[derive(Debug, Error)]
pub enum CalldataError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("format error: {0}")]
    Format(#[from] FormatError),
}

/// Input document errors
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field}: not a decimal integer: {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("{field}: expected at least {expected} coordinates, got {actual}")]
    CoordinateCount {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Fixed-width encoding errors
///
/// Calldata for an immutable on-chain verifier must never be emitted with
/// misaligned words, so any value wider than its slot is rejected outright.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("value needs {actual} hex digits, slot width is {width}")]
    Oversize { width: usize, actual: usize },

    #[error("negation input exceeds the field modulus")]
    AboveModulus,
}
