//! Error types for beacon-chain document handling and BLS point parsing

use bls381_calldata_core::FormatError;
use thiserror::Error;

/// Errors from lookup planning, point decompression, and aggregation
#[derive(Debug, Error)]
pub enum BlsError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field}: invalid hex: {source}")]
    Hex {
        field: &'static str,
        source: hex::FromHexError,
    },

    #[error("{field}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{field}: compression flag not set")]
    NotCompressed { field: &'static str },

    #[error("{field}: malformed point-at-infinity encoding")]
    InvalidInfinity { field: &'static str },

    #[error("{field}: x-coordinate is not a canonical field element")]
    NonCanonicalCoordinate { field: &'static str },

    #[error("{field}: no curve point has this x-coordinate")]
    NotOnCurve { field: &'static str },

    #[error("{field}: point is not in the prime-order subgroup")]
    WrongSubgroup { field: &'static str },

    #[error("{field}: point at infinity has no affine coordinates")]
    PointAtInfinity { field: &'static str },

    #[error("validator set is empty")]
    EmptyValidatorSet,

    #[error("attestation index {index} out of range ({count} attestations)")]
    AttestationIndex { index: usize, count: usize },

    #[error("encoding error: {0}")]
    Encode(#[from] FormatError),
}
