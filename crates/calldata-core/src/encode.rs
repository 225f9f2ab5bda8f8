//! Fixed-width hex word encoding
//!
//! The on-chain verifier consumes 32-byte big-endian words. A base-field
//! element (381 bits) occupies two words (128 hex characters, high word
//! first); a public-signal scalar occupies a single word. Encodings are
//! always zero-padded to the full slot width; a value wider than its slot is
//! a `FormatError`, never a silent truncation.

use num_bigint::BigUint;

use crate::errors::FormatError;
use crate::types::{EncodedG1, EncodedG2, G1Point, G2Point};

/// Hex characters per 32-byte word
pub const WORD_HEX_LEN: usize = 64;

/// Hex characters per encoded base-field element (two words)
pub const FP_HEX_LEN: usize = 2 * WORD_HEX_LEN;

/// Encode a base-field element as two `0x`-prefixed words, high word first
pub fn encode_fp(value: &BigUint) -> Result<[String; 2], FormatError> {
    let hex = value.to_str_radix(16);
    if hex.len() > FP_HEX_LEN {
        return Err(FormatError::Oversize {
            width: FP_HEX_LEN,
            actual: hex.len(),
        });
    }
    let padded = format!("{:0>width$}", hex, width = FP_HEX_LEN);
    let (hi, lo) = padded.split_at(WORD_HEX_LEN);
    Ok([format!("0x{}", hi), format!("0x{}", lo)])
}

/// Encode a public-signal scalar as a single `0x`-prefixed word
pub fn encode_scalar(value: &BigUint) -> Result<String, FormatError> {
    let hex = value.to_str_radix(16);
    if hex.len() > WORD_HEX_LEN {
        return Err(FormatError::Oversize {
            width: WORD_HEX_LEN,
            actual: hex.len(),
        });
    }
    Ok(format!("0x{:0>width$}", hex, width = WORD_HEX_LEN))
}

/// Encode a G1 point as four words: `[x_hi, x_lo, y_hi, y_lo]`
pub fn encode_g1(point: &G1Point) -> Result<EncodedG1, FormatError> {
    let [x_hi, x_lo] = encode_fp(&point.x)?;
    let [y_hi, y_lo] = encode_fp(&point.y)?;
    Ok([x_hi, x_lo, y_hi, y_lo])
}

/// Encode a G2 point as two rows of four words, x limbs then y limbs
pub fn encode_g2(point: &G2Point) -> Result<EncodedG2, FormatError> {
    let [x0_hi, x0_lo] = encode_fp(&point.x[0])?;
    let [x1_hi, x1_lo] = encode_fp(&point.x[1])?;
    let [y0_hi, y0_lo] = encode_fp(&point.y[0])?;
    let [y1_hi, y1_lo] = encode_fp(&point.y[1])?;
    Ok([
        [x0_hi, x0_lo, x1_hi, x1_lo],
        [y0_hi, y0_lo, y1_hi, y1_lo],
    ])
}
