//! BLS12-381 base-field constants and field-value parsing
//!
//! snarkjs documents carry field elements as decimal strings (occasionally as
//! bare JSON numbers for small values). Everything is parsed into `BigUint`
//! before encoding; the 381-bit base-field modulus does not fit any primitive
//! integer type.

use num_bigint::BigUint;

use crate::errors::{FormatError, ParseError};

/// BLS12-381 base field modulus p, big-endian
///
/// p = 0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf
///     6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab
pub const FP_MODULUS_BE: [u8; 48] = [
    0x1a, 0x01, 0x11, 0xea, 0x39, 0x7f, 0xe6, 0x9a, 0x4b, 0x1b, 0xa7, 0xb6, 0x43, 0x4b, 0xac, 0xd7,
    0x64, 0x77, 0x4b, 0x84, 0xf3, 0x85, 0x12, 0xbf, 0x67, 0x30, 0xd2, 0xa0, 0xf6, 0xb0, 0xf6, 0x24,
    0x1e, 0xab, 0xff, 0xfe, 0xb1, 0x53, 0xff, 0xff, 0xb9, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xaa, 0xab,
];

/// The base field modulus as a big integer
pub fn fp_modulus() -> BigUint {
    BigUint::from_bytes_be(&FP_MODULUS_BE)
}

/// Field negation: `modulus - value`
///
/// Caller contract is `0 < value < modulus`. A zero input yields the modulus
/// itself rather than zero, matching the verifier-side convention this tool
/// feeds; see DESIGN.md for the open question around that edge. Values above
/// the modulus cannot be negated and are rejected.
pub fn fp_negate(value: &BigUint, modulus: &BigUint) -> Result<BigUint, FormatError> {
    if value > modulus {
        return Err(FormatError::AboveModulus);
    }
    Ok(modulus - value)
}

/// A field element as it appears in input JSON: decimal string or bare number
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(u64),
}

impl FieldValue {
    /// Parse into an unsigned big integer
    ///
    /// `field` names the document location for error reporting.
    pub fn to_biguint(&self, field: &'static str) -> Result<BigUint, ParseError> {
        match self {
            FieldValue::Number(n) => Ok(BigUint::from(*n)),
            FieldValue::Text(s) => {
                BigUint::parse_bytes(s.as_bytes(), 10).ok_or_else(|| ParseError::InvalidInteger {
                    field,
                    value: s.clone(),
                })
            }
        }
    }
}
