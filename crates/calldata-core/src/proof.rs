//! Groth16 proof documents and proof encoding
//!
//! Input shape (snarkjs `groth16 prove` output):
//!
//! ```json
//! {
//!   "pi_a": ["<Fp>", "<Fp>", "1"],
//!   "pi_b": [["<Fp>", "<Fp>"], ["<Fp>", "<Fp>"], ["1", "0"]],
//!   "pi_c": ["<Fp>", "<Fp>", "1"]
//! }
//! ```
//!
//! The verifier's pairing equation expects `-A` on the left-hand side, so the
//! Y-coordinate of `pi_a` (and only `pi_a`) is negated before encoding.

use serde::{Deserialize, Serialize};

use crate::encode::{encode_fp, encode_g1, encode_g2};
use crate::errors::{CalldataError, ParseError};
use crate::fields::{fp_modulus, fp_negate, FieldValue};
use crate::types::{EncodedG1, EncodedG2, G1Point, G2Point};

/// Raw proof document as read from disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofDocument {
    pub pi_a: Vec<FieldValue>,
    pub pi_b: Vec<Vec<FieldValue>>,
    pub pi_c: Vec<FieldValue>,
}

/// Parsed proof with big-integer coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    pub pi_a: G1Point,
    pub pi_b: G2Point,
    pub pi_c: G1Point,
}

impl ProofDocument {
    /// Parse a proof document from JSON text
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert raw coordinate arrays into a typed proof
    pub fn parse(&self) -> Result<Proof, ParseError> {
        Ok(Proof {
            pi_a: G1Point::from_coords("pi_a", &self.pi_a)?,
            pi_b: G2Point::from_coords("pi_b", &self.pi_b)?,
            pi_c: G1Point::from_coords("pi_c", &self.pi_c)?,
        })
    }
}

/// Encoded proof words, ready for the output document
#[derive(Debug, Clone, Serialize)]
pub struct EncodedProof {
    pub pi_a: EncodedG1,
    pub pi_b: EncodedG2,
    pub pi_c: EncodedG1,
}

/// Encode a proof, negating the `pi_a` Y-coordinate
pub fn encode_proof(proof: &Proof) -> Result<EncodedProof, CalldataError> {
    let modulus = fp_modulus();
    let neg_y = fp_negate(&proof.pi_a.y, &modulus)?;

    let [ax_hi, ax_lo] = encode_fp(&proof.pi_a.x)?;
    let [ay_hi, ay_lo] = encode_fp(&neg_y)?;

    Ok(EncodedProof {
        pi_a: [ax_hi, ax_lo, ay_hi, ay_lo],
        pi_b: encode_g2(&proof.pi_b)?,
        pi_c: encode_g1(&proof.pi_c)?,
    })
}
