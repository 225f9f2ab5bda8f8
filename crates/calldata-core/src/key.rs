//! Verification-key documents and encoding
//!
//! Input shape (snarkjs `zkey export verificationkey` output, extra fields
//! such as `protocol`/`curve`/`nPublic` are ignored):
//!
//! ```json
//! {
//!   "vk_alpha_1": ["<Fp>", "<Fp>", "1"],
//!   "vk_beta_2":  [["<Fp>", "<Fp>"], ["<Fp>", "<Fp>"], ["1", "0"]],
//!   "vk_gamma_2": [...],
//!   "vk_delta_2": [...],
//!   "IC": [["<Fp>", "<Fp>", "1"], ...]
//! }
//! ```
//!
//! Verification-key points are never negated; the sign convention is applied
//! on the proof side only.

use serde::{Deserialize, Serialize};

use crate::encode::{encode_g1, encode_g2};
use crate::errors::{CalldataError, ParseError};
use crate::fields::FieldValue;
use crate::types::{EncodedG1, EncodedG2, G1Point, G2Point};

/// Raw verification-key document as read from disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationKeyDocument {
    pub vk_alpha_1: Vec<FieldValue>,
    pub vk_beta_2: Vec<Vec<FieldValue>>,
    pub vk_gamma_2: Vec<Vec<FieldValue>>,
    pub vk_delta_2: Vec<Vec<FieldValue>>,
    #[serde(rename = "IC")]
    pub ic: Vec<Vec<FieldValue>>,
}

/// Parsed verification key with big-integer coordinates
///
/// `ic` has one entry per public signal plus one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationKey {
    pub alpha: G1Point,
    pub beta: G2Point,
    pub gamma: G2Point,
    pub delta: G2Point,
    pub ic: Vec<G1Point>,
}

impl VerificationKeyDocument {
    /// Parse a verification-key document from JSON text
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert raw coordinate arrays into a typed verification key
    pub fn parse(&self) -> Result<VerificationKey, ParseError> {
        Ok(VerificationKey {
            alpha: G1Point::from_coords("vk_alpha_1", &self.vk_alpha_1)?,
            beta: G2Point::from_coords("vk_beta_2", &self.vk_beta_2)?,
            gamma: G2Point::from_coords("vk_gamma_2", &self.vk_gamma_2)?,
            delta: G2Point::from_coords("vk_delta_2", &self.vk_delta_2)?,
            ic: self
                .ic
                .iter()
                .map(|coords| G1Point::from_coords("IC", coords))
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

/// Encoded verification-key words, ready for the output document
#[derive(Debug, Clone, Serialize)]
pub struct EncodedVerificationKey {
    pub alpha: EncodedG1,
    pub beta: EncodedG2,
    pub gamma: EncodedG2,
    pub delta: EncodedG2,
    pub ic: Vec<EncodedG1>,
}

/// Encode a verification key; no point is negated
pub fn encode_verification_key(vk: &VerificationKey) -> Result<EncodedVerificationKey, CalldataError> {
    Ok(EncodedVerificationKey {
        alpha: encode_g1(&vk.alpha)?,
        beta: encode_g2(&vk.beta)?,
        gamma: encode_g2(&vk.gamma)?,
        delta: encode_g2(&vk.delta)?,
        ic: vk
            .ic
            .iter()
            .map(encode_g1)
            .collect::<Result<Vec<_>, _>>()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_fp;
    use num_bigint::BigUint;

    const VK_JSON: &str = r#"{
        "protocol": "groth16",
        "curve": "bls12381",
        "nPublic": 2,
        "vk_alpha_1": ["1", "2", "1"],
        "vk_beta_2": [["3", "4"], ["5", "6"], ["1", "0"]],
        "vk_gamma_2": [["7", "8"], ["9", "10"], ["1", "0"]],
        "vk_delta_2": [["11", "12"], ["13", "14"], ["1", "0"]],
        "IC": [["21", "22", "1"], ["23", "24", "1"], ["25", "26", "1"]]
    }"#;

    #[test]
    fn test_parse_ignores_metadata_fields() {
        let vk = VerificationKeyDocument::from_json(VK_JSON).unwrap().parse().unwrap();
        assert_eq!(vk.alpha.x, BigUint::from(1u32));
        assert_eq!(vk.beta.y[1], BigUint::from(6u32));
        assert_eq!(vk.ic.len(), 3);
    }

    #[test]
    fn test_ic_preserves_input_order() {
        let vk = VerificationKeyDocument::from_json(VK_JSON).unwrap().parse().unwrap();
        let encoded = encode_verification_key(&vk).unwrap();
        assert_eq!(encoded.ic.len(), 3);
        for (i, x) in [21u32, 23, 25].iter().enumerate() {
            let [hi, lo] = encode_fp(&BigUint::from(*x)).unwrap();
            assert_eq!(encoded.ic[i][0], hi);
            assert_eq!(encoded.ic[i][1], lo);
        }
    }

    #[test]
    fn test_no_point_is_negated() {
        let vk = VerificationKeyDocument::from_json(VK_JSON).unwrap().parse().unwrap();
        let encoded = encode_verification_key(&vk).unwrap();
        // alpha.y = 2 must be emitted raw
        let [hi, lo] = encode_fp(&BigUint::from(2u32)).unwrap();
        assert_eq!(encoded.alpha[2], hi);
        assert_eq!(encoded.alpha[3], lo);
    }

    #[test]
    fn test_missing_ic_is_a_parse_error() {
        let json = r#"{
            "vk_alpha_1": ["1", "2"],
            "vk_beta_2": [["3", "4"], ["5", "6"]],
            "vk_gamma_2": [["7", "8"], ["9", "10"]],
            "vk_delta_2": [["11", "12"], ["13", "14"]]
        }"#;
        assert!(matches!(
            VerificationKeyDocument::from_json(json),
            Err(ParseError::Json(_))
        ));
    }
}
