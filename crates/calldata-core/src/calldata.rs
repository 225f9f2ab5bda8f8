//! Public-signal encoding and calldata assembly
//!
//! Calldata layout, one flat hex string with no `0x` prefix and no
//! separators:
//!
//! 1. `pi_a` (x, negated y): 4 words = 256 chars
//! 2. `pi_b` x limbs: 4 words = 256 chars
//! 3. `pi_b` y limbs: 4 words = 256 chars
//! 4. `pi_c` (x, y): 4 words = 256 chars
//! 5. public signals, input order: 1 word = 64 chars each
//!
//! Total: `1024 + 64 * N` hex characters for N public signals.

use num_bigint::BigUint;
use num_traits::One;
use serde::Serialize;

use crate::encode::encode_scalar;
use crate::errors::{FormatError, ParseError};
use crate::types::{EncodedG1, EncodedG2};
use crate::fields::FieldValue;

/// Raw public-signals document: an ordered list of scalar values
pub type PublicSignalsDocument = Vec<FieldValue>;

/// Parse a public-signals document from JSON text
pub fn signals_from_json(json: &str) -> Result<Vec<BigUint>, ParseError> {
    let doc: PublicSignalsDocument = serde_json::from_str(json)?;
    doc.iter().map(|v| v.to_biguint("pub_signals")).collect()
}

/// Encode public signals as single words, preserving input order
///
/// `prepend_one` inserts the circuit's implicit constant-one input as the
/// first word. snarkjs `generatecall` output already includes it in the
/// signal list; exports taken straight from a witness file do not. The two
/// upstream call sites disagreed on this, so it is an explicit choice here.
pub fn encode_public_signals(
    signals: &[BigUint],
    prepend_one: bool,
) -> Result<Vec<String>, FormatError> {
    let mut words = Vec::with_capacity(signals.len() + usize::from(prepend_one));
    if prepend_one {
        words.push(encode_scalar(&BigUint::one())?);
    }
    for signal in signals {
        words.push(encode_scalar(signal)?);
    }
    Ok(words)
}

/// Concatenate encoded words into the final calldata string
///
/// Order is fixed: `pi_a` → `pi_b[0]` → `pi_b[1]` → `pi_c` → public signals.
pub fn build_calldata(
    pi_a: &EncodedG1,
    pi_b: &EncodedG2,
    pi_c: &EncodedG1,
    pub_signals: &[String],
) -> String {
    let words = pi_a
        .iter()
        .chain(pi_b[0].iter())
        .chain(pi_b[1].iter())
        .chain(pi_c.iter())
        .chain(pub_signals.iter());

    let mut calldata = String::new();
    for word in words {
        calldata.push_str(word.strip_prefix("0x").unwrap_or(word));
    }
    calldata
}

/// Output document for the proof transformation
#[derive(Debug, Clone, Serialize)]
pub struct ProofCalldataDocument {
    pub pi_a: EncodedG1,
    pub pi_b: EncodedG2,
    pub pi_c: EncodedG1,
    pub pub_signals: Vec<String>,
    pub calldata: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{encode_fp, WORD_HEX_LEN};
    use crate::proof::{encode_proof, ProofDocument};

    const PROOF_JSON: &str = r#"{
        "pi_a": ["3", "5", "1"],
        "pi_b": [["11", "12"], ["13", "14"], ["1", "0"]],
        "pi_c": ["7", "9", "1"]
    }"#;

    #[test]
    fn test_signals_from_json_accepts_strings_and_numbers() {
        let signals = signals_from_json(r#"["33", 44]"#).unwrap();
        assert_eq!(signals, vec![BigUint::from(33u32), BigUint::from(44u32)]);
    }

    #[test]
    fn test_prepend_one() {
        let signals = vec![BigUint::from(33u32)];
        let words = encode_public_signals(&signals, true).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0], encode_scalar(&BigUint::from(1u32)).unwrap());
        assert_eq!(words[1], encode_scalar(&BigUint::from(33u32)).unwrap());
    }

    #[test]
    fn test_calldata_length() {
        let proof = ProofDocument::from_json(PROOF_JSON).unwrap().parse().unwrap();
        let encoded = encode_proof(&proof).unwrap();
        for n in [0usize, 1, 3] {
            let signals: Vec<BigUint> = (0..n).map(|i| BigUint::from(i as u32)).collect();
            let words = encode_public_signals(&signals, false).unwrap();
            let calldata = build_calldata(&encoded.pi_a, &encoded.pi_b, &encoded.pi_c, &words);
            assert_eq!(calldata.len(), 1024 + WORD_HEX_LEN * n);
            assert!(!calldata.contains("0x"));
        }
    }

    #[test]
    fn test_calldata_word_order() {
        let proof = ProofDocument::from_json(PROOF_JSON).unwrap().parse().unwrap();
        let encoded = encode_proof(&proof).unwrap();
        let signals = vec![BigUint::from(33u32)];
        let words = encode_public_signals(&signals, false).unwrap();
        let calldata = build_calldata(&encoded.pi_a, &encoded.pi_b, &encoded.pi_c, &words);

        // pi_a.x occupies the first two words
        let [x_hi, x_lo] = encode_fp(&BigUint::from(3u32)).unwrap();
        assert_eq!(&calldata[0..64], &x_hi[2..]);
        assert_eq!(&calldata[64..128], &x_lo[2..]);

        // pi_b x limbs start at char 256, pi_c at 768, signals at 1024
        let [b_hi, _] = encode_fp(&BigUint::from(11u32)).unwrap();
        assert_eq!(&calldata[256..320], &b_hi[2..]);
        let [c_hi, _] = encode_fp(&BigUint::from(7u32)).unwrap();
        assert_eq!(&calldata[768..832], &c_hi[2..]);
        assert_eq!(
            &calldata[1024..],
            &encode_scalar(&BigUint::from(33u32)).unwrap()[2..]
        );
    }
}
