//! Whole-document transformations
//!
//! These are the entry points the CLI drives: JSON text in, output document
//! out. Documents are passed as content strings so the encoder itself never
//! touches the filesystem and stays independently testable.

use serde::Serialize;

use crate::calldata::{
    build_calldata, encode_public_signals, signals_from_json, ProofCalldataDocument,
};
use crate::errors::CalldataError;
use crate::key::{encode_verification_key, EncodedVerificationKey, VerificationKeyDocument};
use crate::proof::{encode_proof, ProofDocument};
use crate::types::{EncodedG1, EncodedG2};

/// Output document for the verification-key transformation
///
/// `pub_signals` and `calldata` are present only when a proof/public pair was
/// supplied alongside the key.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationKeyExport {
    pub alpha: EncodedG1,
    pub beta: EncodedG2,
    pub gamma: EncodedG2,
    pub delta: EncodedG2,
    pub ic: Vec<EncodedG1>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_signals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calldata: Option<String>,
}

/// Transform a proof + public-signals pair into verifier calldata
pub fn proof_export(
    proof_json: &str,
    public_json: &str,
    prepend_one: bool,
) -> Result<ProofCalldataDocument, CalldataError> {
    let proof = ProofDocument::from_json(proof_json)?.parse()?;
    let signals = signals_from_json(public_json)?;

    let encoded = encode_proof(&proof)?;
    let pub_signals = encode_public_signals(&signals, prepend_one)?;
    let calldata = build_calldata(&encoded.pi_a, &encoded.pi_b, &encoded.pi_c, &pub_signals);

    Ok(ProofCalldataDocument {
        pi_a: encoded.pi_a,
        pi_b: encoded.pi_b,
        pi_c: encoded.pi_c,
        pub_signals,
        calldata,
    })
}

/// Transform a verification key, optionally bundling proof calldata with it
pub fn verification_key_export(
    vk_json: &str,
    proof: Option<(&str, &str)>,
    prepend_one: bool,
) -> Result<VerificationKeyExport, CalldataError> {
    let vk = VerificationKeyDocument::from_json(vk_json)?.parse()?;
    let EncodedVerificationKey {
        alpha,
        beta,
        gamma,
        delta,
        ic,
    } = encode_verification_key(&vk)?;

    let mut export = VerificationKeyExport {
        alpha,
        beta,
        gamma,
        delta,
        ic,
        pub_signals: None,
        calldata: None,
    };

    if let Some((proof_json, public_json)) = proof {
        let bundled = proof_export(proof_json, public_json, prepend_one)?;
        export.pub_signals = Some(bundled.pub_signals);
        export.calldata = Some(bundled.calldata);
    }

    Ok(export)
}
