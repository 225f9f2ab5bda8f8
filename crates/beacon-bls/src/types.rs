//! Beacon-chain document models
//!
//! Shapes follow what the tooling actually consumes: the beaconcha.in block
//! attestations endpoint, the validator lookup endpoint, and the merged
//! validator-set document this crate produces. Unknown fields are ignored so
//! API additions do not break parsing.

use serde::{Deserialize, Serialize};

use crate::errors::BlsError;

/// One attestation from `/api/v1/block/{slot}/attestations`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attestation {
    pub block_slot: u64,
    pub block_root: String,
    /// Indices of the validators that participated in this attestation
    pub validators: Vec<u64>,
    /// Aggregate BLS signature, `0x`-prefixed compressed G2 (96 bytes)
    pub signature: String,
}

/// Envelope for the attestations endpoint response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttestationsDocument {
    pub data: Vec<Attestation>,
}

impl AttestationsDocument {
    /// Parse from JSON text
    pub fn from_json(json: &str) -> Result<Self, BlsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Select an attestation by index
    pub fn attestation(&self, index: usize) -> Result<&Attestation, BlsError> {
        self.data.get(index).ok_or(BlsError::AttestationIndex {
            index,
            count: self.data.len(),
        })
    }
}

/// One validator entry from the validator lookup endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorInfo {
    /// `0x`-prefixed compressed G1 public key (48 bytes)
    pub pubkey: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validatorindex: Option<u64>,
}

/// Envelope for one validator lookup response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorLookupResponse {
    pub data: Vec<ValidatorInfo>,
}

impl ValidatorLookupResponse {
    /// Parse from JSON text
    pub fn from_json(json: &str) -> Result<Self, BlsError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Merged validator set for one attestation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorSet {
    pub block_slot: u64,
    pub block_root: String,
    pub validators: Vec<ValidatorInfo>,
}

impl ValidatorSet {
    /// Parse from JSON text
    pub fn from_json(json: &str) -> Result<Self, BlsError> {
        Ok(serde_json::from_str(json)?)
    }
}
