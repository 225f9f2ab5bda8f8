//! Validator lookup planning for the beaconcha.in API
//!
//! The lookup endpoint accepts at most 100 validators per request, so an
//! attestation's validator list is split into batches and each batch becomes
//! one POST payload. HTTP transport is the caller's concern: this module
//! produces the exact URLs and bodies to send and merges the responses that
//! come back.

use serde::{Deserialize, Serialize};

use crate::types::{Attestation, ValidatorInfo, ValidatorLookupResponse, ValidatorSet};

/// Maximum validators per lookup request, imposed by the API
pub const VALIDATOR_BATCH_SIZE: usize = 100;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://beaconcha.in/api/v1";

/// POST body for the validator lookup endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorQuery {
    /// Comma-separated validator indices
    #[serde(rename = "indicesOrPubkey")]
    pub indices_or_pubkey: String,
}

/// One planned lookup request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRequest {
    pub url: String,
    pub body: ValidatorQuery,
}

/// The full request plan for one attestation's validators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupPlan {
    pub block_slot: u64,
    pub requests: Vec<LookupRequest>,
}

/// Split validator indices into API-sized batches, preserving order
pub fn validator_batches(validators: &[u64]) -> Vec<&[u64]> {
    validators.chunks(VALIDATOR_BATCH_SIZE).collect()
}

/// Build the lookup URL, appending the API key when one is configured
pub fn lookup_url(api_base: &str, api_key: Option<&str>) -> String {
    let base = api_base.trim_end_matches('/');
    match api_key {
        Some(key) => format!("{}/validator?apikey={}", base, key),
        None => format!("{}/validator", base),
    }
}

/// Plan the lookup requests for one attestation
pub fn lookup_plan(attestation: &Attestation, api_base: &str, api_key: Option<&str>) -> LookupPlan {
    let url = lookup_url(api_base, api_key);
    let requests = validator_batches(&attestation.validators)
        .into_iter()
        .map(|batch| LookupRequest {
            url: url.clone(),
            body: ValidatorQuery {
                indices_or_pubkey: batch
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            },
        })
        .collect();

    LookupPlan {
        block_slot: attestation.block_slot,
        requests,
    }
}

/// Merge lookup responses, in request order, into a validator-set document
pub fn merge_lookup_responses(
    attestation: &Attestation,
    responses: &[ValidatorLookupResponse],
) -> ValidatorSet {
    let validators: Vec<ValidatorInfo> = responses
        .iter()
        .flat_map(|r| r.data.iter().cloned())
        .collect();

    ValidatorSet {
        block_slot: attestation.block_slot,
        block_root: attestation.block_root.clone(),
        validators,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attestation(validators: Vec<u64>) -> Attestation {
        Attestation {
            block_slot: 11046320,
            block_root: "0xroot".to_string(),
            validators,
            signature: "0x00".to_string(),
        }
    }

    #[test]
    fn test_batches_of_100() {
        let indices: Vec<u64> = (0..250).collect();
        let batches = validator_batches(&indices);
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].len(), 100);
        assert_eq!(batches[1].len(), 100);
        assert_eq!(batches[2].len(), 50);
        assert_eq!(batches[2][0], 200);
    }

    #[test]
    fn test_payload_is_comma_joined() {
        let plan = lookup_plan(&attestation(vec![5, 17, 99]), DEFAULT_API_BASE, None);
        assert_eq!(plan.requests.len(), 1);
        assert_eq!(plan.requests[0].body.indices_or_pubkey, "5,17,99");
        assert_eq!(
            plan.requests[0].url,
            "https://beaconcha.in/api/v1/validator"
        );
    }

    #[test]
    fn test_api_key_in_url() {
        let url = lookup_url("https://beaconcha.in/api/v1/", Some("secret"));
        assert_eq!(url, "https://beaconcha.in/api/v1/validator?apikey=secret");
    }

    #[test]
    fn test_payload_wire_format() {
        let body = ValidatorQuery {
            indices_or_pubkey: "1,2".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"indicesOrPubkey":"1,2"}"#);
    }

    #[test]
    fn test_merge_preserves_request_order() {
        let att = attestation((0..3).collect());
        let responses = vec![
            ValidatorLookupResponse {
                data: vec![
                    ValidatorInfo {
                        pubkey: "0xaa".into(),
                        validatorindex: Some(0),
                    },
                    ValidatorInfo {
                        pubkey: "0xbb".into(),
                        validatorindex: Some(1),
                    },
                ],
            },
            ValidatorLookupResponse {
                data: vec![ValidatorInfo {
                    pubkey: "0xcc".into(),
                    validatorindex: Some(2),
                }],
            },
        ];
        let set = merge_lookup_responses(&att, &responses);
        assert_eq!(set.block_slot, 11046320);
        assert_eq!(set.validators.len(), 3);
        assert_eq!(set.validators[2].pubkey, "0xcc");
    }
}
