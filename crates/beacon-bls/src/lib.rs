//! # beacon-bls
//!
//! Tooling for the beacon-chain side of the on-chain BLS verification
//! experiments: plan validator lookups against the beaconcha.in API (100
//! validators per request), merge lookup responses into a validator-set
//! document, aggregate validator public keys, and decompress attestation
//! signatures to affine coordinates in the verifier word format.
//!
//! Signing-root computation and pairing verification are out of scope; this
//! crate stops at curve points and their encodings.

pub mod aggregate;
pub mod api;
pub mod errors;
pub mod types;

pub use aggregate::{
    aggregate_pubkeys, aggregation_document, g1_coordinates, g2_coordinates, pubkey_from_hex,
    signature_from_hex, AggregationDocument, EncodedG1Coordinates, EncodedG2Coordinates,
    PUBKEY_BYTES, SIGNATURE_BYTES,
};
pub use api::{
    lookup_plan, lookup_url, merge_lookup_responses, validator_batches, LookupPlan, LookupRequest,
    ValidatorQuery, DEFAULT_API_BASE, VALIDATOR_BATCH_SIZE,
};
pub use errors::BlsError;
pub use types::{
    Attestation, AttestationsDocument, ValidatorInfo, ValidatorLookupResponse, ValidatorSet,
};
