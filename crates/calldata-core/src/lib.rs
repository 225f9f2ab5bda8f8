//! # bls381-calldata-core
//!
//! Encodes Groth16 proofs, public signals, and verification keys over
//! BLS12-381 into the fixed-width big-endian word format an on-chain
//! pairing-check verifier consumes.
//!
//! Word format:
//! - base-field element (381 bits): two 32-byte words, high word first,
//!   always zero-padded to 128 hex characters
//! - public-signal scalar: one 32-byte word, 64 hex characters
//! - G1 point: 4 words, G2 point: 8 words (x limbs then y limbs)
//! - calldata: every word concatenated without prefixes or separators, in
//!   the order `pi_a` (negated y) → `pi_b` → `pi_c` → public signals
//!
//! All transformations are pure functions over injected document contents;
//! file and network I/O live in the callers.

pub mod calldata;
pub mod encode;
pub mod errors;
pub mod export;
pub mod fields;
pub mod key;
pub mod proof;
pub mod types;

pub use calldata::{build_calldata, encode_public_signals, ProofCalldataDocument};
pub use encode::{encode_fp, encode_g1, encode_g2, encode_scalar, FP_HEX_LEN, WORD_HEX_LEN};
pub use errors::{CalldataError, FormatError, ParseError};
pub use export::{proof_export, verification_key_export, VerificationKeyExport};
pub use fields::{fp_modulus, fp_negate, FieldValue, FP_MODULUS_BE};
pub use key::{encode_verification_key, VerificationKey, VerificationKeyDocument};
pub use proof::{encode_proof, EncodedProof, Proof, ProofDocument};
pub use types::{EncodedG1, EncodedG2, G1Point, G2Point};
