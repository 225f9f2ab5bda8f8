//! BLS12-381 point decompression and public-key aggregation
//!
//! Beacon-chain objects use the eth2 compressed encoding: big-endian x
//! coordinate with three flag bits in the most significant byte
//! (`0x80` compressed, `0x40` infinity, `0x20` y is the lexicographically
//! larger root). Public keys are 48-byte G1 points, signatures 96-byte G2
//! points with the x coordinate serialized as `c1 || c0`.
//!
//! Curve arithmetic is delegated to arkworks; this module only maps between
//! the wire encoding, affine points, and the verifier word format.

use ark_bls12_381::{Fq, Fq2, G1Affine, G1Projective, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{BigInteger, PrimeField};
use ark_std::Zero;
use num_bigint::BigUint;
use serde::Serialize;

use bls381_calldata_core::{encode_fp, fp_modulus};

use crate::errors::BlsError;
use crate::types::{Attestation, ValidatorInfo, ValidatorSet};

/// Compressed G1 public key size in bytes
pub const PUBKEY_BYTES: usize = 48;

/// Compressed G2 signature size in bytes
pub const SIGNATURE_BYTES: usize = 96;

/// Flag bit: encoding is compressed
const COMPRESSION_FLAG: u8 = 0x80;

/// Flag bit: point at infinity
const INFINITY_FLAG: u8 = 0x40;

/// Flag bit: y is the lexicographically larger root
const SIGN_FLAG: u8 = 0x20;

/// Mask clearing the flag bits from the leading byte
const FLAG_MASK: u8 = 0x1f;

/// Decompress a `0x`-prefixed hex public key to an affine G1 point
pub fn pubkey_from_hex(pubkey: &str) -> Result<G1Affine, BlsError> {
    let bytes = decode_hex("pubkey", pubkey, PUBKEY_BYTES)?;
    g1_from_compressed("pubkey", &bytes)
}

/// Decompress a `0x`-prefixed hex aggregate signature to an affine G2 point
pub fn signature_from_hex(signature: &str) -> Result<G2Affine, BlsError> {
    let bytes = decode_hex("signature", signature, SIGNATURE_BYTES)?;
    g2_from_compressed("signature", &bytes)
}

/// Aggregate a validator set's public keys by point addition
pub fn aggregate_pubkeys(validators: &[ValidatorInfo]) -> Result<G1Affine, BlsError> {
    if validators.is_empty() {
        return Err(BlsError::EmptyValidatorSet);
    }
    let mut acc = G1Projective::zero();
    for validator in validators {
        acc += pubkey_from_hex(&validator.pubkey)?;
    }
    Ok(acc.into_affine())
}

/// Affine G1 coordinates in verifier word format
#[derive(Debug, Clone, Serialize)]
pub struct EncodedG1Coordinates {
    pub x: [String; 2],
    pub y: [String; 2],
}

/// Affine G2 coordinates in verifier word format, `(c0, c1)` per coordinate
#[derive(Debug, Clone, Serialize)]
pub struct EncodedG2Coordinates {
    pub x: [[String; 2]; 2],
    pub y: [[String; 2]; 2],
}

/// Output document for the aggregation experiment
#[derive(Debug, Clone, Serialize)]
pub struct AggregationDocument {
    pub block_slot: u64,
    pub block_root: String,
    pub validator_count: usize,
    pub aggregate_pubkey: EncodedG1Coordinates,
    pub signature: EncodedG2Coordinates,
}

/// Aggregate a validator set and decompress its attestation signature
pub fn aggregation_document(
    set: &ValidatorSet,
    attestation: &Attestation,
) -> Result<AggregationDocument, BlsError> {
    let pubkey = aggregate_pubkeys(&set.validators)?;
    let signature = signature_from_hex(&attestation.signature)?;

    Ok(AggregationDocument {
        block_slot: set.block_slot,
        block_root: set.block_root.clone(),
        validator_count: set.validators.len(),
        aggregate_pubkey: g1_coordinates("aggregate_pubkey", &pubkey)?,
        signature: g2_coordinates("signature", &signature)?,
    })
}

/// Export an affine G1 point as word pairs
pub fn g1_coordinates(
    field: &'static str,
    point: &G1Affine,
) -> Result<EncodedG1Coordinates, BlsError> {
    if point.infinity {
        return Err(BlsError::PointAtInfinity { field });
    }
    Ok(EncodedG1Coordinates {
        x: fp_words(&point.x)?,
        y: fp_words(&point.y)?,
    })
}

/// Export an affine G2 point as word pairs, one pair per limb
pub fn g2_coordinates(
    field: &'static str,
    point: &G2Affine,
) -> Result<EncodedG2Coordinates, BlsError> {
    if point.infinity {
        return Err(BlsError::PointAtInfinity { field });
    }
    Ok(EncodedG2Coordinates {
        x: [fp_words(&point.x.c0)?, fp_words(&point.x.c1)?],
        y: [fp_words(&point.y.c0)?, fp_words(&point.y.c1)?],
    })
}

fn fp_words(value: &Fq) -> Result<[String; 2], BlsError> {
    let big = BigUint::from_bytes_be(&value.into_bigint().to_bytes_be());
    Ok(encode_fp(&big)?)
}

fn decode_hex(field: &'static str, value: &str, expected: usize) -> Result<Vec<u8>, BlsError> {
    let stripped = value.strip_prefix("0x").unwrap_or(value);
    let bytes = hex::decode(stripped).map_err(|source| BlsError::Hex { field, source })?;
    if bytes.len() != expected {
        return Err(BlsError::InvalidLength {
            field,
            expected,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}

/// Read the flag bits and return (greatest, is_infinity)
fn read_flags(field: &'static str, leading: u8) -> Result<(bool, bool), BlsError> {
    if leading & COMPRESSION_FLAG == 0 {
        return Err(BlsError::NotCompressed { field });
    }
    Ok((leading & SIGN_FLAG != 0, leading & INFINITY_FLAG != 0))
}

fn fq_from_be(field: &'static str, bytes: &[u8]) -> Result<Fq, BlsError> {
    if BigUint::from_bytes_be(bytes) >= fp_modulus() {
        return Err(BlsError::NonCanonicalCoordinate { field });
    }
    Ok(Fq::from_be_bytes_mod_order(bytes))
}

fn g1_from_compressed(field: &'static str, bytes: &[u8]) -> Result<G1Affine, BlsError> {
    let (greatest, infinity) = read_flags(field, bytes[0])?;

    let mut x_bytes = [0u8; PUBKEY_BYTES];
    x_bytes.copy_from_slice(bytes);
    x_bytes[0] &= FLAG_MASK;

    if infinity {
        if greatest || x_bytes.iter().any(|b| *b != 0) {
            return Err(BlsError::InvalidInfinity { field });
        }
        return Ok(G1Affine::zero());
    }

    let x = fq_from_be(field, &x_bytes)?;
    let point = G1Affine::get_point_from_x_unchecked(x, greatest)
        .ok_or(BlsError::NotOnCurve { field })?;
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(BlsError::WrongSubgroup { field });
    }
    Ok(point)
}

fn g2_from_compressed(field: &'static str, bytes: &[u8]) -> Result<G2Affine, BlsError> {
    let (greatest, infinity) = read_flags(field, bytes[0])?;

    // x is serialized c1 || c0, flags on the first byte of c1
    let mut c1_bytes = [0u8; PUBKEY_BYTES];
    c1_bytes.copy_from_slice(&bytes[..PUBKEY_BYTES]);
    c1_bytes[0] &= FLAG_MASK;
    let c0_bytes = &bytes[PUBKEY_BYTES..];

    if infinity {
        if greatest
            || c1_bytes.iter().any(|b| *b != 0)
            || c0_bytes.iter().any(|b| *b != 0)
        {
            return Err(BlsError::InvalidInfinity { field });
        }
        return Ok(G2Affine::zero());
    }

    let x = Fq2::new(fq_from_be(field, c0_bytes)?, fq_from_be(field, &c1_bytes)?);
    let point = G2Affine::get_point_from_x_unchecked(x, greatest)
        .ok_or(BlsError::NotOnCurve { field })?;
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(BlsError::WrongSubgroup { field });
    }
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Canonical compressed G1 generator
    const G1_GENERATOR_HEX: &str = "0x97f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb";

    /// Canonical compressed G2 generator
    const G2_GENERATOR_HEX: &str = "0x93e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8";

    /// G1 generator x, big-endian hex without flags
    const G1_GENERATOR_X_HEX: &str = "17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb";

    #[test]
    fn test_g1_generator_decompression() {
        let point = pubkey_from_hex(G1_GENERATOR_HEX).unwrap();
        assert_eq!(point, G1Affine::generator());
    }

    #[test]
    fn test_g2_generator_decompression() {
        let point = signature_from_hex(G2_GENERATOR_HEX).unwrap();
        assert_eq!(point, G2Affine::generator());
    }

    #[test]
    fn test_sign_flag_selects_negated_point() {
        let mut bytes = hex::decode(&G1_GENERATOR_HEX[2..]).unwrap();
        bytes[0] ^= SIGN_FLAG;
        let flipped = g1_from_compressed("pubkey", &bytes).unwrap();
        assert_eq!(flipped, -G1Affine::generator());
    }

    #[test]
    fn test_infinity_encoding() {
        let mut bytes = vec![0u8; PUBKEY_BYTES];
        bytes[0] = COMPRESSION_FLAG | INFINITY_FLAG;
        let point = g1_from_compressed("pubkey", &bytes).unwrap();
        assert!(point.infinity);
    }

    #[test]
    fn test_infinity_with_residual_bits_rejected() {
        let mut bytes = vec![0u8; PUBKEY_BYTES];
        bytes[0] = COMPRESSION_FLAG | INFINITY_FLAG;
        bytes[47] = 1;
        assert!(matches!(
            g1_from_compressed("pubkey", &bytes),
            Err(BlsError::InvalidInfinity { .. })
        ));
    }

    #[test]
    fn test_uncompressed_leading_byte_rejected() {
        let bytes = vec![0u8; PUBKEY_BYTES];
        assert!(matches!(
            g1_from_compressed("pubkey", &bytes),
            Err(BlsError::NotCompressed { .. })
        ));
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(matches!(
            pubkey_from_hex("0xdeadbeef"),
            Err(BlsError::InvalidLength {
                field: "pubkey",
                expected: PUBKEY_BYTES,
                actual: 4,
            })
        ));
    }

    #[test]
    fn test_aggregate_two_generators_doubles() {
        let validator = ValidatorInfo {
            pubkey: G1_GENERATOR_HEX.to_string(),
            validatorindex: None,
        };
        let sum = aggregate_pubkeys(&[validator.clone(), validator]).unwrap();
        let expected =
            (G1Projective::from(G1Affine::generator()) + G1Affine::generator()).into_affine();
        assert_eq!(sum, expected);
    }

    #[test]
    fn test_aggregate_empty_set_rejected() {
        assert!(matches!(
            aggregate_pubkeys(&[]),
            Err(BlsError::EmptyValidatorSet)
        ));
    }

    #[test]
    fn test_generator_coordinate_words() {
        let point = pubkey_from_hex(G1_GENERATOR_HEX).unwrap();
        let coords = g1_coordinates("aggregate_pubkey", &point).unwrap();

        let joined = format!("{}{}", &coords.x[0][2..], &coords.x[1][2..]);
        let expected = format!("{:0>128}", G1_GENERATOR_X_HEX);
        assert_eq!(joined, expected);
    }

    #[test]
    fn test_infinity_has_no_coordinates() {
        assert!(matches!(
            g1_coordinates("aggregate_pubkey", &G1Affine::zero()),
            Err(BlsError::PointAtInfinity { .. })
        ));
    }
}
