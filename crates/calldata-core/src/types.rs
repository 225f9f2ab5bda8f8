//! Point types shared by proof and verification-key documents
//!
//! Input coordinate arrays follow the snarkjs export shape: G1 points are
//! `[x, y]` (a trailing projective "1" may be present and is ignored), G2
//! points are `[[x0, x1], [y0, y1]]` with each coordinate split into two
//! base-field limbs.

use num_bigint::BigUint;

use crate::errors::ParseError;
use crate::fields::FieldValue;

/// Four `0x`-prefixed 32-byte words: the encoded form of a G1 point
pub type EncodedG1 = [String; 4];

/// Two rows of four words: the encoded form of a G2 point
pub type EncodedG2 = [EncodedG1; 2];

/// Affine G1 point over the base field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct G1Point {
    pub x: BigUint,
    pub y: BigUint,
}

impl G1Point {
    /// Build from a raw document coordinate array
    pub fn from_coords(field: &'static str, coords: &[FieldValue]) -> Result<Self, ParseError> {
        if coords.len() < 2 {
            return Err(ParseError::CoordinateCount {
                field,
                expected: 2,
                actual: coords.len(),
            });
        }
        Ok(Self {
            x: coords[0].to_biguint(field)?,
            y: coords[1].to_biguint(field)?,
        })
    }
}

/// Affine G2 point; each coordinate is two base-field limbs `(c0, c1)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct G2Point {
    pub x: [BigUint; 2],
    pub y: [BigUint; 2],
}

impl G2Point {
    /// Build from a raw document array of limb pairs
    pub fn from_coords(field: &'static str, coords: &[Vec<FieldValue>]) -> Result<Self, ParseError> {
        if coords.len() < 2 {
            return Err(ParseError::CoordinateCount {
                field,
                expected: 2,
                actual: coords.len(),
            });
        }
        let limb_pair = |pair: &[FieldValue]| -> Result<[BigUint; 2], ParseError> {
            if pair.len() < 2 {
                return Err(ParseError::CoordinateCount {
                    field,
                    expected: 2,
                    actual: pair.len(),
                });
            }
            Ok([pair[0].to_biguint(field)?, pair[1].to_biguint(field)?])
        };
        Ok(Self {
            x: limb_pair(&coords[0])?,
            y: limb_pair(&coords[1])?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fv(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn test_g1_ignores_projective_coordinate() {
        let coords = vec![fv("3"), fv("5"), fv("1")];
        let p = G1Point::from_coords("pi_a", &coords).unwrap();
        assert_eq!(p.x, BigUint::from(3u32));
        assert_eq!(p.y, BigUint::from(5u32));
    }

    #[test]
    fn test_g1_too_few_coordinates() {
        let coords = vec![fv("3")];
        assert!(matches!(
            G1Point::from_coords("pi_a", &coords),
            Err(ParseError::CoordinateCount {
                field: "pi_a",
                expected: 2,
                actual: 1,
            })
        ));
    }

    #[test]
    fn test_g2_limb_order() {
        let coords = vec![
            vec![fv("1"), fv("2")],
            vec![fv("3"), fv("4")],
            vec![fv("1"), fv("0")],
        ];
        let p = G2Point::from_coords("pi_b", &coords).unwrap();
        assert_eq!(p.x[0], BigUint::from(1u32));
        assert_eq!(p.x[1], BigUint::from(2u32));
        assert_eq!(p.y[0], BigUint::from(3u32));
        assert_eq!(p.y[1], BigUint::from(4u32));
    }

    #[test]
    fn test_g2_short_limb_pair() {
        let coords = vec![vec![fv("1")], vec![fv("3"), fv("4")]];
        assert!(G2Point::from_coords("pi_b", &coords).is_err());
    }
}
