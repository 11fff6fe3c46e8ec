//! Value types shared by every curve implementation
//!
//! Points and parameters are plain values. The point at infinity has no
//! affine coordinates and is represented as `None` wherever an operation
//! can produce it.

use num_bigint::BigUint;

/// Parameters of a short-Weierstrass curve y² = x³ + b over F_p
///
/// The a-coefficient is fixed at zero for every curve described by this type.
/// A value is validated once when it is built and treated as read-only after that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    /// Canonical name of the curve
    pub name: &'static str,

    /// The prime field modulus
    pub p: BigUint,

    /// Order of the subgroup generated by the base point
    pub n: BigUint,

    /// The 'b' coefficient
    pub b: BigUint,

    /// x-coordinate of the base point
    pub gx: BigUint,

    /// y-coordinate of the base point
    pub gy: BigUint,

    /// Bit length of `p`
    pub bit_size: usize,
}

impl CurveParams {
    /// The base point G in affine coordinates
    pub fn generator(&self) -> AffinePoint {
        AffinePoint::new(self.gx.clone(), self.gy.clone())
    }

    /// Number of bytes needed to hold one field element.
    ///
    /// Point encoders use this as the width of each coordinate.
    pub fn field_size_bytes(&self) -> usize {
        (self.bit_size + 7) / 8
    }
}

/// A finite point in affine coordinates (x, y)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AffinePoint {
    /// x-coordinate
    pub x: BigUint,
    /// y-coordinate
    pub y: BigUint,
}

impl AffinePoint {
    /// Create a point from its coordinates. No curve check is made.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    /// The additive inverse (x, p - y) with respect to the modulus `p`
    pub fn negate(&self, p: &BigUint) -> Self {
        let y = (p - (&self.y % p)) % p;
        Self {
            x: self.x.clone(),
            y,
        }
    }
}
