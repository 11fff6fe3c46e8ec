//! Named-curve trait
//!
//! This is the capability set that signature, key-agreement and point
//! encoding code consume. Implementations operate on affine points; any
//! projective representation stays internal.

use crate::{AffinePoint, CurveParams, Result};
use num_bigint::BigUint;

/// Group operations on a short-Weierstrass curve with a = 0
///
/// The point at infinity cannot be written in affine coordinates, so every
/// operation that may produce it returns `Option<AffinePoint>` with `None`
/// standing for the identity.
pub trait Curve {
    /// The parameter set of this curve
    fn params(&self) -> &CurveParams;

    /// Check whether (x, y) satisfies y² ≡ x³ + b (mod p).
    ///
    /// The coordinates are not range checked; both sides are reduced mod p
    /// before they are compared.
    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool;

    /// Group addition `p1 + p2`.
    ///
    /// Equal inputs are doubled. Inverse inputs give `None`.
    fn add(&self, p1: &AffinePoint, p2: &AffinePoint) -> Option<AffinePoint>;

    /// Group doubling `2 * p`
    fn double(&self, p: &AffinePoint) -> Option<AffinePoint>;

    /// Compute `k * base` where `k` is a big-endian unsigned integer of any length.
    ///
    /// Returns `None` when the result is the identity, which always happens
    /// for a zero scalar.
    fn scalar_mult(&self, base: &AffinePoint, k: &[u8]) -> Option<AffinePoint>;

    /// Compute `k * G` for the curve's base point G
    fn scalar_base_mult(&self, k: &[u8]) -> Option<AffinePoint> {
        self.scalar_mult(&self.params().generator(), k)
    }

    /// Build a point from coordinates, rejecting anything off the curve
    fn checked_point(&self, x: BigUint, y: BigUint) -> Result<AffinePoint>;
}
