//! secp256k1 point operations in Jacobian coordinates
//!
//! A Jacobian triple (X, Y, Z) stands for the affine point (X/Z², Y/Z³).
//! Z = 0 is the point at infinity. These values never leave the crate:
//! callers see affine points only.

use crate::ec::p256k1::field::Fp;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use p256k1_api::AffinePoint;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct JacobianPoint {
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
    pub(crate) z: BigUint,
}

impl JacobianPoint {
    pub(crate) fn identity() -> Self {
        JacobianPoint {
            x: BigUint::one(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    /// Lift an affine point with Z = 1
    pub(crate) fn from_affine(p: &AffinePoint, fp: &Fp<'_>) -> Self {
        JacobianPoint {
            x: fp.reduce(&p.x),
            y: fp.reduce(&p.y),
            z: BigUint::one(),
        }
    }

    pub(crate) fn is_identity(&self, fp: &Fp<'_>) -> bool {
        fp.is_zero(&self.z)
    }

    /// Project back to affine coordinates with one inversion.
    ///
    /// Returns `None` for the point at infinity.
    pub(crate) fn to_affine(&self, fp: &Fp<'_>) -> Option<AffinePoint> {
        let z_inv = fp.invert(&self.z)?;
        let z_inv_sq = fp.square(&z_inv);
        let z_inv_cu = fp.mul(&z_inv_sq, &z_inv);
        Some(AffinePoint::new(
            fp.mul(&self.x, &z_inv_sq),
            fp.mul(&self.y, &z_inv_cu),
        ))
    }

    /// Point addition, add-2007-bl.
    ///
    /// H = 0 means both inputs share an x-coordinate: equal points are
    /// doubled, inverse points give the identity.
    pub(crate) fn add(&self, other: &Self, fp: &Fp<'_>) -> Self {
        if self.is_identity(fp) {
            return other.clone();
        }
        if other.is_identity(fp) {
            return self.clone();
        }

        let z1z1 = fp.square(&self.z);
        let z2z2 = fp.square(&other.z);
        let u1 = fp.mul(&self.x, &z2z2);
        let u2 = fp.mul(&other.x, &z1z1);
        let s1 = fp.mul(&fp.mul(&self.y, &other.z), &z2z2);
        let s2 = fp.mul(&fp.mul(&other.y, &self.z), &z1z1);

        let h = fp.sub(&u2, &u1);
        let r = fp.double(&fp.sub(&s2, &s1));

        if h.is_zero() {
            if r.is_zero() {
                tracing::debug!("jacobian add on equal points, doubling instead");
                return self.double(fp);
            }
            tracing::debug!("jacobian add on inverse points, result is the identity");
            return Self::identity();
        }

        let i = fp.square(&fp.double(&h));
        let j = fp.mul(&h, &i);
        let v = fp.mul(&u1, &i);

        // X3 = r² - J - 2V
        let x3 = fp.sub(&fp.sub(&fp.square(&r), &j), &fp.double(&v));
        // Y3 = r(V - X3) - 2·S1·J
        let y3 = fp.sub(
            &fp.mul(&r, &fp.sub(&v, &x3)),
            &fp.double(&fp.mul(&s1, &j)),
        );
        // Z3 = ((Z1 + Z2)² - Z1Z1 - Z2Z2)·H
        let z3 = fp.mul(
            &fp.sub(&fp.sub(&fp.square(&fp.add(&self.z, &other.z)), &z1z1), &z2z2),
            &h,
        );

        JacobianPoint { x: x3, y: y3, z: z3 }
    }

    /// Point doubling for a = 0 curves, dbl-2009-l
    pub(crate) fn double(&self, fp: &Fp<'_>) -> Self {
        if self.is_identity(fp) {
            return Self::identity();
        }

        let a = fp.square(&self.x);
        let b = fp.square(&self.y);
        let c = fp.square(&b);
        // D = 2·((X + B)² - A - C)
        let d = fp.double(&fp.sub(&fp.sub(&fp.square(&fp.add(&self.x, &b)), &a), &c));
        let e = fp.mul_small(&a, 3);
        let f = fp.square(&e);

        let x3 = fp.sub(&f, &fp.double(&d));
        let y3 = fp.sub(&fp.mul(&e, &fp.sub(&d, &x3)), &fp.mul_small(&c, 8));
        let z3 = fp.mul(&fp.double(&self.y), &self.z);

        JacobianPoint { x: x3, y: y3, z: z3 }
    }
}
