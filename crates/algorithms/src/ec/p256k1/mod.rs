//! Koblitz secp256k1 (P-256K1) Elliptic Curve Primitives
//!
//! The curve equation is y² = x³ + 7 over the prime field F_p where:
//! - p = 2^256 - 2^32 - 977
//! - The curve order n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
//!
//! Arithmetic runs on arbitrary-precision integers and branches on the
//! data. It is not constant time.

mod field;
mod membership;
pub mod params;
mod point;
mod scalar;

pub use p256k1_params::traditional::secp256k1::{
    BIT_SIZE as P256K1_BIT_SIZE, FIELD_ELEMENT_SIZE as P256K1_FIELD_ELEMENT_SIZE,
    SCALAR_SIZE as P256K1_SCALAR_SIZE,
};

use crate::error::{to_core_result, validate};
use crate::ec::p256k1::{field::Fp, point::JacobianPoint};
use alloc::sync::Arc;
use num_bigint::BigUint;
use p256k1_api::{AffinePoint, Curve, CurveParams, Result as CoreResult};

/// The secp256k1 curve
///
/// Cloning is cheap: the parameter set is shared.
#[derive(Clone, Debug)]
pub struct P256k1 {
    params: Arc<CurveParams>,
}

impl P256k1 {
    /// Build the curve, constructing and validating its parameters
    pub fn new() -> Self {
        P256k1 {
            params: Arc::new(params::secp256k1()),
        }
    }

    /// Handle to the shared parameter set
    pub fn shared_params(&self) -> Arc<CurveParams> {
        Arc::clone(&self.params)
    }
}

impl Default for P256k1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Curve for P256k1 {
    fn params(&self) -> &CurveParams {
        &self.params
    }

    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        membership::is_on_curve(&self.params, x, y)
    }

    fn add(&self, p1: &AffinePoint, p2: &AffinePoint) -> Option<AffinePoint> {
        let fp = Fp::new(&self.params.p);
        let a = JacobianPoint::from_affine(p1, &fp);
        let b = JacobianPoint::from_affine(p2, &fp);
        a.add(&b, &fp).to_affine(&fp)
    }

    fn double(&self, p: &AffinePoint) -> Option<AffinePoint> {
        let fp = Fp::new(&self.params.p);
        JacobianPoint::from_affine(p, &fp).double(&fp).to_affine(&fp)
    }

    fn scalar_mult(&self, base: &AffinePoint, k: &[u8]) -> Option<AffinePoint> {
        scalar::scalar_mult(&self.params, base, k)
    }

    fn checked_point(&self, x: BigUint, y: BigUint) -> CoreResult<AffinePoint> {
        to_core_result(
            validate::on_curve(self.is_on_curve(&x, &y), self.params.name),
            "P256k1::checked_point",
        )?;
        Ok(AffinePoint::new(x, y))
    }
}

/// The process-wide curve instance.
///
/// Parameters are built once, on first use, behind a synchronized cell and
/// are read-only afterwards. Every call returns the same instance.
#[cfg(feature = "std")]
pub fn shared_curve() -> &'static P256k1 {
    static CURVE: once_cell::sync::Lazy<P256k1> = once_cell::sync::Lazy::new(P256k1::new);
    &CURVE
}
