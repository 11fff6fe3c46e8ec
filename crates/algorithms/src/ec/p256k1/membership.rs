//! Curve membership check

use crate::ec::p256k1::field::Fp;
use num_bigint::BigUint;
use p256k1_api::CurveParams;

/// y² ≡ x³ + b (mod p), with both sides computed independently.
///
/// Out-of-range coordinates are reduced, not rejected.
pub(crate) fn is_on_curve(params: &CurveParams, x: &BigUint, y: &BigUint) -> bool {
    let fp = Fp::new(&params.p);
    let lhs = fp.square(y);
    let rhs = fp.add(&fp.mul(&fp.square(x), x), &params.b);
    lhs == rhs
}
