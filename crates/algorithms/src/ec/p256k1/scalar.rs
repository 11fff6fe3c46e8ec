//! secp256k1 scalar multiplication

use crate::ec::p256k1::{field::Fp, point::JacobianPoint};
use p256k1_api::{AffinePoint, CurveParams};

/// Left-to-right double-and-add over every bit of the big-endian scalar `k`.
///
/// The accumulator starts out empty. The first set bit loads it with the
/// base point; every later bit doubles it and, when set, adds the base point.
/// Leading zero bits therefore cost nothing, and no identity value is needed
/// to start the ladder.
///
/// Returns `None` when `k` is zero or `k * base` is the identity.
pub(crate) fn scalar_mult(params: &CurveParams, base: &AffinePoint, k: &[u8]) -> Option<AffinePoint> {
    let fp = Fp::new(&params.p);
    let base = JacobianPoint::from_affine(base, &fp);

    let mut acc: Option<JacobianPoint> = None;
    for byte in k {
        for bit_pos in (0..8).rev() {
            let bit_set = (byte >> bit_pos) & 1 == 1;
            acc = match acc {
                None if bit_set => Some(base.clone()),
                None => None,
                Some(point) => {
                    let doubled = point.double(&fp);
                    Some(if bit_set { doubled.add(&base, &fp) } else { doubled })
                }
            };
        }
    }

    let result = match acc {
        Some(point) => point.to_affine(&fp),
        None => {
            tracing::trace!("zero scalar, no affine result");
            return None;
        }
    };
    if result.is_none() {
        tracing::trace!("scalar multiple is the identity, no affine result");
    }
    result
}
