//! Elliptic Curve Primitives
//!
//! Short-Weierstrass curve arithmetic behind the `p256k1_api::Curve` trait.
//! Points cross the public boundary in affine form only; Jacobian
//! coordinates are an internal detail of each curve module.

pub mod p256k1; // For secp256k1

pub use p256k1::P256k1;

#[cfg(feature = "std")]
pub use p256k1::shared_curve;
