//! # p256k1
//!
//! The secp256k1 named curve ("P-256K1"): curve parameters, membership
//! checks and Jacobian point arithmetic behind a generic curve interface.
//!
//! ## Usage
//!
//! ```
//! use p256k1::prelude::*;
//!
//! let curve = P256k1::new();
//! let g = curve.scalar_base_mult(&[0x01]).unwrap();
//! assert_eq!(g, curve.params().generator());
//!
//! // The identity has no affine coordinates
//! assert!(curve.scalar_base_mult(&[0x00]).is_none());
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` impls and the process-wide
//!   `shared_curve()` instance. Without it an allocator is still required.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`p256k1-api`]: Value types, the `Curve` trait and the error type
//! - [`p256k1-params`]: Curve constants
//! - [`p256k1-algorithms`]: The arithmetic engine

#![cfg_attr(not(feature = "std"), no_std)]

pub use p256k1_algorithms as algorithms;
pub use p256k1_api as api;
pub use p256k1_params as params;

/// Common imports for p256k1 users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export value types and the curve trait
    pub use crate::api::{AffinePoint, BigUint, Curve, CurveParams};

    // Re-export the curve implementation
    pub use crate::algorithms::P256k1;

    #[cfg(feature = "std")]
    pub use crate::algorithms::shared_curve;
}
