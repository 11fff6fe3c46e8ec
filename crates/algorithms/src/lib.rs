//! Curve arithmetic for the p256k1 library
//!
//! This crate holds the arithmetic engine of the secp256k1 named curve:
//! construction and validation of the curve parameters, the membership
//! check, Jacobian point addition and doubling, and double-and-add scalar
//! multiplication. Everything is exposed through the `Curve` trait of
//! `p256k1-api`.
//!
//! The library is usable without `std` as long as an allocator is
//! available; the big-integer backend needs one.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic Curve primitives
#[cfg(feature = "ec")]
pub mod ec;
#[cfg(feature = "ec")]
pub use ec::P256k1;

#[cfg(all(feature = "ec", feature = "std"))]
pub use ec::shared_curve;
