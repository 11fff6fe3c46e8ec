//! Public API traits and types for the p256k1 library
//!
//! This crate provides the public API surface of the workspace: the value
//! types for curve parameters and points, the `Curve` trait, and the
//! error type returned by fallible operations.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::Curve;

// Re-export the integer type used in every signature of this crate
pub use num_bigint::BigUint;
