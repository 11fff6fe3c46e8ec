//! Testing utilities for the p256k1 library
pub mod vectors;
