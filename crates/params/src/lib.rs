//! Constant values for the p256k1 workspace
//!
//! This crate only holds literals. Parsing and validation of the curve
//! parameters happens in `p256k1-algorithms`.

#![no_std]

pub mod traditional;
