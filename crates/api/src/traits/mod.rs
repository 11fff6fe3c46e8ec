//! Capability traits implemented by curve types

pub mod curve;

pub use curve::Curve;
