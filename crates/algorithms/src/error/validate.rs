//! Validation utilities for curve primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that a point lies on the named curve
#[inline(always)]
pub fn on_curve(condition: bool, curve: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Point { curve });
    }
    Ok(())
}
