//! Validation utilities shared by the engine crates

use super::types::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, message));
    }
    Ok(())
}
