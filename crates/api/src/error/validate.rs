//! Validation utilities shared by the cipher modules
//!
//! All checks run before any text is transformed, so a failing call never
//! produces a partial result.

use super::{Error, Result};

/// Validate that cleaned input still holds at least one letter
#[inline(always)]
pub fn non_empty(context: &'static str, cleaned: &str) -> Result<()> {
    if cleaned.is_empty() {
        return Err(Error::EmptyInput { context });
    }
    Ok(())
}

/// Validate that a key parameter lies in the inclusive range `[min, max]`
#[inline(always)]
pub fn in_range(context: &'static str, value: i64, min: i64, max: i64) -> Result<()> {
    if value < min || value > max {
        return Err(Error::InvalidKey {
            context,
            message: format!("must be between {} and {}, got {}", min, max, value),
        });
    }
    Ok(())
}

/// Validate that a letter count splits evenly into pairs
#[inline(always)]
pub fn even_length(context: &'static str, actual: usize) -> Result<()> {
    if actual % 2 != 0 {
        return Err(Error::OddLength { context, actual });
    }
    Ok(())
}
