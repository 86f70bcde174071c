//! Data Sanitization
//!
//! Numerical guards around the decay model.
//!
//! Functions:
//! - Decay rate validation
//! - Strength flooring and rounding

use crate::error::{DecayError, Result};
use crate::types::STRENGTH_DECIMALS;

/// 检查数值是否无效 (NaN 或 Inf)
pub fn is_invalid(value: f64) -> bool {
    value.is_nan() || value.is_infinite()
}

/// Validate a decay constant.
///
/// `0` is legal and yields a flat curve. Negative or non-finite rates would
/// produce a growing or undefined "decay" and are rejected.
pub fn validate_decay_rate(decay_rate: f64) -> Result<f64> {
    if is_invalid(decay_rate) {
        return Err(DecayError::invalid(format!(
            "decay rate must be a finite number, got {decay_rate}"
        )));
    }
    if decay_rate < 0.0 {
        return Err(DecayError::invalid(format!(
            "decay rate must not be negative, got {decay_rate}"
        )));
    }
    // -0.0 would otherwise flow through as a distinct value
    Ok(decay_rate.abs())
}

/// Floor a strength at 0; NaN collapses to 0.
pub fn floor_strength(strength_pct: f64) -> f64 {
    if strength_pct.is_nan() {
        return 0.0;
    }
    strength_pct.max(0.0)
}

/// Round half away from zero to [`STRENGTH_DECIMALS`] places
pub fn round_pct(value: f64) -> f64 {
    let scale = 10f64.powi(STRENGTH_DECIMALS);
    (value * scale).round() / scale
}
