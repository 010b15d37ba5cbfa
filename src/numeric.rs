//! Numeric primitives shared by every calculator
//!
//! One rounding policy (half away from zero at a fixed number of decimals)
//! and the precondition guards the calculators run before computing.

use crate::error::{EngineError, Result};
use serde::Serializer;

/// Decimal places used for every monetary and percentage output
pub const OUTPUT_DECIMALS: i32 = 2;

/// Round to `places` decimals, half away from zero
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// Round to the engine's output precision (2 decimals)
pub fn round2(value: f64) -> f64 {
    round_to(value, OUTPUT_DECIMALS)
}

/// Reject NaN and infinities
pub fn require_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::invalid(field, format!("must be finite, got {}", value)))
    }
}

/// Require a finite value strictly greater than zero
pub fn require_positive(field: &'static str, value: f64) -> Result<f64> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(EngineError::invalid(
            field,
            format!("must be greater than zero, got {}", value),
        ))
    }
}

/// Require a finite value greater than or equal to zero
pub fn require_non_negative(field: &'static str, value: f64) -> Result<f64> {
    require_finite(field, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(EngineError::invalid(
            field,
            format!("must not be negative, got {}", value),
        ))
    }
}

/// Require a percentage in (0, 100]
pub fn require_percent(field: &'static str, value: f64) -> Result<f64> {
    require_positive(field, value)?;
    if value <= 100.0 {
        Ok(value)
    } else {
        Err(EngineError::invalid(
            field,
            format!("must be at most 100, got {}", value),
        ))
    }
}

/// Serialize a money or percentage figure as a fixed 2-decimal string
///
/// Used on output records so the value survives JSON round-trips without
/// floating-point drift (`80000.0` becomes `"80000.00"`).
pub fn serialize_fixed2<S: Serializer>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.2}", round2(*value)))
}
