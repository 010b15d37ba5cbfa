//! Compound annual growth rate

use crate::error::Result;
use crate::numeric::{require_finite, require_positive, round2};

/// Constant annual growth (percent) taking `initial_value` to `final_value` over `years`
pub fn calculate_cagr(initial_value: f64, final_value: f64, years: f64) -> Result<f64> {
    require_positive("initialValue", initial_value)?;
    require_positive("finalValue", final_value)?;
    require_positive("years", years)?;

    let cagr = (final_value / initial_value).powf(1.0 / years) - 1.0;
    require_finite("cagr", cagr)?;
    Ok(round2(cagr * 100.0))
}
