//! Multi-year ROI projections
//!
//! Appreciation compounds year over year; yield accrues as simple interest
//! (`apr * year`) on top of it and is never reinvested.

use serde::Serialize;

use crate::error::{EngineError, Result};
use crate::numeric::{require_finite, require_positive, round2, serialize_fixed2};
use crate::project::ProjectTerms;

/// Default projection horizon in years
pub const DEFAULT_PROJECTION_YEARS: u32 = 5;

/// One year of a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiProjection {
    pub year: u32,
    /// Investment value after `year` years of appreciation
    #[serde(serialize_with = "serialize_fixed2")]
    pub projected_value: f64,
    /// Appreciation-only return, percent
    #[serde(serialize_with = "serialize_fixed2")]
    pub cumulative_return: f64,
    /// Flat yield for the year, percent
    #[serde(serialize_with = "serialize_fixed2")]
    pub annual_yield: f64,
    /// Appreciation plus accumulated simple yield, percent
    #[serde(serialize_with = "serialize_fixed2")]
    pub total_roi: f64,
}

/// Year-by-year projection of `investment_amount` over `years` years
pub fn generate_roi_projections(
    terms: &ProjectTerms,
    investment_amount: f64,
    years: u32,
) -> Result<Vec<RoiProjection>> {
    terms.validate()?;
    require_positive("investmentAmount", investment_amount)?;
    if years == 0 {
        return Err(EngineError::invalid("years", "must be at least 1"));
    }

    let growth = 1.0 + terms.value_growth / 100.0;
    let mut current_value = investment_amount;
    let mut projections = Vec::with_capacity(years as usize);

    for year in 1..=years {
        current_value *= growth;
        let cumulative_return = (current_value - investment_amount) / investment_amount * 100.0;
        let total_roi = cumulative_return + terms.apr * year as f64;

        if !current_value.is_finite() {
            return Err(EngineError::invalid(
                "years",
                format!("projected value overflows at year {}", year),
            ));
        }
        require_finite("totalRoi", total_roi)?;

        projections.push(RoiProjection {
            year,
            projected_value: round2(current_value),
            cumulative_return: round2(cumulative_return),
            annual_yield: round2(terms.apr),
            total_roi: round2(total_roi),
        });
    }

    Ok(projections)
}
