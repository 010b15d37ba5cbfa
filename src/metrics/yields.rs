//! Absolute yield figures from a project's APR

use serde::Serialize;

use super::tokenomics::calculate_tokenomics;
use crate::error::{EngineError, Result};
use crate::numeric::{require_finite, round2, serialize_fixed2};
use crate::project::ProjectTerms;

const MONTHS_PER_YEAR: f64 = 12.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Rental yield of a project
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldMetrics {
    #[serde(serialize_with = "serialize_fixed2")]
    pub annual_rent: f64,
    #[serde(serialize_with = "serialize_fixed2")]
    pub monthly_rent: f64,
    #[serde(serialize_with = "serialize_fixed2")]
    pub daily_yield: f64,
    #[serde(serialize_with = "serialize_fixed2")]
    pub yield_per_token: f64,
}

/// Annual, monthly, daily and per-token yield
pub fn calculate_yield_metrics(terms: &ProjectTerms) -> Result<YieldMetrics> {
    let raw = raw_yield_metrics(terms)?;
    Ok(YieldMetrics {
        annual_rent: round2(raw.annual_rent),
        monthly_rent: round2(raw.monthly_rent),
        daily_yield: round2(raw.daily_yield),
        yield_per_token: round2(raw.yield_per_token),
    })
}

/// Unrounded figures, for calculators that build on them
pub(crate) fn raw_yield_metrics(terms: &ProjectTerms) -> Result<YieldMetrics> {
    let tokenomics = calculate_tokenomics(terms)?;
    if tokenomics.total_tokens == 0 {
        return Err(EngineError::invalid(
            "totalTokens",
            "project issues no tokens, per-token yield is undefined",
        ));
    }

    let annual_rent = terms.total_price * terms.apr / 100.0;
    require_finite("annualRent", annual_rent)?;

    Ok(YieldMetrics {
        annual_rent,
        monthly_rent: annual_rent / MONTHS_PER_YEAR,
        daily_yield: annual_rent / DAYS_PER_YEAR,
        yield_per_token: annual_rent / tokenomics.total_tokens as f64,
    })
}
