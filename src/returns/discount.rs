//! Discounting: net present value, present value and future value
//!
//! Rates are passed as percentages (8.0 for 8%). Periods are whole or
//! fractional years.

use crate::error::{EngineError, Result};
use crate::numeric::{require_finite, require_non_negative, require_positive, round2};

/// Default compounding frequency for [`future_value`] (monthly)
pub const DEFAULT_COMPOUNDING_FREQUENCY: u32 = 12;

/// Net present value of an investment followed by periodic cash flows
///
/// `initial_investment` is an outflow at time 0; the cash flow at index `i`
/// is discounted by `(1 + rate)^(i + 1)`.
pub fn calculate_npv(initial_investment: f64, cash_flows: &[f64], discount_rate_pct: f64) -> Result<f64> {
    require_positive("initialInvestment", initial_investment)?;
    require_non_negative("discountRate", discount_rate_pct)?;
    validate_cash_flows(cash_flows)?;

    let npv = -initial_investment + discounted_sum(cash_flows, discount_rate_pct / 100.0);
    require_finite("npv", npv)?;
    Ok(round2(npv))
}

/// Value today of an amount received after `periods` years
pub fn present_value(future_value: f64, discount_rate_pct: f64, periods: f64) -> Result<f64> {
    require_positive("futureValue", future_value)?;
    require_non_negative("discountRate", discount_rate_pct)?;
    require_non_negative("periods", periods)?;

    let pv = future_value / (1.0 + discount_rate_pct / 100.0).powf(periods);
    Ok(round2(pv))
}

/// Value after `periods` years of an amount compounded `compounding_frequency` times a year
pub fn future_value(
    present_value: f64,
    interest_rate_pct: f64,
    periods: f64,
    compounding_frequency: u32,
) -> Result<f64> {
    require_positive("presentValue", present_value)?;
    require_non_negative("interestRate", interest_rate_pct)?;
    require_non_negative("periods", periods)?;
    if compounding_frequency == 0 {
        return Err(EngineError::invalid(
            "compoundingFrequency",
            "must be at least 1",
        ));
    }

    let freq = compounding_frequency as f64;
    let fv = present_value * (1.0 + interest_rate_pct / 100.0 / freq).powf(periods * freq);
    require_finite("futureValue", fv)?;
    Ok(round2(fv))
}

/// Sum of cash flows discounted at a decimal rate, first flow at period 1
fn discounted_sum(cash_flows: &[f64], rate: f64) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(i, &cf)| cf / (1.0 + rate).powi(i as i32 + 1))
        .sum()
}

pub(crate) fn validate_cash_flows(cash_flows: &[f64]) -> Result<()> {
    if let Some(bad) = cash_flows.iter().find(|cf| !cf.is_finite()) {
        return Err(EngineError::invalid(
            "cashFlows",
            format!("must contain only finite values, got {}", bad),
        ));
    }
    Ok(())
}
