//! Investment-weighted aggregation across several holdings

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::numeric::{require_finite, require_positive, round2, serialize_fixed2};
use crate::project::ProjectTerms;

/// Capital placed in one project
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub terms: ProjectTerms,
    pub amount: f64,
}

impl Holding {
    pub fn new(terms: ProjectTerms, amount: f64) -> Self {
        Self { terms, amount }
    }
}

/// Portfolio-level figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    pub holding_count: usize,
    #[serde(serialize_with = "serialize_fixed2")]
    pub total_investment: f64,
    #[serde(serialize_with = "serialize_fixed2")]
    pub average_apr: f64,
    /// Weighted target IRR of the projects held
    #[serde(serialize_with = "serialize_fixed2")]
    pub average_irr: f64,
    #[serde(serialize_with = "serialize_fixed2")]
    pub average_value_growth: f64,
    #[serde(serialize_with = "serialize_fixed2")]
    pub projected_annual_yield: f64,
}

/// Aggregate `holdings`, weighting each by its share of total capital
pub fn calculate_portfolio_metrics(holdings: &[Holding]) -> Result<PortfolioMetrics> {
    if holdings.is_empty() {
        return Err(EngineError::invalid("investments", "must not be empty"));
    }
    for holding in holdings {
        holding.terms.validate()?;
        require_positive("amount", holding.amount)?;
    }

    let total_investment: f64 = holdings.iter().map(|h| h.amount).sum();
    require_finite("totalInvestment", total_investment)?;

    let average_apr = weighted_average(holdings, total_investment, |t| t.apr);
    let average_irr = weighted_average(holdings, total_investment, |t| t.irr);
    let average_value_growth = weighted_average(holdings, total_investment, |t| t.value_growth);
    let projected_annual_yield = total_investment * average_apr / 100.0;
    require_finite("projectedAnnualYield", projected_annual_yield)?;

    Ok(PortfolioMetrics {
        holding_count: holdings.len(),
        total_investment: round2(total_investment),
        average_apr: round2(average_apr),
        average_irr: round2(average_irr),
        average_value_growth: round2(average_value_growth),
        projected_annual_yield: round2(projected_annual_yield),
    })
}

fn weighted_average(holdings: &[Holding], total: f64, rate: impl Fn(&ProjectTerms) -> f64) -> f64 {
    holdings
        .iter()
        .map(|h| rate(&h.terms) * (h.amount / total))
        .sum()
}
