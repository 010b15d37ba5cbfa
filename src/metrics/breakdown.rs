//! Cost and yield breakdown for a candidate token purchase

use serde::Serialize;

use super::tokenomics::calculate_tokenomics_with_supply;
use super::yields::raw_yield_metrics;
use crate::error::{EngineError, PurchaseBound, Result};
use crate::numeric::{require_finite, round2, serialize_fixed2};
use crate::project::{ProjectTerms, TokenSupply};

/// What an investor pays and earns for a purchase
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentBreakdown {
    pub token_amount: u64,
    #[serde(serialize_with = "serialize_fixed2")]
    pub total_investment: f64,
    #[serde(serialize_with = "serialize_fixed2")]
    pub annual_yield: f64,
    #[serde(serialize_with = "serialize_fixed2")]
    pub monthly_yield: f64,
    /// The project's APR
    #[serde(serialize_with = "serialize_fixed2")]
    pub yield_percentage: f64,
    /// Investment after one year of appreciation
    #[serde(serialize_with = "serialize_fixed2")]
    pub projected_value: f64,
}

/// Breakdown for buying `token_amount` tokens of a fresh project
pub fn calculate_investment_breakdown(terms: &ProjectTerms, token_amount: u64) -> Result<InvestmentBreakdown> {
    calculate_investment_breakdown_with_supply(terms, &TokenSupply::default(), token_amount)
}

/// Breakdown for buying `token_amount` tokens given the tokens already sold or reserved
pub fn calculate_investment_breakdown_with_supply(
    terms: &ProjectTerms,
    supply: &TokenSupply,
    token_amount: u64,
) -> Result<InvestmentBreakdown> {
    let tokenomics = calculate_tokenomics_with_supply(terms, supply)?;

    if token_amount == 0 {
        return Err(EngineError::RangeViolation {
            bound: PurchaseBound::Positive,
            value: token_amount,
            limit: 1,
        });
    }
    if token_amount < tokenomics.minimum_purchase {
        return Err(EngineError::RangeViolation {
            bound: PurchaseBound::MinimumPurchase,
            value: token_amount,
            limit: tokenomics.minimum_purchase,
        });
    }
    if token_amount > tokenomics.available_tokens {
        return Err(EngineError::RangeViolation {
            bound: PurchaseBound::AvailableTokens,
            value: token_amount,
            limit: tokenomics.available_tokens,
        });
    }

    let yields = raw_yield_metrics(terms)?;
    let tokens = token_amount as f64;
    let total_investment = tokens * terms.token_price;
    let annual_yield = yields.yield_per_token * tokens;
    let projected_value = total_investment * (1.0 + terms.value_growth / 100.0);
    require_finite("projectedValue", projected_value)?;

    Ok(InvestmentBreakdown {
        token_amount,
        total_investment: round2(total_investment),
        annual_yield: round2(annual_yield),
        monthly_yield: round2(annual_yield / 12.0),
        yield_percentage: round2(terms.apr),
        projected_value: round2(projected_value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::fixtures::sample_terms;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_breakdown_for_fifty_tokens() {
        let breakdown = calculate_investment_breakdown(&sample_terms(), 50).unwrap();
        assert_eq!(breakdown.token_amount, 50);
        assert_abs_diff_eq!(breakdown.total_investment, 5000.0);
        // 10 per token per year
        assert_abs_diff_eq!(breakdown.annual_yield, 500.0);
        assert_abs_diff_eq!(breakdown.monthly_yield, 41.67);
        assert_abs_diff_eq!(breakdown.yield_percentage, 8.0);
        assert_abs_diff_eq!(breakdown.projected_value, 5150.0);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(calculate_investment_breakdown(&sample_terms(), 5).is_ok());
        assert!(calculate_investment_breakdown(&sample_terms(), 8000).is_ok());
    }

    #[test]
    fn test_below_minimum_purchase() {
        for amount in 1..5 {
            let err = calculate_investment_breakdown(&sample_terms(), amount).unwrap_err();
            assert_eq!(
                err,
                EngineError::RangeViolation {
                    bound: PurchaseBound::MinimumPurchase,
                    value: amount,
                    limit: 5,
                }
            );
        }
    }

    #[test]
    fn test_above_available_tokens() {
        for amount in [8001, 10_000, u64::MAX] {
            let err = calculate_investment_breakdown(&sample_terms(), amount).unwrap_err();
            assert!(matches!(
                err,
                EngineError::RangeViolation {
                    bound: PurchaseBound::AvailableTokens,
                    limit: 8000,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_supply_narrows_the_range() {
        let supply = TokenSupply::new(7900, 0);
        assert!(calculate_investment_breakdown_with_supply(&sample_terms(), &supply, 100).is_ok());
        let err = calculate_investment_breakdown_with_supply(&sample_terms(), &supply, 101).unwrap_err();
        assert!(matches!(err, EngineError::RangeViolation { limit: 100, .. }));
    }

    #[test]
    fn test_overflowing_projected_value_is_an_error() {
        let terms = ProjectTerms {
            value_growth: 1e308,
            ..sample_terms()
        };
        assert!(matches!(
            calculate_investment_breakdown(&terms, 50),
            Err(EngineError::InvalidInput { field: "projectedValue", .. })
        ));
    }

    #[test]
    fn test_zero_tokens() {
        let err = calculate_investment_breakdown(&sample_terms(), 0).unwrap_err();
        assert!(matches!(
            err,
            EngineError::RangeViolation { bound: PurchaseBound::Positive, .. }
        ));
    }
}
