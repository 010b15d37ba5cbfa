//! Commercial terms of a tokenized project

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::numeric::{require_non_negative, require_percent, require_positive};

/// Snapshot of a project's price and rate terms
///
/// Money in one consistent unit, rates in percent (8.0 = 8%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTerms {
    /// Full asset valuation
    pub total_price: f64,
    /// Price of a single token
    pub token_price: f64,
    /// Share of the asset value that is tokenized, in (0, 100]
    pub tokens_available_percent: f64,
    /// Smallest investment accepted
    pub min_investment: f64,
    /// Contractual annual yield rate
    pub apr: f64,
    /// Target internal rate of return (a project attribute, not computed)
    pub irr: f64,
    /// Expected annual appreciation rate
    pub value_growth: f64,
}

impl ProjectTerms {
    /// Check the business rules on the terms
    ///
    /// Upstream layers guarantee shape, not these constraints.
    pub fn validate(&self) -> Result<()> {
        require_positive("totalPrice", self.total_price)?;
        require_positive("tokenPrice", self.token_price)?;
        require_percent("tokensAvailablePercent", self.tokens_available_percent)?;
        require_positive("minInvestment", self.min_investment)?;
        require_non_negative("apr", self.apr)?;
        require_non_negative("irr", self.irr)?;
        require_non_negative("valueGrowth", self.value_growth)?;

        if self.token_price > self.total_price {
            return Err(EngineError::invalid(
                "tokenPrice",
                format!(
                    "must not exceed totalPrice ({} > {})",
                    self.token_price, self.total_price
                ),
            ));
        }
        if self.min_investment > self.total_price {
            return Err(EngineError::invalid(
                "minInvestment",
                format!(
                    "must not exceed totalPrice ({} > {})",
                    self.min_investment, self.total_price
                ),
            ));
        }
        Ok(())
    }
}

/// Tokens already taken out of circulation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSupply {
    pub sold_tokens: u64,
    pub reserved_tokens: u64,
}

impl TokenSupply {
    pub fn new(sold_tokens: u64, reserved_tokens: u64) -> Self {
        Self {
            sold_tokens,
            reserved_tokens,
        }
    }

    /// Sold plus reserved, saturating
    pub fn committed(&self) -> u64 {
        self.sold_tokens.saturating_add(self.reserved_tokens)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::ProjectTerms;

    /// 1M asset, 80% tokenized at 100 per token, 8% APR
    pub fn sample_terms() -> ProjectTerms {
        ProjectTerms {
            total_price: 1_000_000.0,
            token_price: 100.0,
            tokens_available_percent: 80.0,
            min_investment: 500.0,
            apr: 8.0,
            irr: 12.0,
            value_growth: 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_terms;
    use super::*;

    #[test]
    fn test_valid_terms() {
        assert!(sample_terms().validate().is_ok());
    }

    #[test]
    fn test_token_price_above_total_price() {
        let terms = ProjectTerms {
            token_price: 2_000_000.0,
            ..sample_terms()
        };
        assert!(matches!(
            terms.validate(),
            Err(EngineError::InvalidInput { field: "tokenPrice", .. })
        ));
    }

    #[test]
    fn test_min_investment_above_total_price() {
        let terms = ProjectTerms {
            min_investment: 1_500_000.0,
            ..sample_terms()
        };
        assert!(matches!(
            terms.validate(),
            Err(EngineError::InvalidInput { field: "minInvestment", .. })
        ));
    }

    #[test]
    fn test_percent_and_rate_bounds() {
        for terms in [
            ProjectTerms { tokens_available_percent: 0.0, ..sample_terms() },
            ProjectTerms { tokens_available_percent: 120.0, ..sample_terms() },
            ProjectTerms { apr: -1.0, ..sample_terms() },
            ProjectTerms { irr: f64::NAN, ..sample_terms() },
            ProjectTerms { value_growth: f64::INFINITY, ..sample_terms() },
            ProjectTerms { token_price: 0.0, ..sample_terms() },
        ] {
            assert!(terms.validate().is_err(), "accepted {:?}", terms);
        }
    }

    #[test]
    fn test_terms_deserialize_camel_case() {
        let json = r#"{
            "totalPrice": 1000000, "tokenPrice": 100, "tokensAvailablePercent": 80,
            "minInvestment": 500, "apr": 8, "irr": 12, "valueGrowth": 3
        }"#;
        let terms: ProjectTerms = serde_json::from_str(json).unwrap();
        assert_eq!(terms, sample_terms());
    }

    #[test]
    fn test_supply_committed_saturates() {
        assert_eq!(TokenSupply::new(10, 5).committed(), 15);
        assert_eq!(TokenSupply::new(u64::MAX, 5).committed(), u64::MAX);
    }
}
