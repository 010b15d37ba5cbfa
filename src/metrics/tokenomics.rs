//! Token counts derived from a project's price terms

use serde::Serialize;

use crate::error::{EngineError, Result};
use crate::project::{ProjectTerms, TokenSupply};

/// Sizing of a tokenized offering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetrics {
    /// floor(totalPrice * tokensAvailablePercent / 100 / tokenPrice)
    pub total_tokens: u64,
    /// Total less sold and reserved, never below zero
    pub available_tokens: u64,
    /// ceil(minInvestment / tokenPrice)
    pub minimum_purchase: u64,
}

/// Tokenomics for a project with nothing sold or reserved yet
pub fn calculate_tokenomics(terms: &ProjectTerms) -> Result<TokenMetrics> {
    calculate_tokenomics_with_supply(terms, &TokenSupply::default())
}

/// Tokenomics accounting for tokens already sold or reserved
pub fn calculate_tokenomics_with_supply(terms: &ProjectTerms, supply: &TokenSupply) -> Result<TokenMetrics> {
    terms.validate()?;

    let total_tokens = token_count(
        "totalTokens",
        (terms.total_price * terms.tokens_available_percent / 100.0 / terms.token_price).floor(),
    )?;
    let minimum_purchase = token_count(
        "minimumPurchase",
        (terms.min_investment / terms.token_price).ceil(),
    )?;

    Ok(TokenMetrics {
        total_tokens,
        available_tokens: total_tokens.saturating_sub(supply.committed()),
        minimum_purchase,
    })
}

fn token_count(field: &'static str, value: f64) -> Result<u64> {
    if value.is_finite() && value >= 0.0 && value <= u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(EngineError::invalid(field, format!("token count out of range: {}", value)))
    }
}
