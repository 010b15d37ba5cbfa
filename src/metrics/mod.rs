//! Per-project metrics: tokenomics, yield and purchase breakdowns

mod tokenomics;
mod yields;
mod breakdown;

pub use tokenomics::{calculate_tokenomics, calculate_tokenomics_with_supply, TokenMetrics};
pub use yields::{calculate_yield_metrics, YieldMetrics};
pub use breakdown::{
    calculate_investment_breakdown, calculate_investment_breakdown_with_supply, InvestmentBreakdown,
};
