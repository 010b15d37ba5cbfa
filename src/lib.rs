//! Property Token Engine - financial calculations for tokenized real-estate projects
//!
//! This library provides:
//! - Core return functions (NPV, Newton-Raphson IRR, CAGR, present and future value)
//! - Tokenomics, yield and purchase breakdowns from a project's price terms
//! - Multi-year ROI projections
//! - Heuristic risk scoring
//! - Investment-weighted portfolio aggregates
//!
//! Every calculation is a pure function of its arguments: no I/O, no caching,
//! safe to call from any number of threads.

pub mod error;
pub mod numeric;
pub mod returns;
pub mod project;
pub mod metrics;
pub mod projection;
pub mod risk;
pub mod portfolio;
pub mod report;

// Re-export commonly used types
pub use error::{EngineError, PurchaseBound, Result};
pub use project::{ListedProject, ProjectTerms, TokenSupply};
pub use returns::{calculate_cagr, calculate_irr, calculate_npv, future_value, present_value, IrrConfig, IrrSolver};
pub use metrics::{
    calculate_investment_breakdown, calculate_tokenomics, calculate_yield_metrics, InvestmentBreakdown,
    TokenMetrics, YieldMetrics,
};
pub use projection::{generate_roi_projections, RoiProjection};
pub use risk::{calculate_risk_metrics, RiskAssessment, RiskLevel};
pub use portfolio::{calculate_portfolio_metrics, Holding, PortfolioMetrics};
pub use report::{analyze_project, analyze_projects, ProjectReport, ReportConfig};
