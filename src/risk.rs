//! Heuristic risk scoring over a project's rate parameters
//!
//! Each rule adds points independently:
//!
//! | Factor | Condition | Points |
//! |---|---|---|
//! | APR | >15 / >10 / >5 | 3 / 2 / 1 |
//! | IRR - APR spread | >10 / >5 | 2 / 1 |
//! | Value growth | >10 / >5 | 2 / 1 |
//! | Project size | totalPrice > 10M or < 100k | 1 |

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::project::ProjectTerms;

const LARGE_PROJECT_PRICE: f64 = 10_000_000.0;
const SMALL_PROJECT_PRICE: f64 = 100_000.0;

/// Overall risk band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// Band for a total score
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=2 => RiskLevel::Low,
            3..=4 => RiskLevel::Medium,
            5..=6 => RiskLevel::High,
            _ => RiskLevel::VeryHigh,
        }
    }
}

/// Label attached to a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FactorLevel {
    Low,
    Medium,
    High,
}

/// Rules contributing to the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskFactor {
    Apr,
    IrrSpread,
    ValueGrowth,
    ProjectSize,
}

/// Points and label for one rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactorScore {
    pub points: u32,
    pub level: FactorLevel,
}

/// Score, band and per-rule explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub factors: BTreeMap<RiskFactor, FactorScore>,
}

/// Score a project's terms
pub fn calculate_risk_metrics(terms: &ProjectTerms) -> Result<RiskAssessment> {
    terms.validate()?;

    let apr_points = match terms.apr {
        a if a > 15.0 => 3,
        a if a > 10.0 => 2,
        a if a > 5.0 => 1,
        _ => 0,
    };
    let apr = FactorScore {
        points: apr_points,
        level: match apr_points {
            3 => FactorLevel::High,
            2 => FactorLevel::Medium,
            _ => FactorLevel::Low,
        },
    };

    let spread = terms.irr - terms.apr;
    let irr_spread = two_tier(if spread > 10.0 {
        2
    } else if spread > 5.0 {
        1
    } else {
        0
    });

    let value_growth = two_tier(if terms.value_growth > 10.0 {
        2
    } else if terms.value_growth > 5.0 {
        1
    } else {
        0
    });

    let unusual_size =
        terms.total_price > LARGE_PROJECT_PRICE || terms.total_price < SMALL_PROJECT_PRICE;
    let project_size = if unusual_size {
        FactorScore { points: 1, level: FactorLevel::Medium }
    } else {
        FactorScore { points: 0, level: FactorLevel::Low }
    };

    let factors = BTreeMap::from([
        (RiskFactor::Apr, apr),
        (RiskFactor::IrrSpread, irr_spread),
        (RiskFactor::ValueGrowth, value_growth),
        (RiskFactor::ProjectSize, project_size),
    ]);
    let risk_score: u32 = factors.values().map(|f| f.points).sum();

    Ok(RiskAssessment {
        risk_score,
        risk_level: RiskLevel::from_score(risk_score),
        factors,
    })
}

fn two_tier(points: u32) -> FactorScore {
    let level = match points {
        2 => FactorLevel::High,
        1 => FactorLevel::Medium,
        _ => FactorLevel::Low,
    };
    FactorScore { points, level }
}
