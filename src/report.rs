//! Project reports for the calling layer
//!
//! Bundles tokenomics, yield, risk and ROI projections for a project, and
//! runs that over many listed projects at once.
//!
//! # Example
//! ```ignore
//! let projects = load_projects("projects.csv")?;
//! let config = ReportConfig { investment_amount: 5_000.0, ..Default::default() };
//! for outcome in analyze_projects(&projects, &config) {
//!     println!("{}: {:?}", outcome.project_id, outcome.report.map(|r| r.risk.risk_level));
//! }
//! ```

use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::metrics::{calculate_tokenomics_with_supply, calculate_yield_metrics, TokenMetrics, YieldMetrics};
use crate::project::{ListedProject, ProjectTerms, TokenSupply};
use crate::projection::{generate_roi_projections, RoiProjection, DEFAULT_PROJECTION_YEARS};
use crate::risk::{calculate_risk_metrics, RiskAssessment};

/// Settings for a report run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportConfig {
    /// Amount the ROI projections are computed for
    pub investment_amount: f64,
    /// Projection horizon in years
    pub projection_years: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            investment_amount: 1_000.0,
            projection_years: DEFAULT_PROJECTION_YEARS,
        }
    }
}

/// Everything the engine derives for one project
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    pub tokenomics: TokenMetrics,
    pub yields: YieldMetrics,
    pub risk: RiskAssessment,
    pub projections: Vec<RoiProjection>,
}

/// Report for one listed project; failures are kept per project
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOutcome {
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ProjectReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Build the full report for a project
pub fn analyze_project(terms: &ProjectTerms, supply: &TokenSupply, config: &ReportConfig) -> Result<ProjectReport> {
    Ok(ProjectReport {
        tokenomics: calculate_tokenomics_with_supply(terms, supply)?,
        yields: calculate_yield_metrics(terms)?,
        risk: calculate_risk_metrics(terms)?,
        projections: generate_roi_projections(terms, config.investment_amount, config.projection_years)?,
    })
}

/// Report on every project in parallel, preserving input order
pub fn analyze_projects(projects: &[ListedProject], config: &ReportConfig) -> Vec<ProjectOutcome> {
    let outcomes: Vec<ProjectOutcome> = projects
        .par_iter()
        .map(|project| match analyze_project(&project.terms, &project.supply, config) {
            Ok(report) => ProjectOutcome {
                project_id: project.project_id.clone(),
                report: Some(report),
                error: None,
            },
            Err(e) => ProjectOutcome {
                project_id: project.project_id.clone(),
                report: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
    log::debug!("analyzed {} projects, {} failed", outcomes.len(), failed);
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::fixtures::sample_terms;
    use crate::risk::RiskLevel;

    fn listed(id: &str, terms: ProjectTerms) -> ListedProject {
        ListedProject {
            project_id: id.to_string(),
            terms,
            supply: TokenSupply::default(),
        }
    }

    #[test]
    fn test_analyze_project() {
        let report = analyze_project(&sample_terms(), &TokenSupply::new(1000, 0), &ReportConfig::default()).unwrap();
        assert_eq!(report.tokenomics.total_tokens, 8000);
        assert_eq!(report.tokenomics.available_tokens, 7000);
        assert_eq!(report.yields.annual_rent, 80_000.0);
        assert_eq!(report.risk.risk_level, RiskLevel::Low);
        assert_eq!(report.projections.len(), DEFAULT_PROJECTION_YEARS as usize);
    }

    #[test]
    fn test_non_positive_investment_rejected() {
        let config = ReportConfig {
            investment_amount: 0.0,
            ..ReportConfig::default()
        };
        let err = analyze_project(&sample_terms(), &TokenSupply::default(), &config).unwrap_err();
        assert!(matches!(
            err,
            crate::error::EngineError::InvalidInput { field: "investmentAmount", .. }
        ));
    }

    #[test]
    fn test_batch_keeps_order_and_failures() {
        let zero_tokens = ProjectTerms {
            total_price: 1_000.0,
            token_price: 100.0,
            tokens_available_percent: 1.0,
            min_investment: 100.0,
            ..sample_terms()
        };
        let projects = vec![
            listed("a", sample_terms()),
            listed("b", zero_tokens),
            listed("c", ProjectTerms { apr: 12.0, ..sample_terms() }),
        ];

        let outcomes = analyze_projects(&projects, &ReportConfig::default());
        let ids: Vec<&str> = outcomes.iter().map(|o| o.project_id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);

        assert!(outcomes[0].report.is_some());
        assert!(outcomes[1].report.is_none());
        assert!(outcomes[1].error.as_deref().unwrap().contains("totalTokens"));
        assert!(outcomes[2].error.is_none());
    }

    #[test]
    fn test_report_serializes_money_as_strings() {
        let report = analyze_project(&sample_terms(), &TokenSupply::default(), &ReportConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["tokenomics"]["totalTokens"], 8000);
        assert_eq!(json["yields"]["monthlyRent"], "6666.67");
        assert_eq!(json["projections"][0]["year"], 1);
        assert_eq!(json["projections"][0]["projectedValue"], "1030.00");
    }
}
