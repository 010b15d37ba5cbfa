//! Load project listings and portfolio holdings from CSV

use anyhow::{anyhow, Context, Result};
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::{ProjectTerms, TokenSupply};
use crate::portfolio::Holding;

/// A project as listed on the platform: identifier, terms and current supply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedProject {
    pub project_id: String,
    pub terms: ProjectTerms,
    pub supply: TokenSupply,
}

/// Raw CSV row for a project listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectRow {
    project_id: String,
    total_price: f64,
    token_price: f64,
    tokens_available_percent: f64,
    min_investment: f64,
    apr: f64,
    irr: f64,
    value_growth: f64,
    #[serde(default)]
    sold_tokens: Option<u64>,
    #[serde(default)]
    reserved_tokens: Option<u64>,
}

impl ProjectRow {
    fn into_project(self) -> Result<ListedProject> {
        let terms = ProjectTerms {
            total_price: self.total_price,
            token_price: self.token_price,
            tokens_available_percent: self.tokens_available_percent,
            min_investment: self.min_investment,
            apr: self.apr,
            irr: self.irr,
            value_growth: self.value_growth,
        };
        terms
            .validate()
            .with_context(|| format!("project {}", self.project_id))?;

        Ok(ListedProject {
            project_id: self.project_id,
            terms,
            supply: TokenSupply::new(
                self.sold_tokens.unwrap_or(0),
                self.reserved_tokens.unwrap_or(0),
            ),
        })
    }
}

/// Raw CSV row for a holding
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HoldingRow {
    project_id: String,
    amount: f64,
}

/// Load all projects from a CSV file
pub fn load_projects<P: AsRef<Path>>(path: P) -> Result<Vec<ListedProject>> {
    let path = path.as_ref();
    let reader = Reader::from_path(path)
        .with_context(|| format!("opening project file {}", path.display()))?;
    read_projects(reader)
}

/// Load projects from any reader (e.g., string buffer, network stream)
pub fn load_projects_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<ListedProject>> {
    read_projects(Reader::from_reader(reader))
}

fn read_projects<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<ListedProject>> {
    let mut projects = Vec::new();

    for (line, result) in reader.deserialize().enumerate() {
        let row: ProjectRow = result.with_context(|| format!("project row {}", line + 1))?;
        projects.push(row.into_project()?);
    }

    log::debug!("loaded {} projects", projects.len());
    Ok(projects)
}

/// Load holdings from a CSV file, resolving each against `projects`
pub fn load_holdings<P: AsRef<Path>>(path: P, projects: &[ListedProject]) -> Result<Vec<Holding>> {
    let path = path.as_ref();
    let reader = Reader::from_path(path)
        .with_context(|| format!("opening holdings file {}", path.display()))?;
    read_holdings(reader, projects)
}

/// Load holdings from any reader, resolving each against `projects`
pub fn load_holdings_from_reader<R: std::io::Read>(
    reader: R,
    projects: &[ListedProject],
) -> Result<Vec<Holding>> {
    read_holdings(Reader::from_reader(reader), projects)
}

fn read_holdings<R: std::io::Read>(
    mut reader: Reader<R>,
    projects: &[ListedProject],
) -> Result<Vec<Holding>> {
    let by_id: HashMap<&str, &ListedProject> = projects
        .iter()
        .map(|p| (p.project_id.as_str(), p))
        .collect();
    let mut holdings = Vec::new();

    for (line, result) in reader.deserialize().enumerate() {
        let row: HoldingRow = result.with_context(|| format!("holding row {}", line + 1))?;
        let project = by_id
            .get(row.project_id.as_str())
            .ok_or_else(|| anyhow!("holding row {}: unknown project {}", line + 1, row.project_id))?;
        holdings.push(Holding::new(project.terms, row.amount));
    }

    Ok(holdings)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECTS: &str = "\
projectId,totalPrice,tokenPrice,tokensAvailablePercent,minInvestment,apr,irr,valueGrowth,soldTokens,reservedTokens
harbor-lofts,1000000,100,80,500,8,12,3,1500,500
elm-street,250000,50,100,100,6,9,4,,
";

    #[test]
    fn test_load_projects() {
        let projects = load_projects_from_reader(PROJECTS.as_bytes()).unwrap();
        assert_eq!(projects.len(), 2);

        let first = &projects[0];
        assert_eq!(first.project_id, "harbor-lofts");
        assert_eq!(first.terms.total_price, 1_000_000.0);
        assert_eq!(first.supply, TokenSupply::new(1500, 500));

        // empty supply columns default to zero
        assert_eq!(projects[1].supply, TokenSupply::default());
    }

    #[test]
    fn test_load_projects_without_supply_columns() {
        let csv = "\
projectId,totalPrice,tokenPrice,tokensAvailablePercent,minInvestment,apr,irr,valueGrowth
solo,500000,250,50,1000,7,10,2
";
        let projects = load_projects_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(projects[0].supply, TokenSupply::default());
    }

    #[test]
    fn test_invalid_terms_rejected_on_load() {
        let csv = "\
projectId,totalPrice,tokenPrice,tokensAvailablePercent,minInvestment,apr,irr,valueGrowth
broken,1000,5000,80,500,8,12,3
";
        let err = load_projects_from_reader(csv.as_bytes()).unwrap_err();
        assert!(format!("{:#}", err).contains("broken"));
    }

    #[test]
    fn test_load_holdings() {
        let projects = load_projects_from_reader(PROJECTS.as_bytes()).unwrap();
        let csv = "projectId,amount\nharbor-lofts,600\nelm-street,400\n";
        let holdings = load_holdings_from_reader(csv.as_bytes(), &projects).unwrap();

        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings[0].amount, 600.0);
        assert_eq!(holdings[1].terms.apr, 6.0);
    }

    #[test]
    fn test_unknown_project_in_holdings() {
        let projects = load_projects_from_reader(PROJECTS.as_bytes()).unwrap();
        let csv = "projectId,amount\nnowhere,100\n";
        assert!(load_holdings_from_reader(csv.as_bytes(), &projects).is_err());
    }
}
