//! Property Token Engine CLI
//!
//! Runs the calculation engine over CSV project listings and prints JSON

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use property_token_engine::metrics::calculate_investment_breakdown_with_supply;
use property_token_engine::project::loader::{load_holdings, load_projects};
use property_token_engine::projection::DEFAULT_PROJECTION_YEARS;
use property_token_engine::{
    analyze_projects, calculate_npv, calculate_portfolio_metrics, IrrConfig, IrrSolver, ReportConfig,
};

#[derive(Parser, Debug)]
#[command(name = "property-token-engine", about = "Tokenized real-estate financial calculations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tokenomics, yield, risk and ROI projections for every project in a CSV file
    Analyze {
        #[arg(short, long)]
        projects: PathBuf,
        /// Amount the ROI projections are computed for
        #[arg(long, default_value_t = 1000.0)]
        investment: f64,
        #[arg(long, default_value_t = DEFAULT_PROJECTION_YEARS)]
        years: u32,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Cost and yield of buying a number of tokens in one project
    Breakdown {
        #[arg(short, long)]
        projects: PathBuf,
        #[arg(long)]
        project: String,
        #[arg(long)]
        tokens: u64,
    },
    /// IRR of an investment followed by periodic cash flows
    Irr {
        #[arg(long)]
        investment: f64,
        /// Comma-separated cash flows, one per period
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        flows: Vec<f64>,
        #[arg(long, default_value_t = 0.1)]
        guess: f64,
        /// Also report NPV at this discount rate (percent)
        #[arg(long)]
        discount_rate: Option<f64>,
    },
    /// Weighted metrics for a set of holdings
    Portfolio {
        #[arg(short, long)]
        projects: PathBuf,
        #[arg(long)]
        holdings: PathBuf,
    },
}

/// Output wrapper stamped with the generation time
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<T: Serialize> {
    generated_at: DateTime<Utc>,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IrrOutput {
    irr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    npv: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            projects,
            investment,
            years,
            output,
        } => {
            let projects = load_projects(&projects)?;
            log::info!("analyzing {} projects", projects.len());

            let config = ReportConfig {
                investment_amount: investment,
                projection_years: years,
            };
            let outcomes = analyze_projects(&projects, &config);
            write_json(&outcomes, output.as_deref())
        }
        Command::Breakdown {
            projects,
            project,
            tokens,
        } => {
            let projects = load_projects(&projects)?;
            let listed = projects
                .iter()
                .find(|p| p.project_id == project)
                .ok_or_else(|| anyhow!("unknown project {}", project))?;

            let breakdown = calculate_investment_breakdown_with_supply(&listed.terms, &listed.supply, tokens)
                .with_context(|| format!("breakdown for project {}", project))?;
            write_json(&breakdown, None)
        }
        Command::Irr {
            investment,
            flows,
            guess,
            discount_rate,
        } => {
            let solver = IrrSolver::new(IrrConfig {
                initial_guess: guess,
                ..IrrConfig::default()
            });
            let irr = solver.solve(investment, &flows)?;
            let npv = discount_rate
                .map(|rate| calculate_npv(investment, &flows, rate))
                .transpose()?;

            let output = IrrOutput {
                irr: format!("{:.2}", irr),
                npv: npv.map(|v| format!("{:.2}", v)),
            };
            write_json(&output, None)
        }
        Command::Portfolio { projects, holdings } => {
            let projects = load_projects(&projects)?;
            let holdings = load_holdings(&holdings, &projects)?;
            log::info!("aggregating {} holdings", holdings.len());

            let metrics = calculate_portfolio_metrics(&holdings)?;
            write_json(&metrics, None)
        }
    }
}

fn write_json<T: Serialize>(data: &T, output: Option<&Path>) -> Result<()> {
    let envelope = Envelope {
        generated_at: Utc::now(),
        data,
    };

    match output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            serde_json::to_writer_pretty(&mut file, &envelope)?;
            writeln!(file)?;
            log::info!("results written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &envelope)?;
            writeln!(handle)?;
        }
    }
    Ok(())
}
