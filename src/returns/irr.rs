//! Internal Rate of Return (IRR) calculation
//!
//! Newton-Raphson on the cash-flow vector `[-initial, cf1, cf2, ...]`.
//! The solver returns whichever single root it converges to from the initial
//! guess; sequences with several sign changes may have other valid roots.

use crate::error::{EngineError, Result};
use crate::numeric::{require_finite, require_positive, round2};
use super::discount::validate_cash_flows;

/// Solver settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrConfig {
    /// Starting rate as a decimal (0.1 = 10%)
    pub initial_guess: f64,
    /// Stop once |NPV| falls below this
    pub npv_tolerance: f64,
    /// Fail rather than divide by a derivative smaller than this
    pub min_derivative: f64,
    /// Lower clamp on the rate after each step, keeps (1 + rate) positive
    pub rate_floor: f64,
    /// Iteration bound
    pub max_iterations: u32,
}

impl Default for IrrConfig {
    fn default() -> Self {
        Self {
            initial_guess: 0.1,
            npv_tolerance: 0.0001,
            min_derivative: 0.0001,
            rate_floor: -0.99,
            max_iterations: 1000,
        }
    }
}

/// Newton-Raphson IRR solver
#[derive(Debug, Clone, Default)]
pub struct IrrSolver {
    config: IrrConfig,
}

impl IrrSolver {
    pub fn new(config: IrrConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IrrConfig {
        &self.config
    }

    /// IRR as a percentage rounded to 2 decimals
    pub fn solve(&self, initial_investment: f64, cash_flows: &[f64]) -> Result<f64> {
        let rate = self.solve_rate(initial_investment, cash_flows)?;
        Ok(round2(rate * 100.0))
    }

    /// Unrounded IRR as a decimal rate
    pub fn solve_rate(&self, initial_investment: f64, cash_flows: &[f64]) -> Result<f64> {
        require_positive("initialInvestment", initial_investment)?;
        if cash_flows.is_empty() {
            return Err(EngineError::invalid("cashFlows", "must not be empty"));
        }
        validate_cash_flows(cash_flows)?;
        require_finite("initialGuess", self.config.initial_guess)?;
        if self.config.initial_guess <= -1.0 {
            return Err(EngineError::invalid(
                "initialGuess",
                format!("must be greater than -1, got {}", self.config.initial_guess),
            ));
        }

        let mut flows = Vec::with_capacity(cash_flows.len() + 1);
        flows.push(-initial_investment);
        flows.extend_from_slice(cash_flows);

        let mut rate = self.config.initial_guess;

        for iteration in 0..self.config.max_iterations {
            let (npv, dnpv) = npv_and_derivative(&flows, rate);

            if !npv.is_finite() || !dnpv.is_finite() {
                log::warn!("IRR diverged at iteration {} (rate {})", iteration, rate);
                return Err(EngineError::Convergence {
                    iterations: iteration,
                    reason: format!("NPV is not finite at rate {}", rate),
                });
            }

            if npv.abs() < self.config.npv_tolerance {
                log::debug!("IRR converged after {} iterations: rate {:.6}", iteration, rate);
                return Ok(rate);
            }

            if dnpv.abs() < self.config.min_derivative {
                log::warn!("IRR derivative vanished at rate {} (iteration {})", rate, iteration);
                return Err(EngineError::Convergence {
                    iterations: iteration,
                    reason: format!("derivative {:e} too close to zero at rate {}", dnpv, rate),
                });
            }

            rate = (rate - npv / dnpv).max(self.config.rate_floor);
            log::trace!("IRR iteration {}: npv {:.6}, next rate {:.8}", iteration, npv, rate);
        }

        log::warn!("IRR gave up after {} iterations", self.config.max_iterations);
        Err(EngineError::Convergence {
            iterations: self.config.max_iterations,
            reason: format!("|NPV| still above {} at rate {}", self.config.npv_tolerance, rate),
        })
    }
}

/// IRR (percent, 2 decimals) of `initial_investment` followed by `cash_flows`
///
/// `initial_guess` is a decimal rate; pass `0.1` for the usual starting point.
pub fn calculate_irr(initial_investment: f64, cash_flows: &[f64], initial_guess: f64) -> Result<f64> {
    IrrSolver::new(IrrConfig {
        initial_guess,
        ..IrrConfig::default()
    })
    .solve(initial_investment, cash_flows)
}

/// Calculate NPV and its derivative with respect to rate
fn npv_and_derivative(cashflows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for (t, &cf) in cashflows.iter().enumerate() {
        npv += cf / (1.0 + rate).powi(t as i32);
        if t > 0 {
            dnpv -= (t as f64) * cf / (1.0 + rate).powi(t as i32 + 1);
        }
    }

    (npv, dnpv)
}
