//! Core financial functions over plain numbers: NPV, IRR, CAGR, PV and FV

mod discount;
mod growth;
mod irr;

pub use discount::{calculate_npv, future_value, present_value, DEFAULT_COMPOUNDING_FREQUENCY};
pub use growth::calculate_cagr;
pub use irr::{calculate_irr, IrrConfig, IrrSolver};
