//! Error types for the calculation engine
//!
//! Every engine function reports failure through [`EngineError`]. Nothing is
//! ever substituted for a failed computation (no silent zero, NaN or default).

use std::fmt;

/// Bound checked when validating a token purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseBound {
    /// Purchase must be for at least one token
    Positive,
    /// Purchase must meet the project's minimum purchase
    MinimumPurchase,
    /// Purchase must not exceed the tokens still available
    AvailableTokens,
}

impl fmt::Display for PurchaseBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PurchaseBound::Positive => "token amount must be positive",
            PurchaseBound::MinimumPurchase => "token amount below minimum purchase",
            PurchaseBound::AvailableTokens => "token amount exceeds available tokens",
        };
        f.write_str(name)
    }
}

/// Top-level error type for the engine
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// An argument violates a stated precondition
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// The IRR solver could not reach its convergence threshold
    #[error("IRR did not converge after {iterations} iterations: {reason}")]
    Convergence { iterations: u32, reason: String },

    /// A requested token purchase falls outside the allowed range
    #[error("{bound}: requested {value}, limit {limit}")]
    RangeViolation {
        bound: PurchaseBound,
        value: u64,
        limit: u64,
    },
}

impl EngineError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_violation_message_names_bound_and_value() {
        let err = EngineError::RangeViolation {
            bound: PurchaseBound::MinimumPurchase,
            value: 3,
            limit: 5,
        };
        assert_eq!(
            err.to_string(),
            "token amount below minimum purchase: requested 3, limit 5"
        );
    }

    #[test]
    fn test_invalid_input_message() {
        let err = EngineError::invalid("tokenPrice", "must be greater than zero, got 0");
        assert_eq!(
            err.to_string(),
            "invalid input `tokenPrice`: must be greater than zero, got 0"
        );
    }
}
