//! Error types for the calculation service
//!
//! Domain errors using thiserror. The HTTP layer maps each variant to a
//! status code and a stable error code.

use thiserror::Error;

/// Fixed message returned to callers that divide by zero
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Only Chuck Norris can divide by zero.";

/// Failure of a single calculation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    #[error("{}", DIVISION_BY_ZERO_MESSAGE)]
    DivisionByZero,

    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },
}

impl CalculationError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            CalculationError::DivisionByZero => "DIVISION_BY_ZERO",
            CalculationError::InvalidRange { .. } => "INVALID_RANGE",
        }
    }
}
