//! Commission error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when building commission configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommissionError {
    /// Rate must be within `[0, 100)` percent.
    ///
    /// 100% is rejected because the gross formula `net / (1 - rate/100)`
    /// divides by zero there.
    #[error("Commission rate must be between 0 and 100 (exclusive), got {0}")]
    InvalidRate(Decimal),

    /// Conversion rate must be strictly positive.
    #[error("Conversion rate must be greater than zero, got {0}")]
    InvalidConversionRate(Decimal),
}
