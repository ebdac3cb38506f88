//! Application-wide error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request is not in a state that allows the transition.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Amount is zero, negative, or otherwise not a valid money value.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Wallet balance does not cover the requested amount.
    ///
    /// The message is user-facing and always carries both figures.
    #[error("Saldo insuficiente. Disponible: ${available}, Solicitado: ${required}")]
    InsufficientFunds {
        /// Balance currently available in the wallet.
        available: Decimal,
        /// Amount the operation needed.
        required: Decimal,
    },

    /// No unconsumed inventory unit exists for the product.
    #[error("Out of stock: {0}")]
    OutOfStock(String),

    /// Conflict (e.g., duplicate wallet for an owner).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Persistence or notification layer failure.
    #[error("Dependency failure: {0}")]
    Dependency(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::InvalidAmount(_) => 400,
            Self::InvalidState(_) | Self::InsufficientFunds { .. } | Self::OutOfStock(_) => 422,
            Self::Conflict(_) => 409,
            Self::Dependency(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidState(_) => "INVALID_STATE",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::OutOfStock(_) => "OUT_OF_STOCK",
            Self::Conflict(_) => "CONFLICT",
            Self::Dependency(_) => "DEPENDENCY_FAILURE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::NotFound(String::new()).status_code(), 404);
        assert_eq!(AppError::InvalidState(String::new()).status_code(), 422);
        assert_eq!(AppError::InvalidAmount(String::new()).status_code(), 400);
        assert_eq!(
            AppError::InsufficientFunds {
                available: dec!(0),
                required: dec!(1),
            }
            .status_code(),
            422
        );
        assert_eq!(AppError::OutOfStock(String::new()).status_code(), 422);
        assert_eq!(AppError::Conflict(String::new()).status_code(), 409);
        assert_eq!(AppError::Dependency(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::NotFound(String::new()).error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::InvalidState(String::new()).error_code(),
            "INVALID_STATE"
        );
        assert_eq!(
            AppError::InvalidAmount(String::new()).error_code(),
            "INVALID_AMOUNT"
        );
        assert_eq!(
            AppError::OutOfStock(String::new()).error_code(),
            "OUT_OF_STOCK"
        );
        assert_eq!(AppError::Conflict(String::new()).error_code(), "CONFLICT");
        assert_eq!(
            AppError::Dependency(String::new()).error_code(),
            "DEPENDENCY_FAILURE"
        );
    }

    #[test]
    fn test_insufficient_funds_message_carries_both_amounts() {
        let err = AppError::InsufficientFunds {
            available: dec!(50.00),
            required: dec!(112.50),
        };
        assert_eq!(
            err.to_string(),
            "Saldo insuficiente. Disponible: $50.00, Solicitado: $112.50"
        );
        assert_eq!(err.error_code(), "INSUFFICIENT_FUNDS");
    }
}
