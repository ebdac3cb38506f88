//! Wallet error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when mutating a wallet balance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// The amount is zero or negative.
    #[error("Amount must be greater than zero, got {0}")]
    InvalidAmount(Decimal),

    /// The balance does not cover the debit.
    #[error("Saldo insuficiente. Disponible: ${available}, Solicitado: ${required}")]
    InsufficientFunds {
        /// Balance currently held by the wallet.
        available: Decimal,
        /// Amount the debit required.
        required: Decimal,
    },
}
