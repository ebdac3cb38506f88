//! Balance custody rules for wallets.
//!
//! A wallet is the unit of fund custody: one mutable balance per owner,
//! changed only through credit/debit operations. This module holds the
//! pure arithmetic and validation; persistence-side atomicity lives in
//! `cartera-db`.
//!
//! # Modules
//!
//! - `balance` - Credit/debit math with the non-negativity invariant
//! - `error` - Wallet-specific error types

pub mod balance;
pub mod error;

#[cfg(test)]
mod balance_props;

pub use balance::{apply_credit, apply_debit, ensure_positive_amount};
pub use error::WalletError;
