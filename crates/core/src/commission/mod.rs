//! Commission rate math and configuration snapshots.
//!
//! The platform retains a percentage of every withdrawal's gross amount.
//! Requests store the net amount the owner receives; the gross debited from
//! the owner's wallet is derived from the commission rate *current at
//! approval time*, never the rate at request creation.
//!
//! # Modules
//!
//! - `rate` - Validated commission percentage and gross/commission math
//! - `settings` - Snapshot of the current platform configuration
//! - `error` - Commission-specific error types

pub mod error;
pub mod rate;
pub mod settings;

#[cfg(test)]
mod rate_props;

pub use error::CommissionError;
pub use rate::CommissionRate;
pub use settings::CommissionSettings;
