//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations
//!
//! Every wallet mutation issued here is a single-statement atomic
//! read-modify-write; no code path computes a new balance client-side and
//! writes it back unconditionally.

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    CommissionConfigRepository, RechargeRepository, SettlementRepository, WalletRepository,
    WithdrawalRepository,
};

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
