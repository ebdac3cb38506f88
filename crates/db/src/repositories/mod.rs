//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. The workflow repositories sequence wallet mutations and
//! status transitions inside single database transactions.

pub mod commission_config;
pub mod recharge;
pub mod settlement;
pub mod wallet;
pub mod withdrawal;

pub use commission_config::{
    CommissionConfigRepository, ConfigError, SaveConfigurationInput,
};
pub use recharge::{
    BulkRechargeItemResult, BulkRechargeResult, RechargeError, RechargeRepository,
};
pub use settlement::{SettlementError, SettlementOutcome, SettlementRepository};
pub use wallet::{WalletError, WalletRepository};
pub use withdrawal::{
    ApprovedWithdrawal, BulkWithdrawalItemFailure, BulkWithdrawalResult, WithdrawalError,
    WithdrawalRepository,
};

use crate::entities::sea_orm_active_enums::RequestStatus as DbRequestStatus;
use cartera_core::workflow::RequestStatus as CoreRequestStatus;

/// Converts a database request status into the core state-machine status.
pub(crate) fn db_status_to_core(status: &DbRequestStatus) -> CoreRequestStatus {
    match status {
        DbRequestStatus::Pending => CoreRequestStatus::Pending,
        DbRequestStatus::Approved => CoreRequestStatus::Approved,
        DbRequestStatus::Rejected => CoreRequestStatus::Rejected,
    }
}

