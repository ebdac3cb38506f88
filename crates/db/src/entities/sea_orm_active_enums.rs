//! `SeaORM` active enums mapped to Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a recharge or withdrawal request.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "request_status")]
pub enum RequestStatus {
    /// Awaiting an approver's decision.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Approved; wallet mutations applied. Terminal.
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Rejected; wallets untouched. Terminal.
    #[sea_orm(string_value = "rejected")]
    Rejected,
}
