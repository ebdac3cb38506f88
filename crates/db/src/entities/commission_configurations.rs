//! `SeaORM` Entity for the commission_configurations table.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Append-only configuration history. The row with the latest `created_at`
/// is the current configuration; older rows are retained for audit and
/// restore.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "commission_configurations")]
pub struct Model {
    /// Configuration row id.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Withdrawal commission percentage, within `[0, 100)`.
    pub commission_rate: Decimal,
    /// Display-only conversion multiplier. Positive.
    pub conversion_rate: Decimal,
    /// Support contact shown to users.
    pub support_email: String,
    /// Creation timestamp; defines which row is current.
    pub created_at: DateTimeWithTimeZone,
}

/// No relations; configuration is global.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
