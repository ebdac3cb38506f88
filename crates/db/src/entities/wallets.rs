//! `SeaORM` Entity for the wallets table.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One balance record per owner. `balance >= 0` is enforced by a table
/// check constraint in addition to the conditional-update discipline in
/// the wallet repository.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "wallets")]
pub struct Model {
    /// Wallet id.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning user (or the platform administrator). Unique.
    #[sea_orm(unique)]
    pub owner_id: Uuid,
    /// Current balance in the base currency. Never negative.
    pub balance: Decimal,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last mutation timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// No intra-schema relations; owners are external.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
