//! `SeaORM` Entity for the purchase_settlements table.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Record of a completed buyer-to-provider transfer. Inserted in the same
/// database transaction as the wallet mutations and inventory consumption.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "purchase_settlements")]
pub struct Model {
    /// Settlement id.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Wallet owner debited the price.
    pub buyer_id: Uuid,
    /// Wallet owner credited the price.
    pub provider_id: Uuid,
    /// Product whose inventory unit was consumed.
    pub product_id: Uuid,
    /// Settled price in the base currency. Positive.
    pub price: Decimal,
    /// Settlement timestamp.
    pub created_at: DateTimeWithTimeZone,
}

/// No intra-schema relations; owners and products are external.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
