//! `SeaORM` Entity for the recharge_requests table.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::RequestStatus;

/// A balance top-up request. Created pending; terminal once approved or
/// rejected.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "recharge_requests")]
pub struct Model {
    /// Request id.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Requesting owner.
    pub owner_id: Uuid,
    /// Amount credited to the owner's wallet on approval. Positive.
    pub amount: Decimal,
    /// Lifecycle status.
    pub status: RequestStatus,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last transition timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// No intra-schema relations; owners are external.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
