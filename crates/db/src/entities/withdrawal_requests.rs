//! `SeaORM` Entity for the withdrawal_requests table.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::RequestStatus;

/// A payout request. Stores the net amount the owner receives; the gross
/// debited from their wallet is derived at approval time from the
/// commission rate current at that moment and snapshotted on the row,
/// so approved rows stay auditable after the rate changes.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "withdrawal_requests")]
pub struct Model {
    /// Request id.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Requesting owner.
    pub owner_id: Uuid,
    /// Net amount the owner will actually receive. Positive, immutable.
    pub requested_net_amount: Decimal,
    /// Gross debited on approval. Null while pending or rejected.
    pub gross_amount: Option<Decimal>,
    /// Commission credited to the administrator on approval.
    pub commission_amount: Option<Decimal>,
    /// Net paid out on approval; equals `requested_net_amount`.
    pub net_amount: Option<Decimal>,
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
