//! `SeaORM` Entity for the inventory_units table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One sellable unit of a product (e.g. a subscription slot or account
/// credential). A unit is consumed exactly once, by a purchase settlement.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_units")]
pub struct Model {
    /// Unit id.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Product this unit belongs to (catalog lives in the platform backend).
    pub product_id: Uuid,
    /// Set when a settlement consumes this unit; NULL while available.
    pub consumed_at: Option<DateTimeWithTimeZone>,
    /// Creation timestamp. Units are consumed oldest-first.
    pub created_at: DateTimeWithTimeZone,
}

/// No intra-schema relations; products are external.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
