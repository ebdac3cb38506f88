//! `SeaORM` entity definitions.
//!
//! Entities map one-to-one to the tables created by the initial migration.
//! Wallet owners and products live in the hosted platform backend and are
//! referenced by bare UUIDs here.

pub mod commission_configurations;
pub mod inventory_units;
pub mod purchase_settlements;
pub mod recharge_requests;
pub mod sea_orm_active_enums;
pub mod wallets;
pub mod withdrawal_requests;
