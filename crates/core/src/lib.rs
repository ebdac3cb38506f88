//! Core business logic for Cartera.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `wallet` - Balance custody rules (credit/debit math, non-negativity)
//! - `commission` - Commission rate math and configuration snapshots
//! - `workflow` - Recharge/withdrawal request state machine
//! - `currency` - Display-only currency conversion
//! - `notify` - Fire-and-forget notification seam

pub mod commission;
pub mod currency;
pub mod notify;
pub mod wallet;
pub mod workflow;
