//! Request lifecycle management for recharges and withdrawals.
//!
//! Both request kinds share the same two-step state machine:
//! `pending -> {approved, rejected}`, with both outcomes terminal.
//!
//! # Modules
//!
//! - `types` - Request domain types (`RequestStatus`, `RequestTransition`)
//! - `error` - Workflow-specific error types
//! - `service` - State transition logic

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::WorkflowError;
pub use service::WorkflowService;
pub use types::{RequestStatus, RequestTransition};
