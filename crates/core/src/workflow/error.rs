//! Workflow error types.

use thiserror::Error;

use crate::workflow::types::RequestStatus;

/// Errors that can occur during request state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// Attempted a transition from a status that does not allow it.
    ///
    /// Re-approving an already-approved request lands here, which is what
    /// makes retries after a network failure safe to issue blindly.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: RequestStatus,
        /// The attempted target status.
        to: RequestStatus,
    },
}
