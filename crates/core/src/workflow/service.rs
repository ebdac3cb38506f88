//! State transition logic for recharge and withdrawal requests.
//!
//! The service only validates transitions; the wallet mutations that
//! accompany an approval are sequenced by the repositories in `cartera-db`,
//! which mark a request approved strictly after its mutations succeed.

use chrono::Utc;

use crate::workflow::error::WorkflowError;
use crate::workflow::types::{RequestStatus, RequestTransition};

/// Stateless service for request workflow transitions.
pub struct WorkflowService;

impl WorkflowService {
    /// Approve a pending request.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::InvalidTransition` if the request is not
    /// pending (terminal statuses stay terminal).
    pub fn approve(current_status: RequestStatus) -> Result<RequestTransition, WorkflowError> {
        match current_status {
            RequestStatus::Pending => Ok(RequestTransition {
                new_status: RequestStatus::Approved,
                occurred_at: Utc::now(),
            }),
            _ => Err(WorkflowError::InvalidTransition {
                from: current_status,
                to: RequestStatus::Approved,
            }),
        }
    }

    /// Reject a pending request. No wallet effect.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::InvalidTransition` if the request is not
    /// pending.
    pub fn reject(current_status: RequestStatus) -> Result<RequestTransition, WorkflowError> {
        match current_status {
            RequestStatus::Pending => Ok(RequestTransition {
                new_status: RequestStatus::Rejected,
                occurred_at: Utc::now(),
            }),
            _ => Err(WorkflowError::InvalidTransition {
                from: current_status,
                to: RequestStatus::Rejected,
            }),
        }
    }

    /// Check if a status transition is valid.
    ///
    /// Valid transitions:
    /// - Pending → Approved (approve)
    /// - Pending → Rejected (reject)
    #[must_use]
    pub fn is_valid_transition(from: RequestStatus, to: RequestStatus) -> bool {
        matches!(
            (from, to),
            (
                RequestStatus::Pending,
                RequestStatus::Approved | RequestStatus::Rejected
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approve_from_pending() {
        let transition = WorkflowService::approve(RequestStatus::Pending).unwrap();
        assert_eq!(transition.new_status, RequestStatus::Approved);
    }

    #[test]
    fn test_approve_from_approved_fails() {
        let result = WorkflowService::approve(RequestStatus::Approved);
        assert_eq!(
            result,
            Err(WorkflowError::InvalidTransition {
                from: RequestStatus::Approved,
                to: RequestStatus::Approved,
            })
        );
    }

    #[test]
    fn test_approve_from_rejected_fails() {
        assert!(matches!(
            WorkflowService::approve(RequestStatus::Rejected),
            Err(WorkflowError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_reject_from_pending() {
        let transition = WorkflowService::reject(RequestStatus::Pending).unwrap();
        assert_eq!(transition.new_status, RequestStatus::Rejected);
    }

    #[test]
    fn test_reject_from_terminal_fails() {
        assert!(matches!(
            WorkflowService::reject(RequestStatus::Approved),
            Err(WorkflowError::InvalidTransition { .. })
        ));
        assert!(matches!(
            WorkflowService::reject(RequestStatus::Rejected),
            Err(WorkflowError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_is_valid_transition() {
        assert!(WorkflowService::is_valid_transition(
            RequestStatus::Pending,
            RequestStatus::Approved
        ));
        assert!(WorkflowService::is_valid_transition(
            RequestStatus::Pending,
            RequestStatus::Rejected
        ));

        assert!(!WorkflowService::is_valid_transition(
            RequestStatus::Approved,
            RequestStatus::Rejected
        ));
        assert!(!WorkflowService::is_valid_transition(
            RequestStatus::Rejected,
            RequestStatus::Approved
        ));
        assert!(!WorkflowService::is_valid_transition(
            RequestStatus::Approved,
            RequestStatus::Pending
        ));
    }
}
