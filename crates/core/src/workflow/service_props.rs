//! Property tests for the request state machine.

use proptest::prelude::*;

use crate::workflow::service::WorkflowService;
use crate::workflow::types::RequestStatus;

fn status_strategy() -> impl Strategy<Value = RequestStatus> {
    prop_oneof![
        Just(RequestStatus::Pending),
        Just(RequestStatus::Approved),
        Just(RequestStatus::Rejected),
    ]
}

fn terminal_status_strategy() -> impl Strategy<Value = RequestStatus> {
    prop_oneof![Just(RequestStatus::Approved), Just(RequestStatus::Rejected)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Terminal statuses reject every further transition; this is the
    /// idempotent-retry guarantee (a second approve on an approved request
    /// errors instead of re-applying wallet mutations).
    #[test]
    fn prop_terminal_statuses_are_sticky(status in terminal_status_strategy()) {
        prop_assert!(WorkflowService::approve(status).is_err());
        prop_assert!(WorkflowService::reject(status).is_err());
    }

    /// Only pending allows any transition at all.
    #[test]
    fn prop_only_pending_transitions(from in status_strategy(), to in status_strategy()) {
        let valid = WorkflowService::is_valid_transition(from, to);
        if valid {
            prop_assert_eq!(from, RequestStatus::Pending);
            prop_assert!(to.is_terminal());
        }
    }

    /// The transition helpers agree with `is_valid_transition`.
    #[test]
    fn prop_helpers_agree_with_validity(from in status_strategy()) {
        prop_assert_eq!(
            WorkflowService::approve(from).is_ok(),
            WorkflowService::is_valid_transition(from, RequestStatus::Approved)
        );
        prop_assert_eq!(
            WorkflowService::reject(from).is_ok(),
            WorkflowService::is_valid_transition(from, RequestStatus::Rejected)
        );
    }
}
