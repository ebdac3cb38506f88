//! Fire-and-forget notification seam.
//!
//! External collaborators (UI refresh, alert sounds) listen for new
//! requests. Delivery is best-effort: a notifier failure is logged and
//! swallowed at the call site, never surfaced to the workflow caller.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use cartera_shared::types::{OwnerId, RequestId};

/// The kind of request an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    /// A balance top-up request.
    Recharge,
    /// A payout request.
    Withdrawal,
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Recharge => write!(f, "recharge"),
            Self::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

/// Event emitted when a new request is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestEvent {
    /// Which workflow created the request.
    pub kind: RequestKind,
    /// The new request's id.
    pub request_id: RequestId,
    /// The requesting owner.
    pub owner_id: OwnerId,
    /// The request amount (recharge amount or withdrawal net).
    pub amount: Decimal,
}

/// Error from a notification backend.
#[derive(Debug, Error)]
#[error("Notification delivery failed: {0}")]
pub struct NotifyError(pub String);

/// Push-style change notification consumed by external collaborators.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Announces a freshly created request.
    async fn request_created(&self, event: &RequestEvent) -> Result<(), NotifyError>;
}

/// Default notifier that logs the event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn request_created(&self, event: &RequestEvent) -> Result<(), NotifyError> {
        tracing::info!(
            kind = %event.kind,
            request_id = %event.request_id,
            owner_id = %event.owner_id,
            amount = %event.amount,
            "request created"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_tracing_notifier_never_fails() {
        let event = RequestEvent {
            kind: RequestKind::Recharge,
            request_id: RequestId::new(),
            owner_id: OwnerId::new(),
            amount: dec!(25),
        };
        assert!(TracingNotifier.request_created(&event).await.is_ok());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(RequestKind::Recharge.to_string(), "recharge");
        assert_eq!(RequestKind::Withdrawal.to_string(), "withdrawal");
    }
}
