//! Recharge repository for top-up request workflows.
//!
//! Approving a recharge credits the owner's wallet and marks the request
//! approved inside one database transaction: if the credit fails (for
//! example the owner has no wallet yet), the transaction rolls back and the
//! request stays pending.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    Set, TransactionTrait,
};
use uuid::Uuid;

use cartera_core::notify::{Notifier, RequestEvent, RequestKind};
use cartera_core::wallet::ensure_positive_amount;
use cartera_core::workflow::{
    RequestStatus as CoreRequestStatus, WorkflowError, WorkflowService,
};
use cartera_shared::types::{OwnerId, RequestId};
use cartera_shared::AppError;

use crate::entities::{recharge_requests, sea_orm_active_enums::RequestStatus};

use super::db_status_to_core;
use super::wallet::{WalletError, WalletRepository};

/// Error types for recharge operations.
#[derive(Debug, thiserror::Error)]
pub enum RechargeError {
    /// Recharge request not found.
    #[error("Recharge request {0} not found")]
    NotFound(Uuid),

    /// The amount is zero or negative.
    #[error("Amount must be greater than zero, got {0}")]
    InvalidAmount(Decimal),

    /// The request is not in a state that allows the transition.
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// The wallet credit failed.
    #[error(transparent)]
    Wallet(#[from] WalletError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<RechargeError> for AppError {
    fn from(err: RechargeError) -> Self {
        match err {
            RechargeError::NotFound(id) => Self::NotFound(format!("recharge request {id}")),
            RechargeError::InvalidAmount(amount) => Self::InvalidAmount(amount.to_string()),
            RechargeError::Workflow(e) => Self::InvalidState(e.to_string()),
            RechargeError::Wallet(e) => e.into(),
            RechargeError::Database(e) => Self::Dependency(e.to_string()),
        }
    }
}

/// Result of a bulk approval operation.
#[derive(Debug, Clone)]
pub struct BulkRechargeResult {
    /// Results for each request, in input order.
    pub results: Vec<BulkRechargeItemResult>,
    /// Number of successful approvals.
    pub success_count: usize,
    /// Number of failed approvals.
    pub failure_count: usize,
}

/// Result for a single request in bulk approval.
#[derive(Debug, Clone)]
pub struct BulkRechargeItemResult {
    /// Request ID.
    pub request_id: Uuid,
    /// Whether the approval succeeded.
    pub success: bool,
    /// Error message if failed.
    pub error: Option<String>,
}

/// Recharge repository for request workflows.
#[derive(Clone)]
pub struct RechargeRepository {
    db: DatabaseConnection,
    notifier: Arc<dyn Notifier>,
}

impl RechargeRepository {
    /// Creates a new recharge repository.
    #[must_use]
    pub fn new(db: DatabaseConnection, notifier: Arc<dyn Notifier>) -> Self {
        Self { db, notifier }
    }

    /// Creates a pending recharge request.
    ///
    /// Emits a fire-and-forget notification; delivery failure is logged and
    /// never fails the operation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` unless the amount is positive.
    pub async fn create(
        &self,
        owner_id: Uuid,
        amount: Decimal,
    ) -> Result<recharge_requests::Model, RechargeError> {
        ensure_positive_amount(amount).map_err(|_| RechargeError::InvalidAmount(amount))?;

        let now = Utc::now().into();
        let request = recharge_requests::ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(owner_id),
            amount: Set(amount),
            status: Set(RequestStatus::Pending),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = request.insert(&self.db).await?;

        let event = RequestEvent {
            kind: RequestKind::Recharge,
            request_id: RequestId::from_uuid(result.id),
            owner_id: OwnerId::from_uuid(result.owner_id),
            amount: result.amount,
        };
        if let Err(e) = self.notifier.request_created(&event).await {
            tracing::warn!(request_id = %result.id, error = %e, "recharge notification dropped");
        }

        Ok(result)
    }

    /// Gets a recharge request by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the request does not exist.
    pub async fn get(&self, id: Uuid) -> Result<recharge_requests::Model, RechargeError> {
        recharge_requests::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(RechargeError::NotFound(id))
    }

    /// Approves a pending recharge: credits the owner's wallet and marks
    /// the request approved, atomically.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `Workflow` (not pending), or `Wallet` when the
    /// credit fails; in every failure case the request stays pending.
    pub async fn approve(&self, id: Uuid) -> Result<recharge_requests::Model, RechargeError> {
        let request = self.get(id).await?;

        // Validate the transition before any mutation.
        let transition = WorkflowService::approve(db_status_to_core(&request.status))?;

        let txn = self.db.begin().await?;

        WalletRepository::credit_in(&txn, request.owner_id, request.amount).await?;

        // Guarded transition: a concurrent approval of the same request
        // updates zero rows here, and the credit above rolls back with it.
        let outcome = recharge_requests::Entity::update_many()
            .col_expr(
                recharge_requests::Column::Status,
                Expr::value(RequestStatus::Approved.as_enum()),
            )
            .col_expr(
                recharge_requests::Column::UpdatedAt,
                Expr::value(transition.occurred_at),
            )
            .filter(recharge_requests::Column::Id.eq(id))
            .filter(recharge_requests::Column::Status.eq(RequestStatus::Pending))
            .exec(&txn)
            .await?;

        if outcome.rows_affected == 0 {
            let current = recharge_requests::Entity::find_by_id(id)
                .one(&txn)
                .await?
                .ok_or(RechargeError::NotFound(id))?;
            return Err(WorkflowError::InvalidTransition {
                from: db_status_to_core(&current.status),
                to: CoreRequestStatus::Approved,
            }
            .into());
        }

        let updated = recharge_requests::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(RechargeError::NotFound(id))?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Rejects a pending recharge. No wallet effect.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `Workflow` if the request is not pending.
    pub async fn reject(&self, id: Uuid) -> Result<recharge_requests::Model, RechargeError> {
        let request = self.get(id).await?;

        let transition = WorkflowService::reject(db_status_to_core(&request.status))?;

        let outcome = recharge_requests::Entity::update_many()
            .col_expr(
                recharge_requests::Column::Status,
                Expr::value(RequestStatus::Rejected.as_enum()),
            )
            .col_expr(
                recharge_requests::Column::UpdatedAt,
                Expr::value(transition.occurred_at),
            )
            .filter(recharge_requests::Column::Id.eq(id))
            .filter(recharge_requests::Column::Status.eq(RequestStatus::Pending))
            .exec(&self.db)
            .await?;

        if outcome.rows_affected == 0 {
            let current = self.get(id).await?;
            return Err(WorkflowError::InvalidTransition {
                from: db_status_to_core(&current.status),
                to: CoreRequestStatus::Rejected,
            }
            .into());
        }

        self.get(id).await
    }

    /// Bulk approves multiple recharges.
    ///
    /// Each item is processed independently; one failure never blocks or
    /// rolls back the others.
    ///
    /// # Errors
    ///
    /// Per-item errors are reported in the result list, never as an `Err`.
    pub async fn bulk_approve(
        &self,
        request_ids: Vec<Uuid>,
    ) -> Result<BulkRechargeResult, RechargeError> {
        let mut results = Vec::with_capacity(request_ids.len());
        let mut success_count = 0;
        let mut failure_count = 0;

        for request_id in request_ids {
            match self.approve(request_id).await {
                Ok(_) => {
                    success_count += 1;
                    results.push(BulkRechargeItemResult {
                        request_id,
                        success: true,
                        error: None,
                    });
                }
                Err(e) => {
                    failure_count += 1;
                    results.push(BulkRechargeItemResult {
                        request_id,
                        success: false,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        Ok(BulkRechargeResult {
            results,
            success_count,
            failure_count,
        })
    }
}
