//! Withdrawal repository for payout request workflows.
//!
//! Approval recomputes the gross amount from the commission rate current at
//! approval time, debits the owner's wallet and credits the administrator's
//! wallet inside one database transaction, and marks the request approved
//! only after both mutations succeed. Any mid-sequence failure (including a
//! failed commission credit after the debit) rolls the transaction back, so
//! the owner's balance is restored and the request stays pending.

use std::collections::HashMap;
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

use crate::entities::{sea_orm_active_enums::RequestStatus, withdrawal_requests};

use super::commission_config::{CommissionConfigRepository, ConfigError};
use super::db_status_to_core;
use super::wallet::{WalletError, WalletRepository};

/// Error types for withdrawal operations.
#[derive(Debug, thiserror::Error)]
pub enum WithdrawalError {
    /// Withdrawal request not found.
    #[error("Withdrawal request {0} not found")]
    NotFound(Uuid),

    /// The net amount is zero or negative.
    #[error("Amount must be greater than zero, got {0}")]
    InvalidAmount(Decimal),

    /// The request is not in a state that allows the transition.
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// A wallet mutation failed (missing wallet, insufficient funds).
    #[error(transparent)]
    Wallet(#[from] WalletError),

    /// The commission configuration could not be read.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<WithdrawalError> for AppError {
    fn from(err: WithdrawalError) -> Self {
        match err {
            WithdrawalError::NotFound(id) => Self::NotFound(format!("withdrawal request {id}")),
            WithdrawalError::InvalidAmount(amount) => Self::InvalidAmount(amount.to_string()),
            WithdrawalError::Workflow(e) => Self::InvalidState(e.to_string()),
            WithdrawalError::Wallet(e) => e.into(),
            WithdrawalError::Config(e) => e.into(),
            WithdrawalError::Database(e) => Self::Dependency(e.to_string()),
        }
    }
}

/// A settled withdrawal approval with its commission split.
#[derive(Debug, Clone)]
pub struct ApprovedWithdrawal {
    /// The approved request.
    pub request: withdrawal_requests::Model,
    /// Gross amount debited from the owner's wallet.
    pub gross: Decimal,
    /// Commission credited to the administrator's wallet.
    pub commission: Decimal,
    /// Net amount paid out to the owner.
    pub net: Decimal,
}

/// A request that failed during bulk approval, with the reason.
#[derive(Debug, Clone)]
pub struct BulkWithdrawalItemFailure {
    /// Request ID.
    pub request_id: Uuid,
    /// Human-readable failure reason.
    pub reason: String,
}

/// Result of a bulk approval: the three outcome classes are reported
/// distinctly.
#[derive(Debug, Clone, Default)]
pub struct BulkWithdrawalResult {
    /// Requests approved with their commission splits.
    pub approved: Vec<ApprovedWithdrawal>,
    /// Requests that failed validation before any wallet was touched.
    pub failed_validation: Vec<BulkWithdrawalItemFailure>,
    /// Requests that passed validation but failed during mutation
    /// (their transactions rolled back).
    pub failed_mutation: Vec<BulkWithdrawalItemFailure>,
}

/// Withdrawal repository for request workflows.
#[derive(Clone)]
pub struct WithdrawalRepository {
    db: DatabaseConnection,
    /// Owner id of the administrator wallet that receives commissions.
    /// A single shared row: every approval credits it, so it gets the same
    /// atomic-increment treatment as any other wallet.
    admin_owner_id: Uuid,
    config: CommissionConfigRepository,
    wallets: WalletRepository,
    notifier: Arc<dyn Notifier>,
}

impl WithdrawalRepository {
    /// Creates a new withdrawal repository.
    #[must_use]
    pub fn new(db: DatabaseConnection, admin_owner_id: Uuid, notifier: Arc<dyn Notifier>) -> Self {
        let config = CommissionConfigRepository::new(db.clone());
        let wallets = WalletRepository::new(db.clone());
        Self {
            db,
            admin_owner_id,
            config,
            wallets,
            notifier,
        }
    }

    /// Creates a pending withdrawal request.
    ///
    /// The balance is deliberately not checked here: it can change between
    /// request and approval, so the check happens at approval time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` unless the net amount is positive.
    pub async fn create(
        &self,
        owner_id: Uuid,
        requested_net_amount: Decimal,
    ) -> Result<withdrawal_requests::Model, WithdrawalError> {
        ensure_positive_amount(requested_net_amount)
            .map_err(|_| WithdrawalError::InvalidAmount(requested_net_amount))?;

        let now = Utc::now().into();
        let request = withdrawal_requests::ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(owner_id),
            requested_net_amount: Set(requested_net_amount),
            gross_amount: Set(None),
            commission_amount: Set(None),
            net_amount: Set(None),
            status: Set(RequestStatus::Pending),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = request.insert(&self.db).await?;

        let event = RequestEvent {
            kind: RequestKind::Withdrawal,
            request_id: RequestId::from_uuid(result.id),
            owner_id: OwnerId::from_uuid(result.owner_id),
            amount: result.requested_net_amount,
        };
        if let Err(e) = self.notifier.request_created(&event).await {
            tracing::warn!(request_id = %result.id, error = %e, "withdrawal notification dropped");
        }

        Ok(result)
    }

    /// Gets a withdrawal request by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the request does not exist.
    pub async fn get(&self, id: Uuid) -> Result<withdrawal_requests::Model, WithdrawalError> {
        withdrawal_requests::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(WithdrawalError::NotFound(id))
    }

    /// Approves a pending withdrawal.
    ///
    /// Sequence: validate the transition, read the commission rate current
    /// right now, compute `gross = net / (1 - rate/100)`, verify the owner's
    /// balance covers the gross, then debit owner / credit admin / mark
    /// approved in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `Workflow` (not pending), or
    /// `Wallet`/`InsufficientFunds` with available and required amounts.
    /// On any error the request stays pending and no balance changes.
    pub async fn approve(&self, id: Uuid) -> Result<ApprovedWithdrawal, WithdrawalError> {
        let request = self.get(id).await?;
        WorkflowService::approve(db_status_to_core(&request.status))?;

        let settings = self.config.current().await?;
        let rate = settings.commission_rate;
        let net = request.requested_net_amount;
        let gross = rate.gross_for_net(net);
        let commission = rate.commission_for_net(net);

        // Friendly pre-check; the conditional debit below re-checks
        // atomically, so a race here only changes which error surfaces.
        let available = self.wallets.get_balance(request.owner_id).await?;
        if available < gross {
            return Err(WalletError::InsufficientFunds {
                available,
                required: gross,
            }
            .into());
        }

        self.execute_approval(request, gross, commission, net).await
    }

    /// Rejects a pending withdrawal. Wallets untouched regardless of state.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `Workflow` if the request is not pending.
    pub async fn reject(&self, id: Uuid) -> Result<withdrawal_requests::Model, WithdrawalError> {
        let request = self.get(id).await?;

        let transition = WorkflowService::reject(db_status_to_core(&request.status))?;

        let outcome = withdrawal_requests::Entity::update_many()
            .col_expr(
                withdrawal_requests::Column::Status,
                Expr::value(RequestStatus::Rejected.as_enum()),
            )
            .col_expr(
                withdrawal_requests::Column::UpdatedAt,
                Expr::value(transition.occurred_at),
            )
            .filter(withdrawal_requests::Column::Id.eq(id))
            .filter(withdrawal_requests::Column::Status.eq(RequestStatus::Pending))
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

    /// Bulk approval with three distinct outcome classes.
    ///
    /// Every item is validated (pending state, balance covers gross at the
    /// current rate) before any wallet is mutated; only the validated subset
    /// is then executed. Balances are projected cumulatively per owner
    /// during validation, so two requests draining the same wallet cannot
    /// both pass. Execution failures (races) roll back per item and are
    /// reported as `failed_mutation`.
    ///
    /// # Errors
    ///
    /// Only configuration/database errors while preparing the batch are
    /// returned as `Err`; per-item outcomes live in the result.
    pub async fn bulk_approve(
        &self,
        request_ids: Vec<Uuid>,
    ) -> Result<BulkWithdrawalResult, WithdrawalError> {
        let settings = self.config.current().await?;
        let rate = settings.commission_rate;

        let mut result = BulkWithdrawalResult::default();
        let mut scheduled = Vec::with_capacity(request_ids.len());
        let mut projected: HashMap<Uuid, Decimal> = HashMap::new();

        // Phase 1: validate everything before touching any wallet.
        for request_id in request_ids {
            let request = match self.get(request_id).await {
                Ok(request) => request,
                Err(e) => {
                    result.failed_validation.push(BulkWithdrawalItemFailure {
                        request_id,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if let Err(e) = WorkflowService::approve(db_status_to_core(&request.status)) {
                result.failed_validation.push(BulkWithdrawalItemFailure {
                    request_id,
                    reason: e.to_string(),
                });
                continue;
            }

            let gross = rate.gross_for_net(request.requested_net_amount);
            let commission = rate.commission_for_net(request.requested_net_amount);

            let available = match projected.get(&request.owner_id) {
                Some(balance) => *balance,
                None => match self.wallets.get_balance(request.owner_id).await {
                    Ok(balance) => balance,
                    Err(e) => {
                        result.failed_validation.push(BulkWithdrawalItemFailure {
                            request_id,
                            reason: e.to_string(),
                        });
                        continue;
                    }
                },
            };

            if available < gross {
                result.failed_validation.push(BulkWithdrawalItemFailure {
                    request_id,
                    reason: WalletError::InsufficientFunds {
                        available,
                        required: gross,
                    }
                    .to_string(),
                });
                continue;
            }

            projected.insert(request.owner_id, available - gross);
            scheduled.push((request, gross, commission));
        }

        // Phase 2: execute the validated subset, one transaction per item.
        for (request, gross, commission) in scheduled {
            let request_id = request.id;
            let net = request.requested_net_amount;
            match self.execute_approval(request, gross, commission, net).await {
                Ok(approved) => result.approved.push(approved),
                Err(e) => result.failed_mutation.push(BulkWithdrawalItemFailure {
                    request_id,
                    reason: e.to_string(),
                }),
            }
        }

        Ok(result)
    }

    /// Debit owner, credit admin, mark approved - all or nothing.
    async fn execute_approval(
        &self,
        request: withdrawal_requests::Model,
        gross: Decimal,
        commission: Decimal,
        net: Decimal,
    ) -> Result<ApprovedWithdrawal, WithdrawalError> {
        let txn = self.db.begin().await?;

        WalletRepository::debit_in(&txn, request.owner_id, gross).await?;

        // A zero commission (rate 0%) credits nothing rather than tripping
        // the positive-amount validation.
        if commission > Decimal::ZERO {
            WalletRepository::credit_in(&txn, self.admin_owner_id, commission).await?;
        }

        // Guarded transition: a concurrent approval of the same request
        // updates zero rows here, and the debit above rolls back with it.
        // The gross/commission/net split is snapshotted on the row so it
        // survives later rate changes.
        let outcome = withdrawal_requests::Entity::update_many()
            .col_expr(
                withdrawal_requests::Column::Status,
                Expr::value(RequestStatus::Approved.as_enum()),
            )
            .col_expr(
                withdrawal_requests::Column::GrossAmount,
                Expr::value(gross),
            )
            .col_expr(
                withdrawal_requests::Column::CommissionAmount,
                Expr::value(commission),
            )
            .col_expr(withdrawal_requests::Column::NetAmount, Expr::value(net))
            .col_expr(
                withdrawal_requests::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(withdrawal_requests::Column::Id.eq(request.id))
            .filter(withdrawal_requests::Column::Status.eq(RequestStatus::Pending))
            .exec(&txn)
            .await?;

        if outcome.rows_affected == 0 {
            let current = withdrawal_requests::Entity::find_by_id(request.id)
                .one(&txn)
                .await?
                .ok_or(WithdrawalError::NotFound(request.id))?;
            return Err(WorkflowError::InvalidTransition {
                from: db_status_to_core(&current.status),
                to: CoreRequestStatus::Approved,
            }
            .into());
        }

        let updated = withdrawal_requests::Entity::find_by_id(request.id)
            .one(&txn)
            .await?
            .ok_or(WithdrawalError::NotFound(request.id))?;

        txn.commit().await?;

        Ok(ApprovedWithdrawal {
            request: updated,
            gross,
            commission,
            net,
        })
    }
}
