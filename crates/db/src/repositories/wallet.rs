//! Wallet repository for balance custody database operations.
//!
//! Credit and debit are single-statement atomic read-modify-writes: the
//! balance arithmetic happens inside `UPDATE ... SET balance = balance ± $n`,
//! so two racing approvals on the same wallet serialize on the row and
//! cannot lose an update. The debit additionally carries the
//! `balance >= amount` guard in its WHERE clause, which is what enforces
//! non-negativity under concurrency.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, Set, Statement,
};
use uuid::Uuid;

use cartera_core::wallet::ensure_positive_amount;
use cartera_shared::types::Money;
use cartera_shared::AppError;

use crate::entities::wallets;

/// Error types for wallet operations.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// No wallet exists for the owner.
    #[error("Wallet not found for owner {0}")]
    NotFound(Uuid),

    /// A wallet already exists for the owner.
    #[error("Wallet already exists for owner {0}")]
    AlreadyExists(Uuid),

    /// The amount is zero or negative.
    #[error("Amount must be greater than zero, got {0}")]
    InvalidAmount(Decimal),

    /// The balance does not cover the debit.
    #[error("Saldo insuficiente. Disponible: ${available}, Solicitado: ${required}")]
    InsufficientFunds {
        /// Balance currently held by the wallet.
        available: Decimal,
        /// Amount the debit required.
        required: Decimal,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<cartera_core::wallet::WalletError> for WalletError {
    fn from(err: cartera_core::wallet::WalletError) -> Self {
        match err {
            cartera_core::wallet::WalletError::InvalidAmount(amount) => {
                Self::InvalidAmount(amount)
            }
            cartera_core::wallet::WalletError::InsufficientFunds {
                available,
                required,
            } => Self::InsufficientFunds {
                available,
                required,
            },
        }
    }
}

impl From<WalletError> for AppError {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::NotFound(owner) => Self::NotFound(format!("wallet for owner {owner}")),
            WalletError::AlreadyExists(owner) => {
                Self::Conflict(format!("wallet already exists for owner {owner}"))
            }
            WalletError::InvalidAmount(amount) => Self::InvalidAmount(amount.to_string()),
            WalletError::InsufficientFunds {
                available,
                required,
            } => Self::InsufficientFunds {
                available,
                required,
            },
            WalletError::Database(e) => Self::Dependency(e.to_string()),
        }
    }
}

/// Wallet repository for balance operations.
#[derive(Debug, Clone)]
pub struct WalletRepository {
    db: DatabaseConnection,
}

impl WalletRepository {
    /// Creates a new wallet repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a zero-balance wallet for an owner.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if the owner already has a wallet.
    pub async fn create(&self, owner_id: Uuid) -> Result<wallets::Model, WalletError> {
        let existing = wallets::Entity::find()
            .filter(wallets::Column::OwnerId.eq(owner_id))
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Err(WalletError::AlreadyExists(owner_id));
        }

        let now = Utc::now().into();
        let wallet = wallets::ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(owner_id),
            balance: Set(Money::ZERO.amount()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = wallet.insert(&self.db).await?;
        Ok(result)
    }

    /// Gets the wallet for an owner.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no wallet exists for the owner.
    pub async fn get_by_owner(&self, owner_id: Uuid) -> Result<wallets::Model, WalletError> {
        wallets::Entity::find()
            .filter(wallets::Column::OwnerId.eq(owner_id))
            .one(&self.db)
            .await?
            .ok_or(WalletError::NotFound(owner_id))
    }

    /// Gets the current balance for an owner.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no wallet exists for the owner.
    pub async fn get_balance(&self, owner_id: Uuid) -> Result<Decimal, WalletError> {
        Ok(self.get_by_owner(owner_id).await?.balance)
    }

    /// Credits an amount to the owner's wallet, returning the new balance.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the amount is not positive, or `NotFound`
    /// if no wallet exists for the owner.
    pub async fn credit(&self, owner_id: Uuid, amount: Decimal) -> Result<Decimal, WalletError> {
        Self::credit_in(&self.db, owner_id, amount).await
    }

    /// Debits an amount from the owner's wallet, returning the new balance.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount`, `NotFound`, or `InsufficientFunds` when the
    /// balance does not cover the amount.
    pub async fn debit(&self, owner_id: Uuid, amount: Decimal) -> Result<Decimal, WalletError> {
        Self::debit_in(&self.db, owner_id, amount).await
    }

    /// Credit as an atomic increment, usable inside a database transaction.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` or `NotFound`.
    pub async fn credit_in<C: ConnectionTrait>(
        conn: &C,
        owner_id: Uuid,
        amount: Decimal,
    ) -> Result<Decimal, WalletError> {
        ensure_positive_amount(amount)?;

        let row = conn
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                "UPDATE wallets \
                 SET balance = balance + $1, updated_at = now() \
                 WHERE owner_id = $2 \
                 RETURNING balance",
                [amount.into(), owner_id.into()],
            ))
            .await?;

        match row {
            Some(row) => Ok(row.try_get("", "balance")?),
            None => Err(WalletError::NotFound(owner_id)),
        }
    }

    /// Debit as an atomic conditional decrement, usable inside a database
    /// transaction.
    ///
    /// The `balance >= amount` guard lives in the statement itself, so a
    /// concurrent debit that would overdraw the wallet simply matches zero
    /// rows instead of writing a negative balance.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount`, `NotFound`, or `InsufficientFunds`.
    pub async fn debit_in<C: ConnectionTrait>(
        conn: &C,
        owner_id: Uuid,
        amount: Decimal,
    ) -> Result<Decimal, WalletError> {
        ensure_positive_amount(amount)?;

        let row = conn
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                "UPDATE wallets \
                 SET balance = balance - $1, updated_at = now() \
                 WHERE owner_id = $2 AND balance >= $1 \
                 RETURNING balance",
                [amount.into(), owner_id.into()],
            ))
            .await?;

        if let Some(row) = row {
            return Ok(row.try_get("", "balance")?);
        }

        // Zero rows hit: distinguish a missing wallet from an overdraw.
        let wallet = wallets::Entity::find()
            .filter(wallets::Column::OwnerId.eq(owner_id))
            .one(conn)
            .await?
            .ok_or(WalletError::NotFound(owner_id))?;

        Err(WalletError::InsufficientFunds {
            available: wallet.balance,
            required: amount,
        })
    }
}
