//! Purchase settlement repository.
//!
//! A settlement moves the price from the buyer's wallet to the provider's
//! wallet and consumes exactly one inventory unit of the product, all inside
//! one database transaction. The unit claim uses `FOR UPDATE SKIP LOCKED`,
//! so two buyers racing for the last unit never consume the same one: the
//! loser sees no available unit and the whole settlement rolls back.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, Set, Statement, TransactionTrait,
};
use uuid::Uuid;

use cartera_core::wallet::ensure_positive_amount;
use cartera_shared::AppError;

use crate::entities::{inventory_units, purchase_settlements};

use super::wallet::{WalletError, WalletRepository};

/// Error types for settlement operations.
#[derive(Debug, thiserror::Error)]
pub enum SettlementError {
    /// The price is zero or negative.
    #[error("Price must be greater than zero, got {0}")]
    InvalidAmount(Decimal),

    /// No unconsumed inventory unit remains for the product.
    #[error("Product {0} is out of stock")]
    OutOfStock(Uuid),

    /// A wallet mutation failed (missing wallet, insufficient funds).
    #[error(transparent)]
    Wallet(#[from] WalletError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<SettlementError> for AppError {
    fn from(err: SettlementError) -> Self {
        match err {
            SettlementError::InvalidAmount(amount) => Self::InvalidAmount(amount.to_string()),
            SettlementError::OutOfStock(product_id) => {
                Self::OutOfStock(format!("product {product_id}"))
            }
            SettlementError::Wallet(e) => e.into(),
            SettlementError::Database(e) => Self::Dependency(e.to_string()),
        }
    }
}

/// Result of a completed settlement.
#[derive(Debug, Clone)]
pub struct SettlementOutcome {
    /// The persisted settlement record.
    pub settlement: purchase_settlements::Model,
    /// The inventory unit this settlement consumed.
    pub consumed_unit_id: Uuid,
}

/// Claims the oldest available unit of a product. `SKIP LOCKED` makes
/// concurrent claims take distinct rows instead of blocking on each other.
const CLAIM_UNIT_SQL: &str = r"
UPDATE inventory_units
SET consumed_at = now()
WHERE id = (
    SELECT id FROM inventory_units
    WHERE product_id = $1 AND consumed_at IS NULL
    ORDER BY created_at
    LIMIT 1
    FOR UPDATE SKIP LOCKED
)
RETURNING id
";

/// Settlement repository for buyer-to-provider purchases.
#[derive(Clone)]
pub struct SettlementRepository {
    db: DatabaseConnection,
}

impl SettlementRepository {
    /// Creates a new settlement repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Settles a purchase: debit buyer, consume one unit, credit provider,
    /// record the settlement. All four steps commit together or not at all.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for a non-positive price, `Wallet` when the
    /// buyer's balance does not cover the price or a wallet is missing, and
    /// `OutOfStock` when the product has no available unit. On any error no
    /// balance changes and no unit is consumed.
    pub async fn settle(
        &self,
        buyer_id: Uuid,
        provider_id: Uuid,
        product_id: Uuid,
        price: Decimal,
    ) -> Result<SettlementOutcome, SettlementError> {
        ensure_positive_amount(price).map_err(|_| SettlementError::InvalidAmount(price))?;

        let txn = self.db.begin().await?;

        WalletRepository::debit_in(&txn, buyer_id, price).await?;

        let unit_id = Self::claim_unit_in(&txn, product_id)
            .await?
            .ok_or(SettlementError::OutOfStock(product_id))?;

        WalletRepository::credit_in(&txn, provider_id, price).await?;

        let settlement = purchase_settlements::ActiveModel {
            id: Set(Uuid::new_v4()),
            buyer_id: Set(buyer_id),
            provider_id: Set(provider_id),
            product_id: Set(product_id),
            price: Set(price),
            created_at: Set(Utc::now().into()),
        };
        let settlement = settlement.insert(&txn).await?;

        txn.commit().await?;

        tracing::info!(
            settlement_id = %settlement.id,
            buyer_id = %buyer_id,
            provider_id = %provider_id,
            product_id = %product_id,
            price = %price,
            unit_id = %unit_id,
            "purchase settled"
        );

        Ok(SettlementOutcome {
            settlement,
            consumed_unit_id: unit_id,
        })
    }

    /// Registers one sellable unit of a product.
    ///
    /// # Errors
    ///
    /// Returns `Database` on insert failure.
    pub async fn add_inventory_unit(
        &self,
        product_id: Uuid,
    ) -> Result<inventory_units::Model, SettlementError> {
        let unit = inventory_units::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(product_id),
            consumed_at: Set(None),
            created_at: Set(Utc::now().into()),
        };
        Ok(unit.insert(&self.db).await?)
    }

    /// Counts unconsumed units of a product.
    ///
    /// # Errors
    ///
    /// Returns `Database` on query failure.
    pub async fn available_units(&self, product_id: Uuid) -> Result<u64, SettlementError> {
        let count = inventory_units::Entity::find()
            .filter(inventory_units::Column::ProductId.eq(product_id))
            .filter(inventory_units::Column::ConsumedAt.is_null())
            .count(&self.db)
            .await?;
        Ok(count)
    }

    async fn claim_unit_in<C: ConnectionTrait>(
        conn: &C,
        product_id: Uuid,
    ) -> Result<Option<Uuid>, DbErr> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            CLAIM_UNIT_SQL,
            [product_id.into()],
        );
        let row = conn.query_one(stmt).await?;
        row.map(|row| row.try_get("", "id")).transpose()
    }
}
