//! Commission configuration repository.
//!
//! Configuration history is append-only: `save` always inserts, `restore`
//! re-saves an old row's values under a fresh id and timestamp, and nothing
//! ever mutates an existing row. The latest row by `created_at` is the
//! current configuration.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use rust_decimal::Decimal;
use uuid::Uuid;

use cartera_core::commission::{CommissionError, CommissionSettings};
use cartera_shared::AppError;

use crate::entities::commission_configurations;

/// Error types for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration row not found.
    #[error("Configuration {0} not found")]
    NotFound(Uuid),

    /// Values failed domain validation.
    #[error(transparent)]
    Invalid(#[from] CommissionError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NotFound(id) => Self::NotFound(format!("configuration {id}")),
            ConfigError::Invalid(e) => Self::InvalidAmount(e.to_string()),
            ConfigError::Database(e) => Self::Dependency(e.to_string()),
        }
    }
}

/// Input for saving a new configuration row.
#[derive(Debug, Clone)]
pub struct SaveConfigurationInput {
    /// Withdrawal commission percentage, within `[0, 100)`.
    pub commission_rate: Decimal,
    /// Display-only conversion multiplier. Positive.
    pub conversion_rate: Decimal,
    /// Support contact shown to users.
    pub support_email: String,
}

/// Commission configuration repository.
#[derive(Debug, Clone)]
pub struct CommissionConfigRepository {
    db: DatabaseConnection,
}

impl CommissionConfigRepository {
    /// Creates a new commission configuration repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the settings currently in effect.
    ///
    /// Falls back to the documented default (10% commission, conversion 1.0)
    /// when no configuration has ever been saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row carries values
    /// outside the domain ranges (the table checks make that unreachable in
    /// practice).
    pub async fn current(&self) -> Result<CommissionSettings, ConfigError> {
        let row = commission_configurations::Entity::find()
            .order_by_desc(commission_configurations::Column::CreatedAt)
            .order_by_desc(commission_configurations::Column::Id)
            .one(&self.db)
            .await?;

        match row {
            Some(row) => Ok(CommissionSettings::new(
                row.commission_rate,
                row.conversion_rate,
                row.support_email,
            )?),
            None => Ok(CommissionSettings::default()),
        }
    }

    /// Saves a new configuration row; history is never mutated.
    ///
    /// # Errors
    ///
    /// Returns an error if the values fail validation or the insert fails.
    pub async fn save(
        &self,
        input: SaveConfigurationInput,
    ) -> Result<commission_configurations::Model, ConfigError> {
        // Validate through the domain type before touching the database.
        CommissionSettings::new(
            input.commission_rate,
            input.conversion_rate,
            input.support_email.clone(),
        )?;

        let row = commission_configurations::ActiveModel {
            id: Set(Uuid::new_v4()),
            commission_rate: Set(input.commission_rate),
            conversion_rate: Set(input.conversion_rate),
            support_email: Set(input.support_email),
            created_at: Set(Utc::now().into()),
        };

        let result = row.insert(&self.db).await?;
        Ok(result)
    }

    /// Restores an old configuration by re-saving its values as the new
    /// current row. The old row keeps its id and timestamp untouched.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no row exists at `id`.
    pub async fn restore(
        &self,
        id: Uuid,
    ) -> Result<commission_configurations::Model, ConfigError> {
        let old = commission_configurations::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ConfigError::NotFound(id))?;

        self.save(SaveConfigurationInput {
            commission_rate: old.commission_rate,
            conversion_rate: old.conversion_rate,
            support_email: old.support_email,
        })
        .await
    }

    /// Lists the full configuration history, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn history(
        &self,
    ) -> Result<Vec<commission_configurations::Model>, ConfigError> {
        let rows = commission_configurations::Entity::find()
            .order_by_desc(commission_configurations::Column::CreatedAt)
            .order_by_desc(commission_configurations::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }
}
