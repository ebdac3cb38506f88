//! Initial database migration.
//!
//! Creates the wallet ledger schema: wallets, request tables, configuration
//! history, inventory units, and settlement records.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: WALLETS
        // ============================================================
        db.execute_unprepared(WALLETS_SQL).await?;

        // ============================================================
        // PART 3: REQUEST WORKFLOWS
        // ============================================================
        db.execute_unprepared(RECHARGE_REQUESTS_SQL).await?;
        db.execute_unprepared(WITHDRAWAL_REQUESTS_SQL).await?;

        // ============================================================
        // PART 4: CONFIGURATION HISTORY
        // ============================================================
        db.execute_unprepared(COMMISSION_CONFIGURATIONS_SQL).await?;

        // ============================================================
        // PART 5: INVENTORY & SETTLEMENTS
        // ============================================================
        db.execute_unprepared(INVENTORY_UNITS_SQL).await?;
        db.execute_unprepared(PURCHASE_SETTLEMENTS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Request lifecycle status (shared by recharges and withdrawals)
CREATE TYPE request_status AS ENUM (
    'pending',
    'approved',
    'rejected'
);
";

const WALLETS_SQL: &str = r"
CREATE TABLE wallets (
    id UUID PRIMARY KEY,
    owner_id UUID NOT NULL UNIQUE,
    balance NUMERIC(18, 2) NOT NULL DEFAULT 0 CHECK (balance >= 0),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const RECHARGE_REQUESTS_SQL: &str = r"
CREATE TABLE recharge_requests (
    id UUID PRIMARY KEY,
    owner_id UUID NOT NULL,
    amount NUMERIC(18, 2) NOT NULL CHECK (amount > 0),
    status request_status NOT NULL DEFAULT 'pending',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_recharge_requests_owner ON recharge_requests (owner_id);
CREATE INDEX idx_recharge_requests_status ON recharge_requests (status);
";

const WITHDRAWAL_REQUESTS_SQL: &str = r"
CREATE TABLE withdrawal_requests (
    id UUID PRIMARY KEY,
    owner_id UUID NOT NULL,
    requested_net_amount NUMERIC(18, 2) NOT NULL CHECK (requested_net_amount > 0),
    -- Approval snapshot. Null until the request is approved.
    gross_amount NUMERIC(18, 2),
    commission_amount NUMERIC(18, 2),
    net_amount NUMERIC(18, 2),
    status request_status NOT NULL DEFAULT 'pending',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_withdrawal_requests_owner ON withdrawal_requests (owner_id);
CREATE INDEX idx_withdrawal_requests_status ON withdrawal_requests (status);
";

const COMMISSION_CONFIGURATIONS_SQL: &str = r"
-- Append-only: rows are inserted, never updated or deleted.
CREATE TABLE commission_configurations (
    id UUID PRIMARY KEY,
    commission_rate NUMERIC(5, 2) NOT NULL CHECK (commission_rate >= 0 AND commission_rate < 100),
    conversion_rate NUMERIC(18, 6) NOT NULL CHECK (conversion_rate > 0),
    support_email TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_commission_configurations_created ON commission_configurations (created_at DESC);
";

const INVENTORY_UNITS_SQL: &str = r"
CREATE TABLE inventory_units (
    id UUID PRIMARY KEY,
    product_id UUID NOT NULL,
    consumed_at TIMESTAMPTZ,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Settlement claims the oldest available unit per product.
CREATE INDEX idx_inventory_units_available
    ON inventory_units (product_id, created_at)
    WHERE consumed_at IS NULL;
";

const PURCHASE_SETTLEMENTS_SQL: &str = r"
CREATE TABLE purchase_settlements (
    id UUID PRIMARY KEY,
    buyer_id UUID NOT NULL,
    provider_id UUID NOT NULL,
    product_id UUID NOT NULL,
    price NUMERIC(18, 2) NOT NULL CHECK (price > 0),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_purchase_settlements_buyer ON purchase_settlements (buyer_id);
CREATE INDEX idx_purchase_settlements_provider ON purchase_settlements (provider_id);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS purchase_settlements;
DROP TABLE IF EXISTS inventory_units;
DROP TABLE IF EXISTS commission_configurations;
DROP TABLE IF EXISTS withdrawal_requests;
DROP TABLE IF EXISTS recharge_requests;
DROP TABLE IF EXISTS wallets;
DROP TYPE IF EXISTS request_status;
";
