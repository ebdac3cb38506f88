//! Database seeder for Cartera development and testing.
//!
//! Seeds the administrator wallet, an initial commission configuration,
//! and a demo owner with product inventory for local development.
//!
//! Usage: cargo run --bin seeder

use rust_decimal_macros::dec;
use uuid::Uuid;

use cartera_db::repositories::commission_config::SaveConfigurationInput;
use cartera_db::repositories::wallet::WalletError;
use cartera_db::{CommissionConfigRepository, SettlementRepository, WalletRepository};
use cartera_shared::config::AppConfig;

/// Demo owner ID (consistent for all seeds)
const DEMO_OWNER_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Demo product ID (consistent for all seeds)
const DEMO_PRODUCT_ID: &str = "00000000-0000-0000-0000-000000000002";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().expect("Failed to load configuration");

    println!("Connecting to database...");
    let db = cartera_db::connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    let wallets = WalletRepository::new(db.clone());

    println!("Seeding administrator wallet...");
    ensure_wallet(&wallets, config.platform.admin_owner_id).await;

    println!("Seeding commission configuration...");
    seed_configuration(&db).await;

    println!("Seeding demo owner wallet...");
    ensure_wallet(&wallets, demo_owner_id()).await;

    println!("Seeding demo inventory...");
    seed_inventory(&db).await;

    println!("Seeding complete!");
}

fn demo_owner_id() -> Uuid {
    Uuid::parse_str(DEMO_OWNER_ID).expect("Demo owner id is a valid UUID")
}

fn demo_product_id() -> Uuid {
    Uuid::parse_str(DEMO_PRODUCT_ID).expect("Demo product id is a valid UUID")
}

/// Creates a wallet unless the owner already has one.
async fn ensure_wallet(wallets: &WalletRepository, owner_id: Uuid) {
    match wallets.create(owner_id).await {
        Ok(_) => {}
        Err(WalletError::AlreadyExists(_)) => {
            println!("  Wallet for {owner_id} already exists, skipping...");
        }
        Err(e) => panic!("Failed to create wallet for {owner_id}: {e}"),
    }
}

/// Saves an initial configuration row if the history is still empty.
async fn seed_configuration(db: &sea_orm::DatabaseConnection) {
    let configs = CommissionConfigRepository::new(db.clone());

    let history = configs.history().await.expect("Failed to read history");
    if !history.is_empty() {
        println!("  Configuration history already seeded, skipping...");
        return;
    }

    configs
        .save(SaveConfigurationInput {
            commission_rate: dec!(10),
            conversion_rate: dec!(36.5),
            support_email: "soporte@cartera.dev".to_string(),
        })
        .await
        .expect("Failed to save configuration");
}

/// Tops the demo product up to three available units.
async fn seed_inventory(db: &sea_orm::DatabaseConnection) {
    let settlements = SettlementRepository::new(db.clone());
    let product_id = demo_product_id();

    let available = settlements
        .available_units(product_id)
        .await
        .expect("Failed to count inventory");
    for _ in available..3 {
        settlements
            .add_inventory_unit(product_id)
            .await
            .expect("Failed to add inventory unit");
    }
}
