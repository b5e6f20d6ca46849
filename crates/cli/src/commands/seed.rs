//! Catalog seed command.
//!
//! Inserts the stock catalog (BMW IX5, Lada Kalina, Ford Focus) when the
//! `cars` table is empty. Safe to run repeatedly.

use secrecy::SecretString;
use tracing::info;

use carstore_storefront::db::{self, PgStore};
use carstore_storefront::services::Store;

/// Seed the catalog with the stock cars.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails,
/// or an insert fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("CARSTORE_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "CARSTORE_DATABASE_URL not set")?;

    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let store = PgStore::new(pool);
    let inserted = store.ensure_seeded().await?;

    if inserted == 0 {
        info!("Catalog already seeded, nothing to do");
    } else {
        info!(inserted, "Catalog seeded");
    }

    Ok(())
}
