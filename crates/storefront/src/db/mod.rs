//! Database operations for storefront `PostgreSQL`.
//!
//! ## Tables
//!
//! - `cars` - Seeded catalog of purchasable cars
//! - `orders` - Recorded purchase orders (append only)
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p carstore-cli -- migrate
//! ```

pub mod cars;
pub mod orders;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use carstore_core::CarId;

pub use cars::CarRepository;
pub use orders::OrderRepository;

use crate::models::{Car, NewCar, NewOrder, Order};
use crate::services::store::{Store, seed_cars};

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., dangling car reference).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Persistence gateway backed by `PostgreSQL`.
///
/// Thin facade over the per-table repositories so the service layer can
/// depend on the [`Store`] trait alone.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a new Postgres-backed store.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Store for PgStore {
    async fn list_cars(&self) -> Result<Vec<Car>, RepositoryError> {
        CarRepository::new(&self.pool).list().await
    }

    async fn get_car(&self, id: CarId) -> Result<Option<Car>, RepositoryError> {
        CarRepository::new(&self.pool).get(id).await
    }

    async fn insert_car(&self, car: &NewCar) -> Result<Car, RepositoryError> {
        CarRepository::new(&self.pool).insert(car).await
    }

    async fn insert_order(&self, order: &NewOrder) -> Result<Order, RepositoryError> {
        OrderRepository::new(&self.pool).insert(order).await
    }

    async fn ensure_seeded(&self) -> Result<u64, RepositoryError> {
        let repo = CarRepository::new(&self.pool);
        if repo.count().await? > 0 {
            return Ok(0);
        }

        let mut inserted = 0;
        for car in seed_cars() {
            repo.insert(&car).await?;
            inserted += 1;
        }
        Ok(inserted)
    }
}
