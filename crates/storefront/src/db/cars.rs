//! Car repository for catalog database operations.
//!
//! Queries use the runtime sqlx API with explicit row structs, so the
//! workspace builds without a live database.

use sqlx::PgPool;

use carstore_core::{CarId, Price};

use super::RepositoryError;
use crate::models::{Car, NewCar};

/// Internal row type for car queries.
#[derive(Debug, sqlx::FromRow)]
struct CarRow {
    id: i32,
    name: String,
    company: String,
    price: i64,
}

impl TryFrom<CarRow> for Car {
    type Error = RepositoryError;

    fn try_from(row: CarRow) -> Result<Self, RepositoryError> {
        let price = Price::new(row.price).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid price in database: {e}"))
        })?;

        Ok(Self {
            id: CarId::new(row.id),
            name: row.name,
            company: row.company,
            price,
        })
    }
}

/// Repository for car database operations.
pub struct CarRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CarRepository<'a> {
    /// Create a new car repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all cars in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored price is invalid.
    pub async fn list(&self) -> Result<Vec<Car>, RepositoryError> {
        let rows: Vec<CarRow> = sqlx::query_as(
            r"
            SELECT id, name, company, price
            FROM cars
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Car::try_from).collect()
    }

    /// Get a car by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored price is invalid.
    pub async fn get(&self, id: CarId) -> Result<Option<Car>, RepositoryError> {
        let row: Option<CarRow> = sqlx::query_as(
            r"
            SELECT id, name, company, price
            FROM cars
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.map(Car::try_from).transpose()
    }

    /// Insert a new car, returning the stored row with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, car: &NewCar) -> Result<Car, RepositoryError> {
        let row: CarRow = sqlx::query_as(
            r"
            INSERT INTO cars (name, company, price)
            VALUES ($1, $2, $3)
            RETURNING id, name, company, price
            ",
        )
        .bind(&car.name)
        .bind(&car.company)
        .bind(car.price.amount())
        .fetch_one(self.pool)
        .await?;

        Car::try_from(row)
    }

    /// Count the cars in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cars")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
