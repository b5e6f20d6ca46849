//! Order repository for purchase database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use carstore_core::{CarId, OrderId};

use super::RepositoryError;
use crate::models::{NewOrder, Order};

/// Internal row type for order queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i32,
    customer_name: String,
    address: String,
    contact_phone: String,
    car_id: i32,
    created_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: OrderId::new(row.id),
            customer_name: row.customer_name,
            address: row.address,
            contact_phone: row.contact_phone,
            car_id: CarId::new(row.car_id),
            created_at: row.created_at,
        }
    }
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Append a new order, returning the stored row with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the referenced car does not
    /// exist (foreign key violation).
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert(&self, order: &NewOrder) -> Result<Order, RepositoryError> {
        let row: OrderRow = sqlx::query_as(
            r"
            INSERT INTO orders (customer_name, address, contact_phone, car_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, customer_name, address, contact_phone, car_id, created_at
            ",
        )
        .bind(&order.customer_name)
        .bind(&order.address)
        .bind(&order.contact_phone)
        .bind(order.car_id.as_i32())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_foreign_key_violation()
            {
                return RepositoryError::NotFound;
            }
            RepositoryError::Database(e)
        })?;

        Ok(Order::from(row))
    }
}
