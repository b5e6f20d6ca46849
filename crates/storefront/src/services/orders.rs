//! Order placement service.

use thiserror::Error;

use carstore_core::CarId;

use crate::db::RepositoryError;
use crate::models::{NewOrder, Order};

use super::Store;

/// Errors from placing an order.
#[derive(Debug, Error)]
pub enum OrderError {
    /// A required order field is missing or blank.
    #[error("validation error: {0}")]
    Validation(String),

    /// The referenced car does not exist in the catalog.
    #[error("no car with id {0}")]
    CarNotFound(CarId),

    /// Persistence failure, propagated as-is.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Validates and records purchase orders.
pub struct OrderService<'a, S> {
    store: &'a S,
}

impl<'a, S: Store> OrderService<'a, S> {
    /// Create a new order service over the given store.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Validate and record a purchase order.
    ///
    /// The referenced car must exist; the store assigns a fresh ID and the
    /// stored order is returned. Not idempotent: identical inputs create
    /// distinct orders.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Validation`] if the customer name is blank,
    /// [`OrderError::CarNotFound`] if the car does not exist, and
    /// [`OrderError::Repository`] on persistence failure.
    pub async fn place_order(&self, order: NewOrder) -> Result<Order, OrderError> {
        if order.customer_name.trim().is_empty() {
            return Err(OrderError::Validation(
                "customer name must not be empty".to_string(),
            ));
        }

        if self.store.get_car(order.car_id).await?.is_none() {
            return Err(OrderError::CarNotFound(order.car_id));
        }

        let stored = self.store.insert_order(&order).await.map_err(|e| {
            // The existence check above can race with catalog changes; the
            // foreign key constraint is the authority.
            if matches!(e, RepositoryError::NotFound) {
                OrderError::CarNotFound(order.car_id)
            } else {
                OrderError::Repository(e)
            }
        })?;

        tracing::info!(
            order_id = %stored.id,
            car_id = %stored.car_id,
            "order placed"
        );
        Ok(stored)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::store::memory::MemoryStore;
    use super::*;

    fn order_for(car_id: CarId) -> NewOrder {
        NewOrder {
            customer_name: "Ivan".to_string(),
            address: "Addr".to_string(),
            contact_phone: "123".to_string(),
            car_id,
        }
    }

    async fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store.ensure_seeded().await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_place_order_blank_name_fails() {
        let store = seeded_store().await;
        let service = OrderService::new(&store);

        for name in ["", "   ", "\t\n"] {
            let mut order = order_for(CarId::new(1));
            order.customer_name = name.to_string();
            let err = service.place_order(order).await.unwrap_err();
            assert!(matches!(err, OrderError::Validation(_)), "name {name:?}");
        }
    }

    #[tokio::test]
    async fn test_place_order_returns_stored_order() {
        let store = seeded_store().await;
        let service = OrderService::new(&store);

        let order = service.place_order(order_for(CarId::new(2))).await.unwrap();
        assert_eq!(order.car_id, CarId::new(2));
        assert_eq!(order.customer_name, "Ivan");
    }

    #[tokio::test]
    async fn test_place_order_unknown_car_fails() {
        let store = seeded_store().await;
        let service = OrderService::new(&store);

        let err = service.place_order(order_for(CarId::new(99))).await.unwrap_err();
        assert!(matches!(err, OrderError::CarNotFound(id) if id == CarId::new(99)));
    }

    #[tokio::test]
    async fn test_repeated_orders_are_distinct() {
        let store = seeded_store().await;
        let service = OrderService::new(&store);

        let first = service.place_order(order_for(CarId::new(1))).await.unwrap();
        let second = service.place_order(order_for(CarId::new(1))).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.orders().len(), 2);
    }
}
