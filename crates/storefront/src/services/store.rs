//! Persistence gateway trait and catalog seed data.
//!
//! The [`Store`] trait decouples the service layer from the concrete
//! database. Production uses [`crate::db::PgStore`]; unit tests use the
//! in-memory implementation from [`memory`].

use carstore_core::{CarId, Price};

use crate::db::RepositoryError;
use crate::models::{Car, NewCar, NewOrder, Order};

/// Abstract storage for the catalog and order tables.
///
/// Every operation is a single synchronous read or append; persistence
/// failures propagate as [`RepositoryError`] without retries.
#[allow(async_fn_in_trait)]
pub trait Store {
    /// List all cars in insertion order.
    async fn list_cars(&self) -> Result<Vec<Car>, RepositoryError>;

    /// Look up a car by ID.
    async fn get_car(&self, id: CarId) -> Result<Option<Car>, RepositoryError>;

    /// Insert a car, returning the stored row with its assigned ID.
    async fn insert_car(&self, car: &NewCar) -> Result<Car, RepositoryError>;

    /// Append an order, returning the stored row with its assigned ID.
    async fn insert_order(&self, order: &NewOrder) -> Result<Order, RepositoryError>;

    /// Seed the catalog with the stock cars iff it is empty.
    ///
    /// Idempotent: returns the number of cars inserted, 0 when the
    /// catalog already has entries.
    async fn ensure_seeded(&self) -> Result<u64, RepositoryError>;
}

/// The stock catalog inserted by `ensure_seeded`.
#[must_use]
pub fn seed_cars() -> Vec<NewCar> {
    const SEED: &[(&str, &str, i64)] = &[
        ("IX5", "BMW", 600_500),
        ("Kalina", "Lada", 550_000),
        ("Focus", "Ford", 450_000),
    ];

    SEED.iter()
        .map(|&(name, company, price)| NewCar {
            name: name.to_string(),
            company: company.to_string(),
            // Seed prices are compile-time constants, all non-negative.
            price: Price::new(price).unwrap_or_else(|_| unreachable!()),
        })
        .collect()
}

/// In-memory [`Store`] for service unit tests.
#[cfg(test)]
pub(crate) mod memory {
    use std::sync::Mutex;

    use chrono::Utc;

    use carstore_core::{CarId, OrderId};

    use super::{Store, seed_cars};
    use crate::db::RepositoryError;
    use crate::models::{Car, NewCar, NewOrder, Order};

    #[derive(Default)]
    struct Inner {
        cars: Vec<Car>,
        orders: Vec<Order>,
    }

    /// Mutex-backed store with serial-style ID assignment.
    #[derive(Default)]
    pub struct MemoryStore {
        inner: Mutex<Inner>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Snapshot of all recorded orders, in insertion order.
        pub fn orders(&self) -> Vec<Order> {
            self.inner.lock().expect("store mutex poisoned").orders.clone()
        }

        fn with_inner<T>(&self, f: impl FnOnce(&mut Inner) -> T) -> T {
            f(&mut self.inner.lock().expect("store mutex poisoned"))
        }
    }

    impl Store for MemoryStore {
        async fn list_cars(&self) -> Result<Vec<Car>, RepositoryError> {
            Ok(self.with_inner(|inner| inner.cars.clone()))
        }

        async fn get_car(&self, id: CarId) -> Result<Option<Car>, RepositoryError> {
            Ok(self.with_inner(|inner| inner.cars.iter().find(|c| c.id == id).cloned()))
        }

        async fn insert_car(&self, car: &NewCar) -> Result<Car, RepositoryError> {
            Ok(self.with_inner(|inner| {
                let stored = Car {
                    id: CarId::new(i32::try_from(inner.cars.len()).expect("test catalog") + 1),
                    name: car.name.clone(),
                    company: car.company.clone(),
                    price: car.price,
                };
                inner.cars.push(stored.clone());
                stored
            }))
        }

        async fn insert_order(&self, order: &NewOrder) -> Result<Order, RepositoryError> {
            self.with_inner(|inner| {
                if !inner.cars.iter().any(|c| c.id == order.car_id) {
                    // Mirrors the foreign key constraint on the orders table.
                    return Err(RepositoryError::NotFound);
                }
                let stored = Order {
                    id: OrderId::new(i32::try_from(inner.orders.len()).expect("test orders") + 1),
                    customer_name: order.customer_name.clone(),
                    address: order.address.clone(),
                    contact_phone: order.contact_phone.clone(),
                    car_id: order.car_id,
                    created_at: Utc::now(),
                };
                inner.orders.push(stored.clone());
                Ok(stored)
            })
        }

        async fn ensure_seeded(&self) -> Result<u64, RepositoryError> {
            if !self.with_inner(|inner| inner.cars.is_empty()) {
                return Ok(0);
            }
            let mut inserted = 0;
            for car in seed_cars() {
                self.insert_car(&car).await?;
                inserted += 1;
            }
            Ok(inserted)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    #[test]
    fn test_seed_cars_documented_catalog() {
        let cars = seed_cars();
        assert_eq!(cars.len(), 3);
        assert_eq!(cars[0].company, "BMW");
        assert_eq!(cars[0].name, "IX5");
        assert_eq!(cars[0].price.amount(), 600_500);
        assert_eq!(cars[1].company, "Lada");
        assert_eq!(cars[1].price.amount(), 550_000);
        assert_eq!(cars[2].company, "Ford");
        assert_eq!(cars[2].price.amount(), 450_000);
    }

    #[tokio::test]
    async fn test_ensure_seeded_inserts_three_cars_once() {
        let store = MemoryStore::new();
        assert_eq!(store.ensure_seeded().await.unwrap(), 3);
        // Second run is a no-op.
        assert_eq!(store.ensure_seeded().await.unwrap(), 0);
        assert_eq!(store.list_cars().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_list_cars_insertion_order() {
        let store = MemoryStore::new();
        store.ensure_seeded().await.unwrap();
        let labels: Vec<String> = store
            .list_cars()
            .await
            .unwrap()
            .iter()
            .map(Car::label)
            .collect();
        assert_eq!(labels, ["BMW IX5", "Lada Kalina", "Ford Focus"]);
    }
}
