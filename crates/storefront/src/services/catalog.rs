//! Catalog listing service.

use crate::db::RepositoryError;
use crate::models::Car;

use super::Store;

/// Read-only view over the car catalog.
pub struct CatalogService<'a, S> {
    store: &'a S,
}

impl<'a, S: Store> CatalogService<'a, S> {
    /// Create a new catalog service over the given store.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// List all cars in insertion order.
    ///
    /// # Errors
    ///
    /// Persistence failures propagate as [`RepositoryError`].
    pub async fn list_cars(&self) -> Result<Vec<Car>, RepositoryError> {
        self.store.list_cars().await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::store::memory::MemoryStore;
    use super::*;

    #[tokio::test]
    async fn test_list_cars_empty_catalog() {
        let store = MemoryStore::new();
        let catalog = CatalogService::new(&store);
        assert!(catalog.list_cars().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_cars_after_seed() {
        let store = MemoryStore::new();
        store.ensure_seeded().await.unwrap();

        let catalog = CatalogService::new(&store);
        let cars = catalog.list_cars().await.unwrap();
        assert_eq!(cars.len(), 3);
        assert_eq!(cars[0].label(), "BMW IX5");
    }
}
