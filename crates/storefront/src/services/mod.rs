//! Application services for the storefront.
//!
//! Services own the business rules and talk to persistence only through
//! the [`store::Store`] gateway trait, keeping them testable without a
//! database.

pub mod catalog;
pub mod orders;
pub mod store;

pub use catalog::CatalogService;
pub use orders::{OrderError, OrderService};
pub use store::Store;
