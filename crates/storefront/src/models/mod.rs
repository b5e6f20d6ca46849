//! Domain models for the storefront.

pub mod car;
pub mod order;

pub use car::{Car, NewCar};
pub use order::{NewOrder, Order};
