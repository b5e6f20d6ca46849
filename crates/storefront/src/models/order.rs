//! Purchase order model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use carstore_core::{CarId, OrderId};

/// A recorded purchase order.
///
/// Orders reference a car by explicit foreign key; there is no navigation
/// property, callers look the car up when they need it. Orders are append
/// only and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub address: String,
    pub contact_phone: String,
    pub car_id: CarId,
    pub created_at: DateTime<Utc>,
}

/// Input for recording a new order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_name: String,
    pub address: String,
    pub contact_phone: String,
    pub car_id: CarId,
}
