//! Catalog car model.

use serde::Serialize;

use carstore_core::{CarId, Price};

/// A purchasable car in the catalog.
///
/// Cars are seeded once and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Car {
    pub id: CarId,
    /// Model name, e.g. "IX5".
    pub name: String,
    /// Manufacturer, e.g. "BMW".
    pub company: String,
    pub price: Price,
}

impl Car {
    /// Display label combining manufacturer and model, e.g. "BMW IX5".
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.company, self.name)
    }
}

/// Input for inserting a car into the catalog.
#[derive(Debug, Clone)]
pub struct NewCar {
    pub name: String,
    pub company: String,
    pub price: Price,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let car = Car {
            id: CarId::new(1),
            name: "IX5".to_string(),
            company: "BMW".to_string(),
            price: Price::new(600_500).unwrap(),
        };
        assert_eq!(car.label(), "BMW IX5");
    }
}
