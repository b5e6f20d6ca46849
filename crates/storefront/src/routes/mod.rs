//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /              - Catalog page
//! GET  /catalog.json  - Catalog as JSON
//! GET  /buy?id={id}   - Order form for a car (redirects to / without id)
//! POST /buy           - Place an order
//! GET  /health        - Health check
//! GET  /health/ready  - Readiness check (DB ping)
//! ```

pub mod catalog;
pub mod orders;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/catalog.json", get(catalog::index_json))
        .route("/buy", get(orders::form).post(orders::place))
}
