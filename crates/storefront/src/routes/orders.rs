//! Order route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use carstore_core::CarId;

use crate::error::{AppError, Result};
use crate::models::NewOrder;
use crate::services::{OrderError, OrderService, Store};
use crate::state::AppState;

use super::catalog::CarView;

/// Query parameters for the order form.
#[derive(Debug, Deserialize)]
pub struct BuyParams {
    pub id: Option<i32>,
}

/// Order form body.
#[derive(Debug, Deserialize)]
pub struct OrderForm {
    pub customer_name: String,
    pub address: String,
    pub contact_phone: String,
    pub car_id: i32,
}

/// Order form page template.
#[derive(Template, WebTemplate)]
#[template(path = "order_form.html")]
pub struct OrderFormTemplate {
    pub car: CarView,
}

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "order_placed.html")]
pub struct OrderPlacedTemplate {
    pub customer_name: String,
    pub car_label: String,
    pub order_id: i32,
}

/// Display the order form for a car.
///
/// Without an `id` parameter, redirects to the catalog page.
#[instrument(skip(state))]
pub async fn form(
    State(state): State<AppState>,
    Query(params): Query<BuyParams>,
) -> Result<Response> {
    let Some(id) = params.id else {
        return Ok(Redirect::to("/").into_response());
    };

    let car_id = CarId::new(id);
    let car = state
        .store()
        .get_car(car_id)
        .await?
        .ok_or_else(|| AppError::Order(OrderError::CarNotFound(car_id)))?;

    Ok(OrderFormTemplate {
        car: CarView::from(&car),
    }
    .into_response())
}

/// Place an order from the submitted form.
#[instrument(skip(state, form), fields(car_id = form.car_id))]
pub async fn place(
    State(state): State<AppState>,
    Form(form): Form<OrderForm>,
) -> Result<OrderPlacedTemplate> {
    let service = OrderService::new(state.store());
    let order = service
        .place_order(NewOrder {
            customer_name: form.customer_name,
            address: form.address,
            contact_phone: form.contact_phone,
            car_id: CarId::new(form.car_id),
        })
        .await?;

    // Catalog rows are immutable, so a miss here is unreachable in practice.
    let car_label = state
        .store()
        .get_car(order.car_id)
        .await?
        .map_or_else(String::new, |car| car.label());

    Ok(OrderPlacedTemplate {
        customer_name: order.customer_name,
        car_label,
        order_id: order.id.as_i32(),
    })
}
