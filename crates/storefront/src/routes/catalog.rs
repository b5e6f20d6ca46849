//! Catalog route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::Result;
use crate::models::Car;
use crate::services::CatalogService;
use crate::state::AppState;

/// Car display data for templates.
#[derive(Clone)]
pub struct CarView {
    pub id: i32,
    pub label: String,
    pub price: String,
}

impl From<&Car> for CarView {
    fn from(car: &Car) -> Self {
        Self {
            id: car.id.as_i32(),
            label: car.label(),
            price: car.price.to_string(),
        }
    }
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    pub cars: Vec<CarView>,
}

/// Display the catalog page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<CatalogTemplate> {
    let cars = CatalogService::new(state.store()).list_cars().await?;

    Ok(CatalogTemplate {
        cars: cars.iter().map(CarView::from).collect(),
    })
}

/// Return the catalog as JSON.
#[instrument(skip(state))]
pub async fn index_json(State(state): State<AppState>) -> Result<Json<Vec<Car>>> {
    let cars = CatalogService::new(state.store()).list_cars().await?;
    Ok(Json(cars))
}
