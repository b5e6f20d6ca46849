//! Unified error handling for route handlers.
//!
//! Provides a unified `AppError` type mapped to HTTP responses. All route
//! handlers should return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::OrderError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Order placement failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with full detail before redacting
        if matches!(self, Self::Database(_) | Self::Order(OrderError::Repository(_))) {
            tracing::error!(error = %self, "Request error");
        }

        let (status, message) = match self {
            Self::Database(_) | Self::Order(OrderError::Repository(_)) => {
                // Don't expose internal error details to clients
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Self::Order(OrderError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg),
            Self::Order(OrderError::CarNotFound(id)) => (
                StatusCode::NOT_FOUND,
                format!("No car with id {id} in the catalog"),
            ),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use carstore_core::CarId;

    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::Order(OrderError::CarNotFound(CarId::new(9)));
        assert_eq!(err.to_string(), "Order error: no car with id 9");

        let err = AppError::Database(RepositoryError::NotFound);
        assert_eq!(err.to_string(), "Database error: not found");
    }

    #[test]
    fn test_order_error_status_codes() {
        assert_eq!(
            get_status(AppError::Order(OrderError::Validation("name".to_string()))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Order(OrderError::CarNotFound(CarId::new(9)))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Order(OrderError::Repository(
                RepositoryError::NotFound
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_errors_are_internal() {
        assert_eq!(
            get_status(AppError::Database(RepositoryError::DataCorruption(
                "bad price".to_string()
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
