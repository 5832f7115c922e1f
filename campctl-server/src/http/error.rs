//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with fixed shapes. Validation
//! failures never say which field failed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// Body message for every validation failure
pub const VALIDATION_MESSAGE: &str = "validation errors";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed or a foreign key was unknown (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str },

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => {
                tracing::warn!(reason = %e, "rejected request");
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "errors": [VALIDATION_MESSAGE] }),
                )
            }
            Self::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("{} not found", resource) }),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, .. } => Self::NotFound { resource },
            DbError::ForeignKey => Self::Validation(ValidationError::UnknownReference),
            DbError::Check => Self::Validation(ValidationError::Constraint),
            _ => Self::Database(e),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        Self::from(DbError::from(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400_and_generic() {
        let err = ApiError::Validation(ValidationError::Empty { field: "name" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "errors": ["validation errors"] })
        );
    }

    #[tokio::test]
    async fn not_found_names_the_resource() {
        let err = ApiError::NotFound { resource: "Camper" };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Camper not found" })
        );
    }

    #[test]
    fn foreign_key_violation_is_validation() {
        let err = ApiError::from(DbError::ForeignKey);
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::UnknownReference)
        ));
    }

    #[test]
    fn db_not_found_keeps_resource() {
        let err = ApiError::from(DbError::NotFound {
            resource: "Activity",
            id: 3,
        });
        assert!(matches!(err, ApiError::NotFound { resource: "Activity" }));
    }
}
