//! Error types for Biblios server

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Field-level validation errors: field name to list of messages.
///
/// Serializes as `{"email": ["The email field is required."], ...}`,
/// the shape clients receive under the `errors` key of a 400 response.
#[derive(Debug, Default, Clone, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for a field, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(|v| v.as_slice())
    }

    /// Ok(()) when no errors were recorded, otherwise a Validation error.
    pub fn into_result(self) -> AppResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self))
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.0.keys().map(String::as_str).collect();
        write!(f, "{}", fields.join(", "))
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for everything except validation failures.
///
/// The `error` field carries the underlying error text on 500 responses.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Validation error response body: 400 with a field-level error map.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ValidationErrorResponse {
    pub message: String,
    #[schema(value_type = Object)]
    pub errors: FieldErrors,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            AppError::Validation(errors) => {
                let body = Json(ValidationErrorResponse {
                    message: "Validation failed".to_string(),
                    errors,
                });
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::Authentication(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
            AppError::Database(e) => {
                // Unique-constraint violations surface as 409, not 500:
                // pre-checks in the service layer can race with concurrent writes.
                let is_unique = matches!(
                    &e,
                    sqlx::Error::Database(db) if db.is_unique_violation()
                );
                if is_unique {
                    (
                        StatusCode::CONFLICT,
                        "Duplicate value violates a uniqueness constraint".to_string(),
                        Some(e.to_string()),
                    )
                } else {
                    tracing::error!("Database error: {:?}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Database error".to_string(),
                        Some(e.to_string()),
                    )
                }
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(msg),
                )
            }
        };

        (status, Json(ErrorResponse { message, error })).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400_with_field_map() {
        let mut errors = FieldErrors::new();
        errors.add("email", "The email has already been taken.");
        errors.add("name", "The name field is required.");

        let response = AppError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Validation failed");
        assert_eq!(
            body["errors"]["email"][0],
            "The email has already been taken."
        );
        assert_eq!(body["errors"]["name"][0], "The name field is required.");
    }

    #[tokio::test]
    async fn not_found_is_404_without_error_field() {
        let response = AppError::NotFound("Author 42 not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Author 42 not found");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn conflict_is_409() {
        let response =
            AppError::Conflict("Cannot delete author: 3 book(s) still reference it".to_string())
                .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn internal_is_500_with_error_text() {
        let response = AppError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Internal server error");
        assert_eq!(body["error"], "boom");
    }

    #[test]
    fn field_errors_accumulate_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("email", "The email field is required.");
        errors.add("email", "The email must be a valid email address.");
        assert_eq!(errors.get("email").unwrap().len(), 2);
        assert!(errors.get("name").is_none());
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn empty_field_errors_convert_to_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }
}
