//! API handlers for Biblios REST endpoints

pub mod authors;
pub mod books;
pub mod categories;
pub mod health;
pub mod openapi;
pub mod users;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppError, models::user::UserClaims, AppState};

/// Success envelope for single-entity responses: `{"data": {...}}`
#[derive(Serialize, ToSchema)]
pub struct DataBody<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub data: T,
}

/// Success envelope for collection responses: `{"data": [...]}`
#[derive(Serialize, ToSchema)]
pub struct ListBody<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub data: Vec<T>,
}

/// Success envelope for create/update/delete responses:
/// `{"message": ..., "data"?: ...}`
#[derive(Serialize, ToSchema)]
pub struct MessageBody<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Extractor for the authenticated user from a bearer JWT
pub struct AuthenticatedUser(pub UserClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Get the Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        // Check for Bearer token
        if !auth_header.starts_with("Bearer ") {
            return Err(AppError::Authentication(
                "Invalid authorization header format".to_string(),
            ));
        }

        let token = &auth_header[7..];

        // Validate JWT token using the secret from configuration
        let claims = UserClaims::from_token(token, &state.config.auth.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        Ok(AuthenticatedUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::author::Author;
    use chrono::{TimeZone, Utc};

    fn author() -> Author {
        Author {
            id: 1,
            name: "Ursula K. Le Guin".to_string(),
            email: "ursula@example.org".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn list_body_wraps_collection_under_data_key() {
        let body = ListBody { data: vec![author()] };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json["data"].is_array());
        assert_eq!(json["data"][0]["email"], "ursula@example.org");
    }

    #[test]
    fn data_body_wraps_entity_under_data_key() {
        let body = DataBody { data: author() };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["data"]["name"], "Ursula K. Le Guin");
    }

    #[test]
    fn message_body_omits_data_when_none() {
        let body = MessageBody::<Author> {
            message: "Author deleted successfully".to_string(),
            data: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "Author deleted successfully");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn message_body_includes_data_when_present() {
        let body = MessageBody {
            message: "Author created successfully".to_string(),
            data: Some(author()),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["data"]["id"], 1);
    }
}
