//! Authenticated user types (JWT claims)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT claims carried by the bearer token.
///
/// Token issuance belongs to the external identity provider; this service
/// only verifies and reads the claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub user_id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Create a signed JWT for these claims
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse and verify a JWT
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}

/// The authenticated principal as returned by `GET /user`
#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentUser {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<UserClaims> for CurrentUser {
    fn from(claims: UserClaims) -> Self {
        Self {
            id: claims.user_id,
            name: claims.name,
            email: claims.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn claims() -> UserClaims {
        let now = Utc::now().timestamp();
        UserClaims {
            sub: "reader".to_string(),
            user_id: 7,
            name: Some("Reader One".to_string()),
            email: Some("reader@example.org".to_string()),
            exp: now + 3600,
            iat: now,
        }
    }

    #[test]
    fn token_round_trip() {
        let token = claims().create_token("test-secret").unwrap();
        let decoded = UserClaims::from_token(&token, "test-secret").unwrap();
        assert_eq!(decoded.sub, "reader");
        assert_eq!(decoded.user_id, 7);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = claims().create_token("test-secret").unwrap();
        assert!(UserClaims::from_token(&token, "other-secret").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let mut expired = claims();
        expired.iat -= 7200;
        expired.exp -= 7200;
        let token = expired.create_token("test-secret").unwrap();
        assert!(UserClaims::from_token(&token, "test-secret").is_err());
    }

    #[test]
    fn current_user_from_claims() {
        let user = CurrentUser::from(claims());
        assert_eq!(user.id, 7);
        assert_eq!(user.email.as_deref(), Some("reader@example.org"));
    }
}
