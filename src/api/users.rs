//! Authenticated user endpoint

use axum::Json;

use crate::models::user::CurrentUser;

use super::AuthenticatedUser;

/// Return the authenticated principal
#[utoipa::path(
    get,
    path = "/user",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The authenticated user", body = CurrentUser),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn current_user(AuthenticatedUser(claims): AuthenticatedUser) -> Json<CurrentUser> {
    Json(CurrentUser::from(claims))
}
