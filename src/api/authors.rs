//! Authors API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::author::{Author, AuthorWithBooks, CreateAuthor, UpdateAuthor},
};

use super::{DataBody, ListBody, MessageBody};

/// List all authors with their books
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "Authors with their books", body = ListBody<AuthorWithBooks>)
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ListBody<AuthorWithBooks>>> {
    let authors = state.services.authors.list().await?;
    Ok(Json(ListBody { data: authors }))
}

/// Create an author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = MessageBody<Author>),
        (status = 400, description = "Validation failed", body = crate::error::ValidationErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateAuthor>,
) -> AppResult<(StatusCode, Json<MessageBody<Author>>)> {
    let author = state.services.authors.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageBody {
            message: "Author created successfully".to_string(),
            data: Some(author),
        }),
    ))
}

/// Get author by ID with books
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = DataBody<AuthorWithBooks>),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DataBody<AuthorWithBooks>>> {
    let author = state.services.authors.get(id).await?;
    Ok(Json(DataBody { data: author }))
}

/// Update an author
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated", body = MessageBody<Author>),
        (status = 400, description = "Validation failed", body = crate::error::ValidationErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateAuthor>,
) -> AppResult<Json<MessageBody<Author>>> {
    let author = state.services.authors.update(id, &data).await?;
    Ok(Json(MessageBody {
        message: "Author updated successfully".to_string(),
        data: Some(author),
    }))
}

/// Delete an author (refused while books reference it)
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author deleted", body = MessageBody<Author>),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Books still reference this author", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageBody<Author>>> {
    state.services.authors.delete(id).await?;
    Ok(Json(MessageBody {
        message: "Author deleted successfully".to_string(),
        data: None,
    }))
}
