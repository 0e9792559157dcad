//! Books API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{BookDetails, CreateBook, UpdateBook},
};

use super::{DataBody, ListBody, MessageBody};

/// List all books with author and category
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Books with relations", body = ListBody<BookDetails>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ListBody<BookDetails>>> {
    let books = state.services.books.list().await?;
    Ok(Json(ListBody { data: books }))
}

/// Create a book (only title, author_id and category_id are persisted)
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = MessageBody<BookDetails>),
        (status = 400, description = "Validation failed", body = crate::error::ValidationErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<MessageBody<BookDetails>>)> {
    let book = state.services.books.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageBody {
            message: "Book created successfully".to_string(),
            data: Some(book),
        }),
    ))
}

/// Get book by ID with relations
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = DataBody<BookDetails>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DataBody<BookDetails>>> {
    let book = state.services.books.get(id).await?;
    Ok(Json(DataBody { data: book }))
}

/// Update a book and sync its many-to-many category links to `category_ids`
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = MessageBody<BookDetails>),
        (status = 400, description = "Validation failed", body = crate::error::ValidationErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateBook>,
) -> AppResult<Json<MessageBody<BookDetails>>> {
    let book = state.services.books.update(id, &data).await?;
    Ok(Json(MessageBody {
        message: "Book updated successfully".to_string(),
        data: Some(book),
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageBody<BookDetails>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageBody<BookDetails>>> {
    state.services.books.delete(id).await?;
    Ok(Json(MessageBody {
        message: "Book deleted successfully".to_string(),
        data: None,
    }))
}
