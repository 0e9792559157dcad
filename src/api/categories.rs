//! Categories API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::category::{Category, CategoryWithBooks, CreateCategory, UpdateCategory},
};

use super::{DataBody, ListBody, MessageBody};

/// List all categories with their books
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Categories with their books", body = ListBody<CategoryWithBooks>)
    )
)]
pub async fn list_categories(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ListBody<CategoryWithBooks>>> {
    let categories = state.services.categories.list().await?;
    Ok(Json(ListBody { data: categories }))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created", body = MessageBody<Category>),
        (status = 400, description = "Validation failed", body = crate::error::ValidationErrorResponse)
    )
)]
pub async fn create_category(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<MessageBody<Category>>)> {
    let category = state.services.categories.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageBody {
            message: "Category created successfully".to_string(),
            data: Some(category),
        }),
    ))
}

/// Get category by ID with books
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = DataBody<CategoryWithBooks>),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DataBody<CategoryWithBooks>>> {
    let category = state.services.categories.get(id).await?;
    Ok(Json(DataBody { data: category }))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = UpdateCategory,
    responses(
        (status = 200, description = "Category updated", body = MessageBody<Category>),
        (status = 400, description = "Validation failed", body = crate::error::ValidationErrorResponse),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateCategory>,
) -> AppResult<Json<MessageBody<Category>>> {
    let category = state.services.categories.update(id, &data).await?;
    Ok(Json(MessageBody {
        message: "Category updated successfully".to_string(),
        data: Some(category),
    }))
}

/// Delete a category (refused while books reference it)
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = MessageBody<Category>),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Books still reference this category", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageBody<Category>>> {
    state.services.categories.delete(id).await?;
    Ok(Json(MessageBody {
        message: "Category deleted successfully".to_string(),
        data: None,
    }))
}
