//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{author::Author, category::Category};

/// Book record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Book with its author and (singular) category eagerly loaded
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookDetails {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: Author,
    pub category: Category,
}

impl BookDetails {
    pub fn new(book: Book, author: Author, category: Category) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author_id: book.author_id,
            category_id: book.category_id,
            created_at: book.created_at,
            updated_at: book.updated_at,
            author,
            category,
        }
    }
}

/// Create book request: only these three fields are persisted
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: Option<String>,
    pub author_id: Option<i32>,
    pub category_id: Option<i32>,
}

/// Update book request.
///
/// `category_ids` drives the many-to-many sync: the join table is replaced
/// with exactly this set. An absent field behaves as the empty set.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author_id: Option<i32>,
    pub category_id: Option<i32>,
    pub category_ids: Option<Vec<i32>>,
}
