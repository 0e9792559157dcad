//! Author model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::book::Book;

/// Author record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author with its books eagerly loaded.
///
/// `books` is always an array, empty when the author has none.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthorWithBooks {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub books: Vec<Book>,
}

impl AuthorWithBooks {
    pub fn new(author: Author, books: Vec<Book>) -> Self {
        Self {
            id: author.id,
            name: author.name,
            email: author.email,
            created_at: author.created_at,
            updated_at: author.updated_at,
            books,
        }
    }
}

/// Create author request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAuthor {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Update author request (same rule set as create; uniqueness excludes self)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAuthor {
    pub name: Option<String>,
    pub email: Option<String>,
}
