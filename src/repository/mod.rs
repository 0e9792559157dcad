//! Repository layer for database operations

pub mod authors;
pub mod books;
pub mod categories;

use sqlx::{Pool, Postgres};

/// Repository holding the database connection pool.
///
/// Domain methods live in per-entity `impl Repository` blocks
/// (`authors.rs`, `categories.rs`, `books.rs`).
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}
