//! Authors domain methods on Repository

use chrono::Utc;
use std::collections::HashMap;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, AuthorWithBooks},
        book::Book,
    },
};

impl Repository {
    /// List all authors with their books eagerly loaded.
    ///
    /// Two queries, stitched in memory: one for authors, one for all their
    /// books, grouped by author_id.
    pub async fn authors_list(&self) -> AppResult<Vec<AuthorWithBooks>> {
        let authors = sqlx::query_as::<_, Author>("SELECT * FROM authors ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let books = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let mut by_author: HashMap<i32, Vec<Book>> = HashMap::new();
        for book in books {
            by_author.entry(book.author_id).or_default().push(book);
        }

        Ok(authors
            .into_iter()
            .map(|author| {
                let books = by_author.remove(&author.id).unwrap_or_default();
                AuthorWithBooks::new(author, books)
            })
            .collect())
    }

    /// Get one author by ID
    pub async fn authors_get(&self, id: i32) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    /// Get one author with books eagerly loaded
    pub async fn authors_get_with_books(&self, id: i32) -> AppResult<AuthorWithBooks> {
        let author = self.authors_get(id).await?;
        let books = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE author_id = $1 ORDER BY id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        Ok(AuthorWithBooks::new(author, books))
    }

    /// Check whether an author row with the given id exists
    pub async fn authors_exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM authors WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Check whether an email is already taken, optionally excluding one
    /// author (the record being updated keeps its own email).
    pub async fn authors_email_exists(
        &self,
        email: &str,
        exclude_id: Option<i32>,
    ) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM authors WHERE email = $1 AND id != $2)",
            )
            .bind(email)
            .bind(id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM authors WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?
        };
        Ok(exists)
    }

    /// Create an author
    pub async fn authors_create(&self, name: &str, email: &str) -> AppResult<Author> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (name, email, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an author (full-object update)
    pub async fn authors_update(&self, id: i32, name: &str, email: &str) -> AppResult<Author> {
        let now = Utc::now();
        sqlx::query_as::<_, Author>(
            r#"
            UPDATE authors SET name = $1, email = $2, updated_at = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    /// Count books referencing an author
    pub async fn authors_book_count(&self, id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE author_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Hard-delete an author
    pub async fn authors_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Author {} not found", id)));
        }
        Ok(())
    }
}
