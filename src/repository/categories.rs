//! Categories domain methods on Repository

use chrono::Utc;
use std::collections::HashMap;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{
        book::Book,
        category::{Category, CategoryWithBooks},
    },
};

impl Repository {
    /// List all categories with their books eagerly loaded
    pub async fn categories_list(&self) -> AppResult<Vec<CategoryWithBooks>> {
        let categories = sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let books = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let mut by_category: HashMap<i32, Vec<Book>> = HashMap::new();
        for book in books {
            by_category.entry(book.category_id).or_default().push(book);
        }

        Ok(categories
            .into_iter()
            .map(|category| {
                let books = by_category.remove(&category.id).unwrap_or_default();
                CategoryWithBooks::new(category, books)
            })
            .collect())
    }

    /// Get one category by ID
    pub async fn categories_get(&self, id: i32) -> AppResult<Category> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    /// Get one category with books eagerly loaded.
    ///
    /// Books are related through the singular `category_id` foreign key,
    /// not the join table.
    pub async fn categories_get_with_books(&self, id: i32) -> AppResult<CategoryWithBooks> {
        let category = self.categories_get(id).await?;
        let books = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE category_id = $1 ORDER BY id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        Ok(CategoryWithBooks::new(category, books))
    }

    /// Check whether a category row with the given id exists
    pub async fn categories_exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Check whether a name is already taken, optionally excluding one category
    pub async fn categories_name_exists(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM categories WHERE name = $1 AND id != $2)",
            )
            .bind(name)
            .bind(id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE name = $1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await?
        };
        Ok(exists)
    }

    /// Create a category
    pub async fn categories_create(&self, name: &str) -> AppResult<Category> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, created_at, updated_at)
            VALUES ($1, $2, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a category
    pub async fn categories_update(&self, id: i32, name: &str) -> AppResult<Category> {
        let now = Utc::now();
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories SET name = $1, updated_at = $2
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    /// Which of the given category ids do NOT exist
    pub async fn categories_missing(&self, ids: &[i32]) -> AppResult<Vec<i32>> {
        let existing: Vec<i32> =
            sqlx::query_scalar("SELECT id FROM categories WHERE id = ANY($1)")
                .bind(ids)
                .fetch_all(&self.pool)
                .await?;
        Ok(ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id))
            .collect())
    }

    /// Count books referencing a category through the singular foreign key
    pub async fn categories_book_count(&self, id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE category_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Hard-delete a category (join-table links cascade)
    pub async fn categories_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }
        Ok(())
    }
}
