//! Books domain methods on Repository

use chrono::Utc;
use std::collections::HashMap;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{
        author::Author,
        book::{Book, BookDetails},
        category::Category,
    },
};

impl Repository {
    /// List all books with author and (singular) category eagerly loaded.
    ///
    /// Relations are fetched in bulk and stitched by id.
    pub async fn books_list(&self) -> AppResult<Vec<BookDetails>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let author_ids: Vec<i32> = books.iter().map(|b| b.author_id).collect();
        let category_ids: Vec<i32> = books.iter().map(|b| b.category_id).collect();

        let authors: HashMap<i32, Author> =
            sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = ANY($1)")
                .bind(&author_ids)
                .fetch_all(&self.pool)
                .await?
                .into_iter()
                .map(|a| (a.id, a))
                .collect();

        let categories: HashMap<i32, Category> =
            sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = ANY($1)")
                .bind(&category_ids)
                .fetch_all(&self.pool)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect();

        books
            .into_iter()
            .map(|book| {
                let author = authors
                    .get(&book.author_id)
                    .cloned()
                    .ok_or_else(|| {
                        AppError::Internal(format!("Author {} missing for book {}", book.author_id, book.id))
                    })?;
                let category = categories
                    .get(&book.category_id)
                    .cloned()
                    .ok_or_else(|| {
                        AppError::Internal(format!("Category {} missing for book {}", book.category_id, book.id))
                    })?;
                Ok(BookDetails::new(book, author, category))
            })
            .collect()
    }

    /// Get one book row by ID
    pub async fn books_get(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Get one book with relations loaded
    pub async fn books_get_details(&self, id: i32) -> AppResult<BookDetails> {
        let book = self.books_get(id).await?;
        self.books_load_relations(book).await
    }

    /// Load author and category for a book row
    async fn books_load_relations(&self, book: Book) -> AppResult<BookDetails> {
        let author = sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = $1")
            .bind(book.author_id)
            .fetch_one(&self.pool)
            .await?;

        let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(book.category_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(BookDetails::new(book, author, category))
    }

    /// Create a book from the three whitelisted fields and reload relations
    pub async fn books_create(
        &self,
        title: &str,
        author_id: i32,
        category_id: i32,
    ) -> AppResult<BookDetails> {
        let now = Utc::now();
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author_id, category_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(author_id)
        .bind(category_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        self.books_load_relations(book).await
    }

    /// Update a book's whitelisted fields and reload relations
    pub async fn books_update(
        &self,
        id: i32,
        title: &str,
        author_id: i32,
        category_id: i32,
    ) -> AppResult<BookDetails> {
        let now = Utc::now();
        let book = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books SET title = $1, author_id = $2, category_id = $3, updated_at = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(author_id)
        .bind(category_id)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        self.books_load_relations(book).await
    }

    /// Replace the book's many-to-many category links with exactly the given
    /// set: delete existing join rows, then insert the new ones.
    ///
    /// The singular `category_id` column is untouched.
    pub async fn books_sync_categories(
        &self,
        book_id: i32,
        category_ids: &[i32],
    ) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM book_category WHERE book_id = $1")
            .bind(book_id)
            .execute(&mut *tx)
            .await?;

        for &category_id in category_ids {
            sqlx::query(
                r#"
                INSERT INTO book_category (book_id, category_id)
                VALUES ($1, $2)
                ON CONFLICT (book_id, category_id) DO NOTHING
                "#,
            )
            .bind(book_id)
            .bind(category_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Category ids currently linked to a book through the join table
    pub async fn books_category_links(&self, book_id: i32) -> AppResult<Vec<i32>> {
        let ids: Vec<i32> = sqlx::query_scalar(
            "SELECT category_id FROM book_category WHERE book_id = $1 ORDER BY category_id",
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(ids)
    }

    /// Hard-delete a book (join rows cascade via the foreign key)
    pub async fn books_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }
}
