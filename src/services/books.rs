//! Books service

use crate::{
    error::{AppResult, FieldErrors},
    models::book::{BookDetails, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List books with author and category
    pub async fn list(&self) -> AppResult<Vec<BookDetails>> {
        self.repository.books_list().await
    }

    /// Get book by ID with relations
    pub async fn get(&self, id: i32) -> AppResult<BookDetails> {
        self.repository.books_get_details(id).await
    }

    /// Create a book. Only title, author_id and category_id are persisted.
    pub async fn create(&self, data: &CreateBook) -> AppResult<BookDetails> {
        let (title, author_id, category_id) = self
            .validate(data.title.as_deref(), data.author_id, data.category_id, None)
            .await?;
        self.repository
            .books_create(&title, author_id, category_id)
            .await
    }

    /// Update a book, then sync the many-to-many category links to exactly
    /// the set in `category_ids` (absent behaves as the empty set). The
    /// singular `category_id` foreign key is unaffected by the sync.
    pub async fn update(&self, id: i32, data: &UpdateBook) -> AppResult<BookDetails> {
        self.repository.books_get(id).await?;

        let (title, author_id, category_id) = self
            .validate(
                data.title.as_deref(),
                data.author_id,
                data.category_id,
                data.category_ids.as_deref(),
            )
            .await?;

        self.repository
            .books_update(id, &title, author_id, category_id)
            .await?;

        let links = data.category_ids.clone().unwrap_or_default();
        self.repository.books_sync_categories(id, &links).await?;

        self.repository.books_get_details(id).await
    }

    /// Hard-delete a book
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.books_get(id).await?;
        self.repository.books_delete(id).await
    }

    /// Rule set for create and update: title required; author_id and
    /// category_id required and referencing existing rows; every id in
    /// `category_ids` (update only) referencing an existing category.
    async fn validate(
        &self,
        title: Option<&str>,
        author_id: Option<i32>,
        category_id: Option<i32>,
        category_ids: Option<&[i32]>,
    ) -> AppResult<(String, i32, i32)> {
        let mut errors = FieldErrors::new();

        let title = title.map(str::trim).unwrap_or_default();
        if title.is_empty() {
            errors.add("title", "The title field is required.");
        }

        match author_id {
            None => errors.add("author_id", "The author_id field is required."),
            Some(id) => {
                if !self.repository.authors_exists(id).await? {
                    errors.add("author_id", "The selected author_id is invalid.");
                }
            }
        }

        match category_id {
            None => errors.add("category_id", "The category_id field is required."),
            Some(id) => {
                if !self.repository.categories_exists(id).await? {
                    errors.add("category_id", "The selected category_id is invalid.");
                }
            }
        }

        if let Some(ids) = category_ids {
            if !ids.is_empty() {
                for missing in self.repository.categories_missing(ids).await? {
                    errors.add(
                        "category_ids",
                        format!("The selected category_ids value {} is invalid.", missing),
                    );
                }
            }
        }

        errors.into_result()?;
        Ok((
            title.to_string(),
            author_id.unwrap_or_default(),
            category_id.unwrap_or_default(),
        ))
    }
}
