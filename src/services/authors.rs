//! Authors service

use validator::ValidateEmail;

use crate::{
    error::{AppError, AppResult, FieldErrors},
    models::author::{Author, AuthorWithBooks, CreateAuthor, UpdateAuthor},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List authors with books
    pub async fn list(&self) -> AppResult<Vec<AuthorWithBooks>> {
        self.repository.authors_list().await
    }

    /// Get author by ID with books
    pub async fn get(&self, id: i32) -> AppResult<AuthorWithBooks> {
        self.repository.authors_get_with_books(id).await
    }

    /// Create an author
    pub async fn create(&self, data: &CreateAuthor) -> AppResult<Author> {
        let (name, email) = self
            .validate(data.name.as_deref(), data.email.as_deref(), None)
            .await?;
        self.repository.authors_create(&name, &email).await
    }

    /// Update an author. The uniqueness check excludes the record's own id,
    /// so an author keeps their existing email.
    pub async fn update(&self, id: i32, data: &UpdateAuthor) -> AppResult<Author> {
        // Existence first: an unknown id is a 404, not a validation failure
        self.repository.authors_get(id).await?;
        let (name, email) = self
            .validate(data.name.as_deref(), data.email.as_deref(), Some(id))
            .await?;
        self.repository.authors_update(id, &name, &email).await
    }

    /// Delete an author. Restrict policy: refused while books reference it.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.authors_get(id).await?;

        let book_count = self.repository.authors_book_count(id).await?;
        if book_count > 0 {
            return Err(AppError::Conflict(format!(
                "Cannot delete author: {} book(s) still reference it",
                book_count
            )));
        }

        self.repository.authors_delete(id).await
    }

    /// Shared rule set for create and update: name required; email required
    /// + valid format + unique (excluding `exclude_id` when given).
    async fn validate(
        &self,
        name: Option<&str>,
        email: Option<&str>,
        exclude_id: Option<i32>,
    ) -> AppResult<(String, String)> {
        let mut errors = FieldErrors::new();

        let name = name.map(str::trim).unwrap_or_default();
        if name.is_empty() {
            errors.add("name", "The name field is required.");
        }

        let email = email.map(str::trim).unwrap_or_default();
        if email.is_empty() {
            errors.add("email", "The email field is required.");
        } else if !email.validate_email() {
            errors.add("email", "The email must be a valid email address.");
        } else if self
            .repository
            .authors_email_exists(email, exclude_id)
            .await?
        {
            errors.add("email", "The email has already been taken.");
        }

        errors.into_result()?;
        Ok((name.to_string(), email.to_string()))
    }
}
