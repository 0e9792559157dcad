//! Categories service

use crate::{
    error::{AppError, AppResult, FieldErrors},
    models::category::{Category, CategoryWithBooks, CreateCategory, UpdateCategory},
    repository::Repository,
};

#[derive(Clone)]
pub struct CategoriesService {
    repository: Repository,
}

impl CategoriesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List categories with books
    pub async fn list(&self) -> AppResult<Vec<CategoryWithBooks>> {
        self.repository.categories_list().await
    }

    /// Get category by ID with books
    pub async fn get(&self, id: i32) -> AppResult<CategoryWithBooks> {
        self.repository.categories_get_with_books(id).await
    }

    /// Create a category
    pub async fn create(&self, data: &CreateCategory) -> AppResult<Category> {
        let name = self.validate(data.name.as_deref(), None).await?;
        self.repository.categories_create(&name).await
    }

    /// Update a category (name uniqueness excludes the record's own id)
    pub async fn update(&self, id: i32, data: &UpdateCategory) -> AppResult<Category> {
        self.repository.categories_get(id).await?;
        let name = self.validate(data.name.as_deref(), Some(id)).await?;
        self.repository.categories_update(id, &name).await
    }

    /// Delete a category. Restrict policy: refused while books reference it
    /// through the singular foreign key.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.categories_get(id).await?;

        let book_count = self.repository.categories_book_count(id).await?;
        if book_count > 0 {
            return Err(AppError::Conflict(format!(
                "Cannot delete category: {} book(s) still reference it",
                book_count
            )));
        }

        self.repository.categories_delete(id).await
    }

    /// Rule set for create and update: name required + unique
    async fn validate(&self, name: Option<&str>, exclude_id: Option<i32>) -> AppResult<String> {
        let mut errors = FieldErrors::new();

        let name = name.map(str::trim).unwrap_or_default();
        if name.is_empty() {
            errors.add("name", "The name field is required.");
        } else if self
            .repository
            .categories_name_exists(name, exclude_id)
            .await?
        {
            errors.add("name", "The name has already been taken.");
        }

        errors.into_result()?;
        Ok(name.to_string())
    }
}
