//! Data models for Biblios

pub mod author;
pub mod book;
pub mod category;
pub mod user;

// Re-export commonly used types
pub use author::{Author, AuthorWithBooks};
pub use book::{Book, BookDetails};
pub use category::{Category, CategoryWithBooks};
pub use user::{CurrentUser, UserClaims};
