//! Repository layer for database operations

pub mod books;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{book::Book, page::SortOrder},
};

/// Storage operations the book service relies on
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Fetch one slice of rows together with the total row count
    async fn find_page(
        &self,
        offset: i64,
        limit: i64,
        sort: &[SortOrder],
    ) -> AppResult<(Vec<Book>, i64)>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    async fn exists_by_name_and_author(&self, name: &str, author: &str) -> AppResult<bool>;

    async fn exists_by_id(&self, id: i32) -> AppResult<bool>;

    /// Insert a book without id, or update an existing one.
    ///
    /// Updates bump `version` and fail when the stored version no longer
    /// matches the one carried by `book`.
    async fn save(&self, book: Book) -> AppResult<Book>;

    async fn delete_by_id(&self, id: i32) -> AppResult<()>;
}

/// Main repository struct, one member per table
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool),
        }
    }
}
