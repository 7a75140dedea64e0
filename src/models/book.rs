//! Book entity and its API shapes

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book row as stored in the `books` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Book {
    /// Assigned by the database on first save
    pub id: Option<i32>,
    pub name: String,
    pub author: String,
    pub publisher: String,
    pub year_released: i32,
    /// Optimistic locking counter, bumped by the repository on every update
    pub version: i32,
}

impl Book {
    /// Overwrite every editable field with the request values.
    ///
    /// Identity and version are left untouched so the repository can detect
    /// concurrent modifications on save.
    pub fn apply(&mut self, request: BookRequest) {
        self.name = request.name;
        self.author = request.author;
        self.publisher = request.publisher;
        self.year_released = request.year_released;
    }
}

/// Create / update book request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BookRequest {
    /// Book name
    #[schema(example = "1984")]
    pub name: String,
    /// Author of the book
    #[schema(example = "George Orwell")]
    pub author: String,
    /// Publisher of the book
    #[schema(example = "Secker & Warburg")]
    pub publisher: String,
    /// Year book was released
    #[schema(example = 1949)]
    pub year_released: i32,
}

/// Book as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    /// Unique book ID
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "1984")]
    pub name: String,
    #[schema(example = "George Orwell")]
    pub author: String,
    #[schema(example = "Secker & Warburg")]
    pub publisher: String,
    #[schema(example = 1949)]
    pub year_released: i32,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            // Rows read back from storage always carry their id
            id: book.id.unwrap_or_default(),
            name: book.name,
            author: book.author,
            publisher: book.publisher,
            year_released: book.year_released,
        }
    }
}

impl From<BookRequest> for Book {
    fn from(request: BookRequest) -> Self {
        Self {
            id: None,
            name: request.name,
            author: request.author,
            publisher: request.publisher,
            year_released: request.year_released,
            version: 0,
        }
    }
}
