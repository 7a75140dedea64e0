//! Data models for the bookstore

pub mod book;
pub mod page;

// Re-export commonly used types
pub use book::{Book, BookRequest, BookResponse};
pub use page::{BookPage, PageQuery, PageRequest, SortOrder, SortProperty};
