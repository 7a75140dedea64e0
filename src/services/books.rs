//! Book management service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookRequest, BookResponse},
        page::{BookPage, PageRequest},
    },
    repository::BookStore,
};

#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// List one page of books
    pub async fn list_books(&self, request: &PageRequest) -> AppResult<BookPage> {
        let (rows, total) = self
            .store
            .find_page(request.offset(), request.limit(), &request.sort)
            .await?;

        let content = rows.into_iter().map(BookResponse::from).collect();
        Ok(BookPage::new(content, request, total))
    }

    /// Get a book by ID
    pub async fn get_book(&self, id: i32) -> AppResult<BookResponse> {
        self.store
            .find_by_id(id)
            .await?
            .map(BookResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", id)))
    }

    /// Add a new book. (name, author) must not already be taken.
    pub async fn add_book(&self, request: BookRequest) -> AppResult<()> {
        let book = Book::from(request);

        if self
            .store
            .exists_by_name_and_author(&book.name, &book.author)
            .await?
        {
            return Err(AppError::Duplicate(
                "Book with same name and author already exists.".to_string(),
            ));
        }

        let saved = self.store.save(book).await?;
        tracing::info!(book_id = ?saved.id, "Book added");
        Ok(())
    }

    /// Replace every field of an existing book
    pub async fn update_book(&self, id: i32, request: BookRequest) -> AppResult<()> {
        let mut book = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book not found with id: {}", id)))?;

        book.apply(request);
        let saved = self.store.save(book).await?;
        tracing::info!(book_id = id, version = saved.version, "Book updated");
        Ok(())
    }

    /// Delete a book
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        if !self.store.exists_by_id(id).await? {
            return Err(AppError::NotFound(format!("Book with ID {} not found.", id)));
        }

        self.store.delete_by_id(id).await?;
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }
}
