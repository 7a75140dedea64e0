//! Books repository backed by PostgreSQL

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::BookStore;
use crate::{
    error::{AppError, AppResult},
    models::{book::Book, page::SortOrder},
};

const BOOK_COLUMNS: &str = "id, name, author, publisher, year_released, version";

/// Build the ORDER BY clause. Column names come from `SortProperty`, never
/// from user input, so they are safe to interpolate.
fn order_by_clause(sort: &[SortOrder]) -> String {
    if sort.is_empty() {
        return "ORDER BY id".to_string();
    }

    let columns = sort
        .iter()
        .map(|order| {
            let direction = if order.descending { "DESC" } else { "ASC" };
            format!("{} {}", order.property.column(), direction)
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("ORDER BY {}", columns)
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn insert(&self, book: &Book) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(&format!(
            r#"
            INSERT INTO books (name, author, publisher, year_released, version)
            VALUES ($1, $2, $3, $4, 0)
            RETURNING {}
            "#,
            BOOK_COLUMNS
        ))
        .bind(&book.name)
        .bind(&book.author)
        .bind(&book.publisher)
        .bind(book.year_released)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, book: &Book) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(&format!(
            r#"
            UPDATE books
            SET name = $1, author = $2, publisher = $3, year_released = $4,
                version = version + 1
            WHERE id = $5 AND version = $6
            RETURNING {}
            "#,
            BOOK_COLUMNS
        ))
        .bind(&book.name)
        .bind(&book.author)
        .bind(&book.publisher)
        .bind(book.year_released)
        .bind(id)
        .bind(book.version)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::Internal(format!(
                "Book {} was updated or deleted by another transaction (version {})",
                id, book.version
            ))
        })
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn find_page(
        &self,
        offset: i64,
        limit: i64,
        sort: &[SortOrder],
    ) -> AppResult<(Vec<Book>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        let query = format!(
            "SELECT {} FROM books {} LIMIT $1 OFFSET $2",
            BOOK_COLUMNS,
            order_by_clause(sort)
        );
        let rows = sqlx::query_as::<_, Book>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok((rows, total))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books WHERE id = $1",
            BOOK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn exists_by_name_and_author(&self, name: &str, author: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM books WHERE name = $1 AND author = $2)",
        )
        .bind(name)
        .bind(author)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn exists_by_id(&self, id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn save(&self, book: Book) -> AppResult<Book> {
        match book.id {
            Some(id) => self.update(id, &book).await,
            None => self.insert(&book).await,
        }
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
