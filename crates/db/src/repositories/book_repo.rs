//! Repository for the `books` table.

use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::book::Book;

const COLUMNS: &str = "id, name, author, price";

/// Provides CRUD operations for books.
pub struct BookRepo;

impl BookRepo {
    /// List all books. Row order is implementation-defined.
    pub async fn list_all(executor: impl PgExecutor<'_>) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books");
        sqlx::query_as::<_, Book>(&query).fetch_all(executor).await
    }

    /// List books whose author matches exactly. No matches is an empty vec,
    /// not an error.
    pub async fn list_by_author(
        executor: impl PgExecutor<'_>,
        author: &str,
    ) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE author = $1");
        sqlx::query_as::<_, Book>(&query)
            .bind(author)
            .fetch_all(executor)
            .await
    }

    /// Find a book by id.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: &str,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = $1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Persist a book, returning the stored row.
    ///
    /// An empty `id` means insert: a fresh UUID is assigned. A non-empty
    /// `id` overwrites the matching row in place.
    pub async fn save(executor: impl PgExecutor<'_>, book: &Book) -> Result<Book, sqlx::Error> {
        if book.id.is_empty() {
            let query = format!(
                "INSERT INTO books (id, name, author, price) \
                 VALUES ($1, $2, $3, $4) \
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, Book>(&query)
                .bind(Uuid::new_v4().to_string())
                .bind(&book.name)
                .bind(&book.author)
                .bind(&book.price)
                .fetch_one(executor)
                .await
        } else {
            let query = format!(
                "UPDATE books SET name = $2, author = $3, price = $4 \
                 WHERE id = $1 \
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, Book>(&query)
                .bind(&book.id)
                .bind(&book.name)
                .bind(&book.author)
                .bind(&book.price)
                .fetch_one(executor)
                .await
        }
    }

    /// Delete a book by id. Returns `true` if a row was removed; a missing
    /// id is a silent no-op, never an error.
    pub async fn delete_by_id(
        executor: impl PgExecutor<'_>,
        id: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
