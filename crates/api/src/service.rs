//! Book service: orchestrates the mapper and the repository and owns the
//! business rules -- the existence check on update and price validation at
//! the boundary.

use bookstack_core::error::CoreError;
use bookstack_core::price::validate_price;
use bookstack_db::models::book::{BookRequest, BookResponse};
use bookstack_db::repositories::BookRepo;
use bookstack_db::DbPool;

use crate::error::AppResult;
use crate::mapper;

pub struct BookService;

impl BookService {
    /// All books, mapped to the response shape. Order is whatever the
    /// datastore returns.
    pub async fn find_all_books(pool: &DbPool) -> AppResult<Vec<BookResponse>> {
        let books = BookRepo::list_all(pool).await?;
        Ok(books.into_iter().map(mapper::to_response).collect())
    }

    /// Books by exact author match. The author value is passed through
    /// unchanged, empty string included.
    pub async fn find_by_author(pool: &DbPool, author: &str) -> AppResult<Vec<BookResponse>> {
        let books = BookRepo::list_by_author(pool, author).await?;
        Ok(books.into_iter().map(mapper::to_response).collect())
    }

    /// Create a book. Always an insert; the repository assigns the id.
    pub async fn create_book(pool: &DbPool, request: &BookRequest) -> AppResult<BookResponse> {
        if let Some(price) = request.price.as_deref() {
            validate_price(price)?;
        }

        let book = mapper::to_entity(request);
        let saved = BookRepo::save(pool, &book).await?;
        Ok(mapper::to_response(saved))
    }

    /// Overwrite an existing book's name, author and price, preserving its id.
    ///
    /// Fails with [`CoreError::NotFound`] when the id does not exist; in that
    /// case no row is created or modified. The read-modify-write runs inside
    /// one transaction so the existence check and the overwrite commit
    /// atomically.
    pub async fn update_book(
        pool: &DbPool,
        id: &str,
        request: &BookRequest,
    ) -> AppResult<BookResponse> {
        if let Some(price) = request.price.as_deref() {
            validate_price(price)?;
        }

        let mut tx = pool.begin().await?;

        let mut book = BookRepo::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() })?;

        book.name = request.name.clone().unwrap_or_default();
        book.author = request.author.clone().unwrap_or_default();
        book.price = request.price.clone().unwrap_or_default();

        let saved = BookRepo::save(&mut *tx, &book).await?;
        tx.commit().await?;

        Ok(mapper::to_response(saved))
    }

    /// Delete a book by id.
    ///
    /// A missing id is treated as success: delete is an idempotent no-op,
    /// deliberately asymmetric with [`Self::update_book`].
    pub async fn delete_book(pool: &DbPool, id: &str) -> AppResult<()> {
        let removed = BookRepo::delete_by_id(pool, id).await?;
        if !removed {
            tracing::debug!(%id, "Delete of a missing book id, treated as no-op");
        }
        Ok(())
    }
}
