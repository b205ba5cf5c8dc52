//! Handlers for the `/books` endpoints.
//!
//! Thin controllers: each one deserializes the path/body, delegates to
//! [`BookService`], and serializes the result. Errors pass through as
//! [`crate::error::AppError`] responses.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};

use bookstack_db::models::book::BookRequest;

use crate::error::AppResult;
use crate::service::BookService;
use crate::state::AppState;

/// GET /books -- list all books.
async fn find_all_books(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let books = BookService::find_all_books(&state.pool).await?;
    tracing::debug!(count = books.len(), "Listed books");
    Ok(Json(books))
}

/// GET /books/author/{author} -- list books by exact author match.
async fn find_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> AppResult<impl IntoResponse> {
    let books = BookService::find_by_author(&state.pool, &author).await?;
    tracing::debug!(%author, count = books.len(), "Listed books by author");
    Ok(Json(books))
}

/// POST /books -- create a book.
async fn create_book(
    State(state): State<AppState>,
    Json(input): Json<BookRequest>,
) -> AppResult<impl IntoResponse> {
    let created = BookService::create_book(&state.pool, &input).await?;
    tracing::info!(id = %created.id, "Book created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /books/{id} -- overwrite an existing book. 404 when the id is unknown.
async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<BookRequest>,
) -> AppResult<impl IntoResponse> {
    let updated = BookService::update_book(&state.pool, &id, &input).await?;
    tracing::info!(%id, "Book updated");
    Ok(Json(updated))
}

/// DELETE /books/{id} -- delete a book. 200 with an empty body; a missing id
/// is a no-op, not a 404.
async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    BookService::delete_book(&state.pool, &id).await?;
    tracing::info!(%id, "Book deleted");
    Ok(StatusCode::OK)
}

/// Mount the `/books` route tree.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/books", get(find_all_books).post(create_book))
        .route("/books/author/{author}", get(find_by_author))
        .route("/books/{id}", put(update_book).delete(delete_book))
}
