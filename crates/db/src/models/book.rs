//! Book entity and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `books` table.
///
/// An empty `id` marks an entity that has not been persisted yet; the
/// repository assigns a UUID on insert. Every stored row has a non-empty,
/// unique id.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub author: String,
    pub price: String,
}

/// Inbound DTO for create and update.
///
/// All fields are optional; absent fields map to empty strings rather than
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookRequest {
    pub name: Option<String>,
    pub author: Option<String>,
    pub price: Option<String>,
}

/// Outbound DTO: a field-for-field projection of [`Book`].
#[derive(Debug, Clone, Serialize)]
pub struct BookResponse {
    pub id: String,
    pub name: String,
    pub author: String,
    pub price: String,
}
