//! Pure translation between wire DTOs and the persisted entity.
//!
//! Both directions are total: missing request fields copy as empty strings,
//! and nothing here can fail or touch I/O.

use bookstack_db::models::book::{Book, BookRequest, BookResponse};

/// Build an entity from an inbound request.
///
/// The id is left empty; the repository assigns one on insert.
pub fn to_entity(request: &BookRequest) -> Book {
    Book {
        id: String::new(),
        name: request.name.clone().unwrap_or_default(),
        author: request.author.clone().unwrap_or_default(),
        price: request.price.clone().unwrap_or_default(),
    }
}

/// Project an entity into the outbound response shape, field for field.
pub fn to_response(book: Book) -> BookResponse {
    BookResponse {
        id: book.id,
        name: book.name,
        author: book.author,
        price: book.price,
    }
}
