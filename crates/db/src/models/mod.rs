//! Entity structs and wire DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus the request/response DTOs exchanged with clients.

pub mod book;
