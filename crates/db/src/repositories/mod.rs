//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Methods take any [`sqlx::PgExecutor`], so callers can run them against
//! the pool directly or inside a transaction they scope themselves.

pub mod book_repo;

pub use book_repo::BookRepo;
