//! Route registration.
//!
//! Route hierarchy (mounted at the root, no version prefix):
//!
//! ```text
//! /health                    service + database health
//!
//! /books                     list (GET), create (POST)
//! /books/author/{author}     list by author (GET)
//! /books/{id}                update (PUT), delete (DELETE)
//! ```

pub mod books;
pub mod health;
