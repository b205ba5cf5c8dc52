//! Domain layer for the bookstack service.
//!
//! Error taxonomy and pure validation helpers. No I/O happens in this crate.

pub mod error;
pub mod price;
