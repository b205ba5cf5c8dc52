#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An operation targeted a book id that is not in the store.
    ///
    /// The message format is part of the API contract: clients match on
    /// `No Book found by id: {id}`.
    #[error("No Book found by id: {id}")]
    NotFound { id: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
