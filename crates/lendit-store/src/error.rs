use thiserror::Error;

/// Errors from store operations.
///
/// Absence of a record is not an error: lookups return `Ok(None)` and leave
/// the interpretation to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend cannot be reached. Surfaced as a 5xx-equivalent;
    /// the core never retries on the caller's behalf.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Serialization or deserialization failure in the backend.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
