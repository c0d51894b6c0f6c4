use thiserror::Error;

/// Failure of a page fetch. Listing code treats every variant the same
/// way: the rejection propagates to the caller and nothing is committed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with status {0}")]
    Server(u16),

    #[error("Failed to decode page payload: {0}")]
    Decode(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type FetchResult<T> = Result<T, FetchError>;
