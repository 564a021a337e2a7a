use thiserror::Error;

/// Errors that can occur when fetching the recipe collection.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Backend returned HTTP {status}")]
    BadStatus { status: u16 },

    #[error("Failed to parse response body: {0}")]
    InvalidBody(String),
}

/// Errors that can occur during the recipe submission workflow.
///
/// Validation variants are produced locally before any request is sent;
/// `Backend` and `Network` come back from the wire.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Not signed in")]
    Unauthenticated,

    #[error("Missing required field: {0}")]
    Validation(&'static str),

    #[error("Field {field} must be a whole number")]
    InvalidNumber { field: &'static str },

    #[error("Backend rejected the recipe with HTTP {status}")]
    Backend { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("A submission is already in flight")]
    AlreadyInFlight,
}

/// Errors from the key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored value is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
