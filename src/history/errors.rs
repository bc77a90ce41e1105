use thiserror::Error;

/// Typed error for history endpoint calls.
#[derive(Error, Debug)]
pub enum HistoryApiError {
    /// Connection-level failure (timeout, refused, DNS).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("history endpoint returned {status}")]
    Status { status: reqwest::StatusCode },
}
