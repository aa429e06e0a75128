use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Only [`JqError::Auth`] is fatal to a batch run; everything else is scoped
/// to the security code being processed and downgrades that row to `Failed`.
#[derive(Debug, Error)]
pub enum JqError {
    /// Credentials were missing or rejected by the token endpoints, or the
    /// access token was rejected twice in a row. Fatal, never retried.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The rate-limit budget stayed exhausted through every backoff attempt.
    #[error("rate limit exceeded after {attempts} attempts")]
    RateLimited {
        /// Total number of attempts made, including the first.
        attempts: u32,
    },

    /// A server-side error kept recurring through every retry attempt.
    #[error("transient error (status {status}) at {url} after {attempts} attempts")]
    Transient {
        /// The last HTTP status code observed.
        status: u16,
        /// The URL that kept failing.
        url: String,
        /// Total number of attempts made, including the first.
        attempts: u32,
    },

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from the API was in an unexpected format or was
    /// missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}

impl JqError {
    /// Whether this error aborts a batch run instead of failing a single row.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}
