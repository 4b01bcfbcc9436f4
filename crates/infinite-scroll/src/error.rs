use thiserror::Error;

/// Shown when a failure carries no message of its own.
pub const FALLBACK_MESSAGE: &str =
    "Something went wrong while fetching products. Please refresh or try again later";

/// A failed page fetch.
///
/// Variants only matter for logging; callers of the controller see a single
/// human-readable string via [`FetchError::user_message`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    #[error("{0}")]
    Message(String),
}

impl FetchError {
    pub fn message(message: impl Into<String>) -> Self {
        FetchError::Message(message.into())
    }

    /// The failure's own message, or [`FALLBACK_MESSAGE`] when it is blank.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("page size must be at least 1")]
    InvalidPageSize,

    #[error("visibility threshold {0} is outside (0, 1]")]
    InvalidThreshold(f64),

    #[error("invalid catalog URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("malformed feed config: {0}")]
    Parse(#[from] serde_json::Error),
}
