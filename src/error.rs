use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Rate limit exceeded. {0}")]
    RateLimited(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP error: status {0}")]
    Http(reqwest::StatusCode),

    #[error("Unexpected content type: {0}")]
    InvalidContentType(String),

    #[error("Invalid JSON in response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Connection(err.to_string())
        } else {
            FetchError::Unexpected(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
