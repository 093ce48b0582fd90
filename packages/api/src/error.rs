//! Error taxonomy for calls to the estate API and the storage bucket.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, CORS, connection reset).
    #[error("network error: {0}")]
    Network(String),

    /// A response arrived but its body was not what we expected.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The server answered with a non-2xx status or `success: false`.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("file is {size} bytes, the limit is {limit}")]
    TooLarge { size: u64, limit: u64 },

    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// The text a screen shows for this error. Server messages pass through verbatim.
    pub fn message(&self) -> String {
        match self {
            ApiError::Rejected { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
