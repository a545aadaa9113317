use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("authentication rejected ({status}): {body}")]
    Authentication { status: StatusCode, body: String },

    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    Api(String),
}

impl FetchError {
    pub(crate) fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                FetchError::Authentication { status, body }
            }
            _ => FetchError::Status { status, body },
        }
    }
}
