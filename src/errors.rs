use actix_web::http::StatusCode;
use thiserror::Error;

use crate::consts::UPSTREAM_FAILURE_MESSAGE;

#[derive(Debug, Clone, Error)]
pub enum ShowReviewError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Remote store error: {0}")]
    RemoteStoreError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("Network error: {0}")]
    NetworkError(String),
}

impl ShowReviewError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShowReviewError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ShowReviewError::RemoteStoreError(_) => StatusCode::BAD_GATEWAY,
            ShowReviewError::ParseError(_) => StatusCode::BAD_GATEWAY,
            ShowReviewError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ShowReviewError::NetworkError(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Message safe to hand back to the client. Only validation messages are
    /// passed through verbatim.
    pub fn public_message(&self) -> String {
        match self {
            ShowReviewError::ValidationError(msg) => msg.clone(),
            ShowReviewError::ConfigError(_) => "Service is misconfigured.".to_string(),
            _ => UPSTREAM_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for ShowReviewError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            ShowReviewError::NetworkError(err.to_string())
        } else if err.is_decode() {
            ShowReviewError::ParseError(err.to_string())
        } else {
            ShowReviewError::RemoteStoreError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ShowReviewError {
    fn from(err: serde_json::Error) -> Self {
        ShowReviewError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for ShowReviewError {
    fn from(err: std::io::Error) -> Self {
        ShowReviewError::ConfigError(err.to_string())
    }
}
