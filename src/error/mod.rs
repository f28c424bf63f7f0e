// Error types for image-describer
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DescribeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing API credential")]
    MissingCredential,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for DescribeError {
    fn from(err: reqwest::Error) -> Self {
        // Strip the URL so query strings never reach the logs
        DescribeError::Transport(err.without_url().to_string())
    }
}

impl DescribeError {
    /// Short machine-readable error type used in HTTP error bodies
    pub fn error_type(&self) -> &'static str {
        match self {
            DescribeError::InvalidInput(_) => "invalid_request_error",
            DescribeError::MissingCredential => "authentication_error",
            DescribeError::Transport(_) | DescribeError::MalformedResponse(_) => "api_error",
            DescribeError::UnsupportedMediaType(_) => "unsupported_media_type",
            DescribeError::Config(_) | DescribeError::ConfigParsing(_) => "configuration_error",
            DescribeError::Io(_) | DescribeError::Internal(_) => "internal_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            DescribeError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DescribeError::MissingCredential => StatusCode::UNAUTHORIZED,
            DescribeError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            DescribeError::Transport(_) | DescribeError::MalformedResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Convert DescribeError to HTTP responses for Axum
impl IntoResponse for DescribeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = json!({
            "type": "error",
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, DescribeError>;
