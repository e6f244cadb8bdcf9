//! Error types for the recommendation service
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails once constructed; errors only arise from configuration and from
//! the HTTP layer.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Config Error Enum ==
/// Rejected configuration, reported before anything is constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Cache capacity must be at least one entry
    #[error("Cache capacity must be at least 1")]
    ZeroCapacity,

    /// An environment variable was set but could not be parsed
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    /// The default recommendation count is outside the per-request range
    #[error("Default limit must be between 1 and 50, got {0}")]
    InvalidLimit(usize),
}

// == API Error Enum ==
/// Error type returned by HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Named resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unexpected failure while serving a request
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred. Please try again.".to_string(),
                )
            }
        };
        if status != StatusCode::INTERNAL_SERVER_ERROR {
            tracing::debug!("Rejected request: {}", self);
        }

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Panic Handler ==
/// Turns a handler panic into a 500 response with the usual error body.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    };
    ApiError::Internal(detail).into_response()
}

// == Result Type Alias ==
/// Convenience Result type for HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
