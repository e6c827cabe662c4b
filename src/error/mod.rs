//! Error types and Result aliases for the embedding service.
//!
//! This module defines the error hierarchy used throughout the crate.
//! All public functions return `Result<T, Error>` or `Result<T>`.
//!
//! HTTP handlers do not return [`Error`] directly. They translate it into
//! an [`ApiError`], which decides what the caller is allowed to see.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Message returned when the embed request carries no usable text.
pub const EMPTY_TEXT_MESSAGE: &str = "Text cannot be empty";

/// Message returned for every internal embedding failure.
pub const EMBEDDING_FAILED_MESSAGE: &str = "Failed to generate embedding";

/// Main error type for service operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Embedding generation or model loading error.
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Server/API error.
    #[error("server error: {0}")]
    Server(#[from] ServerError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Embedding-specific errors.
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// ONNX runtime error.
    #[error("ONNX runtime error: {0}")]
    Runtime(String),

    /// Model loading error.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// The model identifier is not in the registry.
    #[error("unsupported model: {0}")]
    UnsupportedModel(String),

    /// Fetching model files into the cache failed.
    #[error("failed to download '{file}' from '{repo}': {reason}")]
    Download {
        repo: String,
        file: String,
        reason: String,
    },

    /// Tokenization error.
    #[error("tokenization error: {0}")]
    Tokenization(String),

    /// The model produced a vector of the wrong length.
    #[error("unexpected embedding dimension: got {actual}, expected {expected}")]
    Dimension { expected: usize, actual: usize },
}

/// Server/API errors.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Failed to bind to address.
    #[error("failed to bind to {address}: {reason}")]
    BindFailed { address: String, reason: String },

    /// Request handling error.
    #[error("request error: {0}")]
    Request(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Error body sent to HTTP callers.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Errors surfaced by HTTP handlers.
///
/// Client errors carry a message meant for the caller. Internal errors
/// keep their source for logging only and always render the same
/// generic message.
#[derive(Debug)]
pub enum ApiError {
    /// The request was well-formed but its content is unusable.
    InvalidInput(&'static str),

    /// The body could not be extracted as JSON.
    Rejected { status: StatusCode, message: String },

    /// Embedding failed on the server side.
    Internal(Error),
}

impl ApiError {
    /// Status code this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Rejected { status, .. } => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message the caller is allowed to see.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::InvalidInput(msg) => (*msg).to_string(),
            Self::Rejected { message, .. } => message.clone(),
            Self::Internal(_) => EMBEDDING_FAILED_MESSAGE.to_string(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::Internal(err)
    }
}

impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(err) => {
                tracing::error!(error = %err, "Error generating embedding");
            }
            Self::InvalidInput(msg) => {
                tracing::debug!(detail = %msg, "Rejected invalid input");
            }
            Self::Rejected { status, message } => {
                tracing::debug!(status = %status, detail = %message, "Rejected request body");
            }
        }

        let body = ErrorBody {
            detail: self.detail(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests;
