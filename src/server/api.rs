//! Request and response bodies for the REST API.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, EMPTY_TEXT_MESSAGE};

/// Name reported by the root endpoint.
pub const SERVICE_NAME: &str = "Text Embedding Service";

/// `GET /` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self {
            message: SERVICE_NAME.to_string(),
            status: "running".to_string(),
        }
    }
}

/// `GET /health` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}

/// `POST /embed` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedRequest {
    pub text: String,
}

impl EmbedRequest {
    /// Check the text is usable, returning it on success.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] when the text is empty or only
    /// whitespace.
    pub fn validate(&self) -> Result<&str, ApiError> {
        if self.text.trim().is_empty() {
            return Err(ApiError::InvalidInput(EMPTY_TEXT_MESSAGE));
        }
        Ok(&self.text)
    }
}

/// `POST /embed` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedResponse {
    pub embedding: Vec<f32>,
    pub dims: usize,
    pub elapsed_ms: f64,
}

/// Round a millisecond value to two decimals.
#[must_use]
pub fn round_ms(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}
