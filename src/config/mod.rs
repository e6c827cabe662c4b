//! Configuration management for the embedding service.
//!
//! Supports configuration from:
//! - Command-line arguments (highest priority)
//! - Environment variables
//! - Built-in defaults (lowest priority)
//!
//! The model identifier, cache directory and bind host are fixed.

mod settings;

pub use settings::{Config, BIND_HOST, DEFAULT_PORT, MODEL_CACHE_DIR, MODEL_NAME};
