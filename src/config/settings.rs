//! Configuration settings and validation.

use crate::{Error, Result};
use std::path::PathBuf;

/// Identifier of the embedding model served by this process.
pub const MODEL_NAME: &str = "sentence-transformers/paraphrase-multilingual-MiniLM-L12-v2";

/// Local directory holding downloaded model files.
pub const MODEL_CACHE_DIR: &str = "./models";

/// Address the listener binds to (all interfaces).
pub const BIND_HOST: &str = "0.0.0.0";

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5050;

/// Main configuration for the embedding server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to.
    pub host: String,

    /// Port to listen on.
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines.
    pub log_json: bool,

    /// Identifier of the model to load.
    pub model_name: String,

    /// Directory for cached model files.
    pub cache_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: BIND_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            log_json: false,
            model_name: MODEL_NAME.to_string(),
            cache_dir: PathBuf::from(MODEL_CACHE_DIR),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(Error::config("port cannot be 0"));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(Error::config(format!(
                "invalid log level '{}', must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            )));
        }

        if self.host.is_empty() {
            return Err(Error::config("host cannot be empty"));
        }

        if self.model_name.trim().is_empty() {
            return Err(Error::config("model name cannot be empty"));
        }

        Ok(())
    }
}
