//! ONNX-based embedding generation.
//!
//! This module provides:
//! - The [`Embedder`] trait the HTTP layer is written against
//! - ONNX Runtime integration via the `ort` crate
//! - A registry of supported models and a hub-backed file cache

mod cache;
mod model;
mod placeholder;
mod pooling;
mod registry;

pub use cache::{find_cached, resolve, ModelFiles};
pub use model::{load_tokenizer, EmbeddingModel};
pub use placeholder::{placeholder_embedding, PlaceholderEmbedder};
pub use pooling::{l2_normalize, mean_pool};
pub use registry::{lookup, ModelSpec, SUPPORTED_MODELS};

use crate::config::Config;
use crate::Result;

/// Something that turns one text into one vector.
///
/// Implementations are shared read-only across concurrent requests and
/// must be safe to call from several threads at once.
pub trait Embedder: Send + Sync {
    /// Identifier of the underlying model.
    fn model_name(&self) -> &str;

    /// Length of every vector returned by [`Embedder::embed`].
    fn dimensions(&self) -> usize;

    /// Embed a single text. Blocks for the duration of inference.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization or inference fails.
    fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Load the configured model.
///
/// Called once at startup, before the listener binds. A failure here is
/// meant to abort the process.
///
/// # Errors
///
/// Returns an error if the model cannot be loaded.
pub fn initialize(config: &Config) -> Result<EmbeddingModel> {
    match EmbeddingModel::load(&config.model_name, &config.cache_dir) {
        Ok(model) => {
            tracing::info!(
                model = %config.model_name,
                dims = model.dimensions(),
                "Model loaded successfully"
            );
            Ok(model)
        }
        Err(e) => {
            tracing::error!(model = %config.model_name, error = %e, "Failed to load model");
            Err(e)
        }
    }
}
