//! Deterministic stand-in embedder.
//!
//! Produces unit vectors seeded from the text hash. No model files or
//! ONNX runtime needed, which makes it useful for tests and benchmarks.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::Embedder;
use crate::Result;

/// Create a placeholder embedding of `dims` values.
///
/// Same text always produces the same L2-normalized vector.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn placeholder_embedding(text: &str, dims: usize) -> Vec<f32> {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    let mut seed = hasher.finish();

    let mut embedding = Vec::with_capacity(dims);
    for _ in 0..dims {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let value = (((seed >> 33) as f32) / (u32::MAX as f32)).mul_add(2.0, -1.0);
        embedding.push(value);
    }

    super::l2_normalize(&mut embedding);
    embedding
}

/// [`Embedder`] backed by [`placeholder_embedding`].
#[derive(Debug, Clone)]
pub struct PlaceholderEmbedder {
    name: String,
    dims: usize,
}

impl PlaceholderEmbedder {
    /// Create a placeholder reporting the given model name and size.
    #[must_use]
    pub fn new(name: impl Into<String>, dims: usize) -> Self {
        Self {
            name: name.into(),
            dims,
        }
    }
}

impl Embedder for PlaceholderEmbedder {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(placeholder_embedding(text, self.dims))
    }
}
