//! ONNX embedding model management.
//!
//! Handles loading the embedding model and running single-text inference.

use std::path::Path;

use ndarray::ArrayView2;
use ort::session::builder::{GraphOptimizationLevel, SessionBuilder};
use ort::session::Session;
use ort::value::Value;
use parking_lot::Mutex;
use tokenizers::{Tokenizer, TruncationParams};

use super::cache::{self, ModelFiles};
use super::pooling::{l2_normalize, mean_pool};
use super::registry::{self, ModelSpec};
use super::Embedder;
use crate::error::EmbeddingError;
use crate::Result;

/// ONNX embedding model wrapper.
///
/// `Session::run` needs exclusive access, so inference calls are
/// serialized through a mutex. Tokenization and pooling run outside it.
pub struct EmbeddingModel {
    spec: &'static ModelSpec,
    files: ModelFiles,
    session: Mutex<Session>,
    tokenizer: Tokenizer,
}

impl EmbeddingModel {
    /// Load a model by identifier, using `cache_dir` for its files.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is unknown, the files cannot be
    /// resolved, or the session or tokenizer fail to load.
    pub fn load(model_name: &str, cache_dir: impl AsRef<Path>) -> Result<Self> {
        let spec = registry::lookup(model_name)?;
        let files = cache::resolve(spec, cache_dir.as_ref())?;
        Self::from_files(spec, files)
    }

    /// Load a model from already-resolved files.
    ///
    /// # Errors
    ///
    /// Returns an error if a file is missing or cannot be loaded.
    pub fn from_files(spec: &'static ModelSpec, files: ModelFiles) -> Result<Self> {
        for path in [&files.model, &files.tokenizer] {
            if !path.exists() {
                return Err(EmbeddingError::ModelLoad(format!(
                    "model file not found: {}",
                    path.display()
                ))
                .into());
            }
        }

        tracing::info!(model = spec.name, path = %files.model.display(), "Loading ONNX embedding model");

        let session = SessionBuilder::new()
            .map_err(|e| EmbeddingError::Runtime(format!("failed to create session builder: {e}")))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| EmbeddingError::Runtime(format!("failed to set optimization level: {e}")))?
            .commit_from_file(&files.model)
            .map_err(|e| EmbeddingError::ModelLoad(format!("failed to load model: {e}")))?;

        let tokenizer = load_tokenizer(&files.tokenizer, spec.max_seq_length)?;

        tracing::info!(
            model = spec.name,
            dims = spec.dimensions,
            max_seq_length = spec.max_seq_length,
            "ONNX session ready"
        );

        Ok(Self {
            spec,
            files,
            session: Mutex::new(session),
            tokenizer,
        })
    }

    fn run(&self, text: &str) -> Result<Vec<f32>> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| EmbeddingError::Tokenization(format!("failed to tokenize: {e}")))?;

        let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| i64::from(id)).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| i64::from(m))
            .collect();
        let token_type_ids: Vec<i64> = encoding
            .get_type_ids()
            .iter()
            .map(|&t| i64::from(t))
            .collect();

        let seq_len = input_ids.len();
        #[allow(clippy::cast_possible_wrap)]
        let shape = vec![1_i64, seq_len as i64];

        let input_ids_tensor = Value::from_array((shape.as_slice(), input_ids))
            .map_err(|e| EmbeddingError::Runtime(format!("failed to create input_ids: {e}")))?;
        let attention_tensor = Value::from_array((shape.as_slice(), attention_mask.clone()))
            .map_err(|e| EmbeddingError::Runtime(format!("failed to create attention_mask: {e}")))?;
        let token_type_tensor = Value::from_array((shape.as_slice(), token_type_ids))
            .map_err(|e| EmbeddingError::Runtime(format!("failed to create token_type_ids: {e}")))?;

        let mut embedding = {
            let mut session = self.session.lock();
            let outputs = session
                .run(ort::inputs![
                    "input_ids" => input_ids_tensor,
                    "attention_mask" => attention_tensor,
                    "token_type_ids" => token_type_tensor
                ])
                .map_err(|e| EmbeddingError::Runtime(format!("inference failed: {e}")))?;

            let (out_shape, data) = outputs[0]
                .try_extract_tensor::<f32>()
                .map_err(|e| EmbeddingError::Runtime(format!("failed to extract output: {e}")))?;

            let raw_shape: Vec<i64> = out_shape.iter().copied().collect();
            let (seq_len, hidden) = token_output_dims(&raw_shape)?;

            let values = data.get(..seq_len * hidden).ok_or_else(|| {
                EmbeddingError::Runtime(format!(
                    "output holds {} values, shape needs {}",
                    data.len(),
                    seq_len * hidden
                ))
            })?;
            let hidden_states = ArrayView2::from_shape((seq_len, hidden), values)
                .map_err(|e| EmbeddingError::Runtime(format!("bad output layout: {e}")))?;
            mean_pool(hidden_states, &attention_mask)
        };

        l2_normalize(&mut embedding);

        if embedding.len() != self.spec.dimensions {
            return Err(EmbeddingError::Dimension {
                expected: self.spec.dimensions,
                actual: embedding.len(),
            }
            .into());
        }

        Ok(embedding)
    }
}

impl Embedder for EmbeddingModel {
    fn model_name(&self) -> &str {
        self.spec.name
    }

    fn dimensions(&self) -> usize {
        self.spec.dimensions
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.run(text)
    }
}

impl std::fmt::Debug for EmbeddingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingModel")
            .field("model", &self.spec.name)
            .field("model_path", &self.files.model)
            .field("embedding_dim", &self.spec.dimensions)
            .field("session", &"<Mutex<Session>>")
            .finish()
    }
}

/// Validate a token-level output shape `[1, seq_len, hidden]`.
///
/// # Errors
///
/// Returns a runtime error for any other rank, batch size, or a negative
/// dimension.
fn token_output_dims(shape: &[i64]) -> std::result::Result<(usize, usize), EmbeddingError> {
    let dims = shape
        .iter()
        .map(|&d| usize::try_from(d))
        .collect::<std::result::Result<Vec<usize>, _>>()
        .map_err(|_| EmbeddingError::Runtime(format!("negative dimension in output shape {shape:?}")))?;

    match dims.as_slice() {
        [1, seq_len, hidden] => Ok((*seq_len, *hidden)),
        _ => Err(EmbeddingError::Runtime(format!(
            "unexpected output shape {shape:?}, expected [1, seq_len, hidden]"
        ))),
    }
}

/// Load a tokenizer and cap its output at `max_length` tokens.
///
/// # Errors
///
/// Returns an error if the tokenizer cannot be loaded.
pub fn load_tokenizer(path: impl AsRef<Path>, max_length: usize) -> Result<Tokenizer> {
    let mut tokenizer = Tokenizer::from_file(path.as_ref())
        .map_err(|e| EmbeddingError::Tokenization(format!("failed to load tokenizer: {e}")))?;

    tokenizer
        .with_truncation(Some(TruncationParams {
            max_length,
            ..Default::default()
        }))
        .map_err(|e| EmbeddingError::Tokenization(format!("failed to set truncation: {e}")))?;
    tokenizer.with_padding(None);

    Ok(tokenizer)
}
