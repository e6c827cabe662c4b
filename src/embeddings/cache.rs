//! Local model cache.
//!
//! Model files live under the cache directory using the HuggingFace hub
//! layout (`models--{org}--{name}/snapshots/{rev}/...`). Files already on
//! disk are used as-is; missing ones are fetched from the hub.

use std::path::{Path, PathBuf};

use hf_hub::api::sync::ApiBuilder;
use hf_hub::{Cache, Repo, RepoType};

use super::registry::ModelSpec;
use crate::error::EmbeddingError;
use crate::Result;

/// Paths of the files needed to run a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFiles {
    /// ONNX graph.
    pub model: PathBuf,
    /// `tokenizer.json`.
    pub tokenizer: PathBuf,
}

/// Find model files already present in the cache directory.
#[must_use]
pub fn find_cached(spec: &ModelSpec, cache_dir: &Path) -> Option<ModelFiles> {
    let cache = Cache::new(cache_dir.to_path_buf());
    let repo = cache.repo(Repo::new(spec.repo.to_string(), RepoType::Model));

    Some(ModelFiles {
        model: repo.get(spec.model_file)?,
        tokenizer: repo.get(spec.tokenizer_file)?,
    })
}

/// Resolve model files, downloading them into the cache when absent.
///
/// # Errors
///
/// Returns an error if the cache directory cannot be created or a file
/// cannot be fetched.
pub fn resolve(spec: &ModelSpec, cache_dir: &Path) -> Result<ModelFiles> {
    if let Some(files) = find_cached(spec, cache_dir) {
        tracing::debug!(
            model = spec.name,
            path = %files.model.display(),
            "Using cached model files"
        );
        return Ok(files);
    }

    std::fs::create_dir_all(cache_dir)?;

    tracing::info!(
        model = spec.name,
        repo = spec.repo,
        cache_dir = %cache_dir.display(),
        "Model files not cached, downloading"
    );

    let api = ApiBuilder::new()
        .with_cache_dir(cache_dir.to_path_buf())
        .with_progress(false)
        .build()
        .map_err(|e| EmbeddingError::ModelLoad(format!("failed to create hub client: {e}")))?;
    let repo = api.repo(Repo::new(spec.repo.to_string(), RepoType::Model));

    let fetch = |file: &str| {
        repo.get(file).map_err(|e| EmbeddingError::Download {
            repo: spec.repo.to_string(),
            file: file.to_string(),
            reason: e.to_string(),
        })
    };

    let files = ModelFiles {
        model: fetch(spec.model_file)?,
        tokenizer: fetch(spec.tokenizer_file)?,
    };

    tracing::info!(model = spec.name, path = %files.model.display(), "Model files downloaded");
    Ok(files)
}
