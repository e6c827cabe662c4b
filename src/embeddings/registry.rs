//! Known embedding models.
//!
//! Maps a model identifier to the hub repository and files holding its
//! ONNX export, plus the shape of the vectors it produces.

use crate::error::EmbeddingError;

/// Static description of a supported model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSpec {
    /// Identifier clients see in `/health`.
    pub name: &'static str,
    /// Hub repository holding the ONNX export.
    pub repo: &'static str,
    /// Path of the ONNX graph inside the repository.
    pub model_file: &'static str,
    /// Path of `tokenizer.json` inside the repository.
    pub tokenizer_file: &'static str,
    /// Length of every embedding vector.
    pub dimensions: usize,
    /// Tokens beyond this are truncated.
    pub max_seq_length: usize,
}

/// Models this service knows how to load.
pub const SUPPORTED_MODELS: &[ModelSpec] = &[
    ModelSpec {
        name: "sentence-transformers/paraphrase-multilingual-MiniLM-L12-v2",
        repo: "Xenova/paraphrase-multilingual-MiniLM-L12-v2",
        model_file: "onnx/model.onnx",
        tokenizer_file: "tokenizer.json",
        dimensions: 384,
        max_seq_length: 128,
    },
];

/// Look up a model by identifier.
///
/// # Errors
///
/// Returns [`EmbeddingError::UnsupportedModel`] for unknown identifiers.
pub fn lookup(name: &str) -> Result<&'static ModelSpec, EmbeddingError> {
    SUPPORTED_MODELS
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| EmbeddingError::UnsupportedModel(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MODEL_NAME;

    #[test]
    fn test_default_model_is_registered() {
        let spec = lookup(MODEL_NAME).unwrap();
        assert_eq!(spec.dimensions, 384);
        assert!(spec.model_file.ends_with(".onnx"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let spec = lookup(&MODEL_NAME.to_uppercase()).unwrap();
        assert_eq!(spec.name, MODEL_NAME);
    }

    #[test]
    fn test_lookup_unknown_model() {
        let err = lookup("acme/not-a-model").unwrap_err();
        assert!(matches!(err, EmbeddingError::UnsupportedModel(_)));
        assert!(err.to_string().contains("acme/not-a-model"));
    }

    #[test]
    fn test_registry_holds_served_model_only() {
        assert_eq!(SUPPORTED_MODELS.len(), 1);
        assert_eq!(SUPPORTED_MODELS[0].name, MODEL_NAME);
    }
}
