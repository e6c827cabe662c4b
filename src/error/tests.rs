//! Tests for error types.

#[cfg(test)]
mod tests {
    use super::super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_error_display() {
        let err = Error::config("invalid port");
        assert_eq!(err.to_string(), "configuration error: invalid port");
    }

    #[test]
    fn test_embedding_error_conversion() {
        let emb_err = EmbeddingError::ModelLoad("model.onnx not found".to_string());
        let err: Error = emb_err.into();
        assert!(matches!(err, Error::Embedding(_)));
    }

    #[test]
    fn test_server_error_conversion() {
        let server_err = ServerError::BindFailed {
            address: "0.0.0.0:5050".to_string(),
            reason: "address in use".to_string(),
        };
        let err: Error = server_err.into();
        assert!(matches!(err, Error::Server(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_internal() {
        let err = Error::internal("test internal error");
        assert_eq!(err.to_string(), "internal error: test internal error");
    }

    #[test]
    fn test_embedding_error_runtime() {
        let err = EmbeddingError::Runtime("ONNX session failed".to_string());
        assert_eq!(err.to_string(), "ONNX runtime error: ONNX session failed");
    }

    #[test]
    fn test_embedding_error_unsupported_model() {
        let err = EmbeddingError::UnsupportedModel("foo/bar".to_string());
        assert_eq!(err.to_string(), "unsupported model: foo/bar");
    }

    #[test]
    fn test_embedding_error_download() {
        let err = EmbeddingError::Download {
            repo: "org/model".to_string(),
            file: "onnx/model.onnx".to_string(),
            reason: "offline".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to download 'onnx/model.onnx' from 'org/model': offline"
        );
    }

    #[test]
    fn test_embedding_error_dimension() {
        let err = EmbeddingError::Dimension {
            expected: 384,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "unexpected embedding dimension: got 12, expected 384"
        );
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn inner() -> Result<i32> {
            Err(Error::config("inner error"))
        }

        fn outer() -> Result<i32> {
            let _ = inner()?;
            Ok(0)
        }

        let result = outer();
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "configuration error: inner error"
        );
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::InvalidInput(EMPTY_TEXT_MESSAGE).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal(Error::internal("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let rejected = ApiError::Rejected {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "missing field `text`".to_string(),
        };
        assert_eq!(rejected.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_api_error_internal_hides_source() {
        let err = ApiError::from(Error::from(EmbeddingError::Runtime(
            "secret session detail".to_string(),
        )));
        assert_eq!(err.detail(), EMBEDDING_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_api_error_response_body() {
        let response = ApiError::Internal(Error::internal("secret")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], EMBEDDING_FAILED_MESSAGE);
        assert!(!String::from_utf8_lossy(&bytes).contains("secret"));
    }

    #[tokio::test]
    async fn test_invalid_input_response_body() {
        let response = ApiError::InvalidInput(EMPTY_TEXT_MESSAGE).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "Text cannot be empty");
    }
}
