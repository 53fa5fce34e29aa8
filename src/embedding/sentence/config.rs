use std::path::PathBuf;

use crate::embedding::error::EmbeddingError;

/// Default sentence embedding dimension.
pub const SENTENCE_EMBEDDING_DIM: usize = crate::constants::DEFAULT_EMBEDDING_DIM;

/// Default max sequence length (tokens).
pub const SENTENCE_MAX_SEQ_LEN: usize = crate::constants::DEFAULT_MAX_SEQ_LEN;

/// Model identifier reported when running a real model.
pub const DEFAULT_MODEL_NAME: &str = "sentence-transformers/all-MiniLM-L6-v2";

#[derive(Debug, Clone)]
/// Configuration for [`SentenceEmbedder`](super::SentenceEmbedder).
pub struct SentenceConfig {
    /// Directory with `config.json`, `model.safetensors` and `tokenizer.json`.
    pub model_dir: PathBuf,
    /// Human-readable model name (logging and readiness only).
    pub model_name: String,
    /// Max tokens per encoded text.
    pub max_seq_len: usize,
    /// Output embedding dimension. Must equal the model's hidden size.
    pub embedding_dim: usize,
    /// If true, use the lexical hashing backend (no model files required).
    pub stub: bool,
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            max_seq_len: SENTENCE_MAX_SEQ_LEN,
            embedding_dim: SENTENCE_EMBEDDING_DIM,
            stub: false,
        }
    }
}

impl SentenceConfig {
    /// Env var used to locate the model directory.
    pub const ENV_MODEL_PATH: &'static str = "VISIBILITY_MODEL_PATH";
    /// Env var overriding the reported model name.
    pub const ENV_MODEL_NAME: &'static str = "VISIBILITY_MODEL_NAME";

    /// Loads config from environment variables. No model path means stub mode.
    pub fn from_env() -> Self {
        let model_dir = std::env::var(Self::ENV_MODEL_PATH)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let model_name = std::env::var(Self::ENV_MODEL_NAME)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_NAME.to_string());

        match model_dir {
            Some(model_dir) => Self {
                model_dir,
                model_name,
                ..Default::default()
            },
            None => Self::stub(),
        }
    }

    /// Creates a config for a model directory.
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Default::default()
        }
    }

    /// Creates a stub config (lexical hashing; deterministic, no model files).
    pub fn stub() -> Self {
        Self {
            model_name: "stub-lexical-hash".to_string(),
            stub: true,
            ..Default::default()
        }
    }

    pub fn with_embedding_dim(mut self, embedding_dim: usize) -> Self {
        self.embedding_dim = embedding_dim;
        self
    }

    /// Validates required fields for the selected mode.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be greater than zero".to_string(),
            });
        }

        if self.stub {
            return Ok(());
        }

        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len must be greater than zero".to_string(),
            });
        }

        if self.model_dir.as_os_str().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir is required (stub mode is disabled)".to_string(),
            });
        }

        if !self.model_dir.exists() {
            return Err(EmbeddingError::ModelNotFound {
                path: self.model_dir.clone(),
            });
        }

        Ok(())
    }

    /// Returns `true` if config, weights and tokenizer are all present.
    pub fn model_files_available(&self) -> bool {
        !self.model_dir.as_os_str().is_empty()
            && ["config.json", "model.safetensors", "tokenizer.json"]
                .iter()
                .all(|file| self.model_dir.join(file).exists())
    }
}
