use thiserror::Error;

use crate::config::ConfigError;
use crate::embedding::EmbeddingError;
use crate::product::ValidationError;

/// A scoring call either returns a complete report or one of these.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("invalid product: {0}")]
    Validation(#[from] ValidationError),

    #[error("scoring configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),
}

impl ScoringError {
    /// `true` when the caller supplied a bad product (as opposed to a server-side fault).
    pub fn is_validation(&self) -> bool {
        matches!(self, ScoringError::Validation(_))
    }
}
