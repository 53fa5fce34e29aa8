use thiserror::Error;

use crate::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("scoring failed for cohort entry {index}: {source}")]
    Scoring {
        index: usize,
        #[source]
        source: ScoringError,
    },

    #[error("scoring task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("subject product not found in ranked cohort")]
    SubjectNotFound,
}

impl RankingError {
    /// `true` when a cohort entry was rejected as invalid input.
    pub fn is_validation(&self) -> bool {
        matches!(self, RankingError::Scoring { source, .. } if source.is_validation())
    }
}
