use std::sync::Arc;

use crate::ranking::Ranker;
use crate::scoring::VisibilityScorer;

/// Shared handler state; cloned per request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub scorer: Arc<VisibilityScorer>,

    pub ranker: Ranker,
}

impl AppState {
    pub fn new(scorer: Arc<VisibilityScorer>) -> Self {
        Self {
            ranker: Ranker::new(Arc::clone(&scorer)),
            scorer,
        }
    }
}
