//! Cohort ranking by composite visibility score.
//!
//! Ranks are dense and 1-based; ties keep input order whether products were scored
//! sequentially ([`Ranker::rank`]) or on the blocking pool ([`Ranker::rank_concurrent`]).

pub mod error;
pub mod ranker;
pub mod types;


pub use error::RankingError;
pub use ranker::Ranker;
pub use types::{CohortRanking, RankedProduct};
