//! Visibility library crate (used by the server and integration tests).
//!
//! Estimates how visible a product listing is to AI-driven search and recommendation
//! engines, and reports what the listing is missing.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Product`], [`ValidationError`] - Listing value type
//! - [`VisibilityScorer`], [`ScoreBreakdown`], [`ScoreReport`] - Composite scoring
//! - [`WeaknessAnalysis`], [`ProductAnalysis`] - Weakness checklist
//! - [`Ranker`], [`RankedProduct`], [`CohortRanking`] - Cohort ranking
//!
//! ## Embedding
//! - [`TextEmbedder`] - Seam the scorer depends on
//! - [`SentenceEmbedder`], [`SentenceConfig`] - BERT sentence model or lexical stub
//!
//! ## Configuration
//! - [`Config`] - Server settings from `VISIBILITY_*` environment variables
//! - [`ScoringConfig`], [`Weights`] - Scoring parameters (file + environment overrides)
//!
//! ## Test/Mock Support
//! [`MockEmbedder`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod embedding;
pub mod features;
pub mod gateway;
pub mod hashing;
pub mod product;
pub mod queries;
pub mod ranking;
pub mod scoring;

pub use config::{Config, ConfigError, ScoringConfig, Weights};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use embedding::{EmbeddingError, SentenceConfig, SentenceEmbedder, TextEmbedder};
pub use features::{FeatureReport, FeatureSet, compare_features, extract_features};
pub use hashing::{hash_to_u64, product_fingerprint};
pub use product::{Product, ValidationError};
pub use queries::QueryGenerator;
pub use ranking::{CohortRanking, RankedProduct, Ranker, RankingError};
pub use scoring::{
    ProductAnalysis, ReadabilityMetric, RewriteComparison, ScoreBreakdown, ScoreReport,
    ScoringError, VisibilityScorer, WeaknessAnalysis,
};
