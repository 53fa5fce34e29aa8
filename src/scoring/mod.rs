//! Visibility scoring.
//!
//! [`VisibilityScorer`] turns a [`Product`](crate::product::Product) into four sub-scores
//! and a weighted composite:
//!
//! - **semantic relevance**: chunked embedding similarity against generated probe queries;
//! - **keyword coverage**: category, brand and generic e-commerce terms in the description;
//! - **completeness**: concept triggers, completeness keywords and description length;
//! - **readability**: remapped Flesch reading ease.
//!
//! The weakness checklist ([`analyze_weaknesses`]) reuses the breakdown but never feeds
//! back into the composite.

pub mod error;
pub mod readability;
pub mod scorer;
pub mod types;
pub mod weakness;


pub use error::ScoringError;
pub use readability::{ReadabilityMetric, flesch_reading_ease};
pub use scorer::{IMPORTANT_KEYWORDS, VisibilityScorer};
pub use types::{ProductAnalysis, RewriteComparison, ScoreBreakdown, ScoreReport, WeaknessAnalysis};
pub use weakness::{RECOMMENDED_KEYWORDS, analyze_weaknesses};
