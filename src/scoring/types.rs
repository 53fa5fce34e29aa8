use serde::{Deserialize, Serialize};

use crate::constants::{SCORE_MAX, SCORE_MIN};

/// The four sub-scores, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub semantic_relevance: f64,
    pub keyword_coverage: f64,
    pub completeness: f64,
    pub readability: f64,
}

impl ScoreBreakdown {
    /// Sub-scores paired with their field names, in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("semantic_relevance", self.semantic_relevance),
            ("keyword_coverage", self.keyword_coverage),
            ("completeness", self.completeness),
            ("readability", self.readability),
        ]
    }

    /// Returns `true` if every sub-score is within `[0, 100]`.
    pub fn is_bounded(&self) -> bool {
        self.fields()
            .iter()
            .all(|(_, value)| (SCORE_MIN..=SCORE_MAX).contains(value))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Findings from the weakness checklist, each list in checklist order.
pub struct WeaknessAnalysis {
    /// Spec concepts with no trigger in the description.
    pub missing_specs: Vec<String>,
    /// Recommended keywords absent from the description.
    pub missing_keywords: Vec<String>,
    pub clarity_issues: Vec<String>,
    pub suggestions: Vec<String>,
}

impl WeaknessAnalysis {
    /// Returns `true` if the checklist found nothing.
    pub fn is_empty(&self) -> bool {
        self.missing_specs.is_empty()
            && self.missing_keywords.is_empty()
            && self.clarity_issues.is_empty()
            && self.suggestions.is_empty()
    }
}

/// Output of [`VisibilityScorer::score`](super::VisibilityScorer::score).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Weighted composite, rounded to two decimals.
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    /// Probe queries used for semantic relevance, in generation order.
    pub queries: Vec<String>,
}

/// Score report plus weakness findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAnalysis {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub weaknesses: WeaknessAnalysis,
    pub queries: Vec<String>,
}

/// Composite scores before and after a description rewrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteComparison {
    pub original_score: f64,
    pub rewritten_score: f64,
    /// `rewritten_score - original_score`, rounded to two decimals.
    pub delta: f64,
    pub original_breakdown: ScoreBreakdown,
    pub rewritten_breakdown: ScoreBreakdown,
}

impl RewriteComparison {
    pub fn improved(&self) -> bool {
        self.delta > 0.0
    }
}
