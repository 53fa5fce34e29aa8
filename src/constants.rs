//! Cross-cutting, shared constants.
//!
//! Scoring constants that callers may tune live in [`ScoringConfig`](crate::config::ScoringConfig);
//! the values here are its defaults plus the fixed coefficients of the sub-score formulas.

/// Output dimension of the default sentence-transformer (all-MiniLM-L6-v2).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Max tokens fed to the sentence-transformer per chunk.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Words per semantic-relevance chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 200;

pub const DEFAULT_WEIGHT_SEMANTIC: f64 = 0.4;
pub const DEFAULT_WEIGHT_KEYWORD: f64 = 0.2;
pub const DEFAULT_WEIGHT_COMPLETENESS: f64 = 0.2;
pub const DEFAULT_WEIGHT_READABILITY: f64 = 0.2;

/// Allowed drift when checking that the weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

pub const DEFAULT_MIN_DESCRIPTION_LENGTH: usize = 50;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 5000;

/// Flesch reading-ease target for generic copy.
pub const DEFAULT_TARGET_READABILITY: f64 = 60.0;

/// Sub-scores below this produce a suggestion in the weakness report.
pub const DEFAULT_WEAKNESS_THRESHOLD: f64 = 50.0;

/// Upper and lower bound of every sub-score and of the composite.
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Blend of best chunk vs. average chunk in semantic relevance.
pub const SEMANTIC_MAX_CHUNK_WEIGHT: f64 = 0.8;
pub const SEMANTIC_MEAN_CHUNK_WEIGHT: f64 = 0.2;

/// Blended similarity that maps to a raw semantic score of 100.
pub const SEMANTIC_FULL_SCALE_SIMILARITY: f64 = 0.6;

pub const BRAND_IN_TITLE_BONUS: f64 = 10.0;

/// Description length (chars) at which the completeness length signal saturates.
pub const COMPLETENESS_TARGET_LENGTH: f64 = 2000.0;

pub const COMPLETENESS_CONCEPT_WEIGHT: f64 = 0.7;
pub const COMPLETENESS_KEYWORD_WEIGHT: f64 = 0.1;
pub const COMPLETENESS_LENGTH_WEIGHT: f64 = 0.2;
pub const COMPLETENESS_STRUCTURE_BONUS: f64 = 15.0;

pub const READABILITY_STRUCTURE_BONUS: f64 = 10.0;

/// Score used when the reading-ease metric cannot be computed.
pub const READABILITY_NEUTRAL_SCORE: f64 = 50.0;

/// Characters that mark bullet points or `key: value` spec lines.
pub const STRUCTURE_MARKERS: [char; 3] = ['•', '-', ':'];

/// Number of generated queries surfaced by the HTTP analysis endpoint.
pub const SURFACED_QUERY_COUNT: usize = 5;

/// Returns `true` if the text contains any bullet/structure marker.
pub fn has_structure_markers(text: &str) -> bool {
    text.contains(STRUCTURE_MARKERS)
}

/// Clamps a raw score into `[SCORE_MIN, SCORE_MAX]`.
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(SCORE_MIN, SCORE_MAX)
}

/// Rounds to two decimals (the precision of reported composites and deltas).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let sum = DEFAULT_WEIGHT_SEMANTIC
            + DEFAULT_WEIGHT_KEYWORD
            + DEFAULT_WEIGHT_COMPLETENESS
            + DEFAULT_WEIGHT_READABILITY;
        assert!((sum - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
    }

    #[test]
    fn test_completeness_weights_sum_to_one() {
        let sum =
            COMPLETENESS_CONCEPT_WEIGHT + COMPLETENESS_KEYWORD_WEIGHT + COMPLETENESS_LENGTH_WEIGHT;
        assert!((sum - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
    }

    #[test]
    fn test_structure_markers() {
        assert!(has_structure_markers("Weight: 250g"));
        assert!(has_structure_markers("• bullet"));
        assert!(has_structure_markers("anti-slip"));
        assert!(!has_structure_markers("plain sentence."));
    }

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(-5.0), 0.0);
        assert_eq!(clamp_score(42.5), 42.5);
        assert_eq!(clamp_score(140.0), 100.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(72.3049), 72.3);
        assert_eq!(round2(10.005_1), 10.01);
        assert_eq!(round2(0.0), 0.0);
    }
}
