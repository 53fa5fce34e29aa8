//! Scoring configuration loaded from disk and environment, end to end.

mod common;

use std::env;
use std::io::Write;
use std::sync::Arc;

use common::fixtures::ProductBuilder;
use serial_test::serial;
use visibility::config::{ConfigError, ScoringConfig};
use visibility::constants::round2;
use visibility::embedding::SentenceEmbedder;
use visibility::scoring::VisibilityScorer;

fn clear_weight_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var(ScoringConfig::ENV_WEIGHT_SEMANTIC);
        env::remove_var(ScoringConfig::ENV_WEIGHT_KEYWORD);
        env::remove_var(ScoringConfig::ENV_WEIGHT_COMPLETENESS);
        env::remove_var(ScoringConfig::ENV_WEIGHT_READABILITY);
    }
}

fn scorer_with(config: ScoringConfig) -> VisibilityScorer {
    VisibilityScorer::new(Arc::new(SentenceEmbedder::stub().unwrap()), config).unwrap()
}

#[test]
#[serial]
fn test_file_templates_drive_generated_queries() {
    clear_weight_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"query_templates": ["{{brand}} {{category}} review", "cheap {{category}}"]}}"#
    )
    .unwrap();

    let config = ScoringConfig::load(Some(file.path())).unwrap();
    let scorer = scorer_with(config);
    let report = scorer.score(&ProductBuilder::new().build()).unwrap();

    assert_eq!(report.queries[..2], ["Acme Earbuds review", "cheap Earbuds"]);
    assert_eq!(report.queries.len(), 6);
}

#[test]
#[serial]
fn test_env_weights_override_file() {
    clear_weight_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"min_description_length": 20}}"#).unwrap();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::set_var(ScoringConfig::ENV_WEIGHT_SEMANTIC, "0.0");
        env::set_var(ScoringConfig::ENV_WEIGHT_KEYWORD, "0.0");
        env::set_var(ScoringConfig::ENV_WEIGHT_COMPLETENESS, "0.0");
        env::set_var(ScoringConfig::ENV_WEIGHT_READABILITY, "1.0");
    }
    let loaded = ScoringConfig::load(Some(file.path()));
    clear_weight_env();

    let config = loaded.unwrap();
    assert_eq!(config.min_description_length, 20);

    let report = scorer_with(config)
        .score(&ProductBuilder::new().with_rich_description().build())
        .unwrap();
    assert_eq!(report.score, round2(report.breakdown.readability));
}

#[test]
#[serial]
fn test_env_weights_must_still_sum_to_one() {
    clear_weight_env();
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe { env::set_var(ScoringConfig::ENV_WEIGHT_SEMANTIC, "0.9") };
    let loaded = ScoringConfig::load(None);
    clear_weight_env();

    assert!(matches!(loaded, Err(ConfigError::WeightSum { .. })));
}
