//! Tunable scoring parameters.
//!
//! Resolution order: built-in defaults, then an optional JSON file (any subset of fields),
//! then `VISIBILITY_*` environment overrides. [`ScoringConfig::validate`] runs last.

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ConfigError;
use crate::constants::{
    DEFAULT_CHUNK_SIZE, DEFAULT_MAX_DESCRIPTION_LENGTH, DEFAULT_MIN_DESCRIPTION_LENGTH,
    DEFAULT_TARGET_READABILITY, DEFAULT_WEAKNESS_THRESHOLD, DEFAULT_WEIGHT_COMPLETENESS,
    DEFAULT_WEIGHT_KEYWORD, DEFAULT_WEIGHT_READABILITY, DEFAULT_WEIGHT_SEMANTIC,
    WEIGHT_SUM_TOLERANCE, round2,
};
use crate::queries::validate_template;
use crate::scoring::ScoreBreakdown;

/// Query templates used when no override is configured.
pub const DEFAULT_QUERY_TEMPLATES: [&str; 7] = [
    "Best {category} for {use_case}",
    "Top rated {category}",
    "Affordable {category}",
    "{category} with {feature}",
    "High quality {category}",
    "Professional {category}",
    "{brand} {category} review",
];

/// Keywords counted by the completeness sub-score.
pub const DEFAULT_COMPLETENESS_KEYWORDS: [&str; 28] = [
    "specifications",
    "specs",
    "features",
    "dimensions",
    "weight",
    "material",
    "color",
    "size",
    "warranty",
    "compatibility",
    "battery",
    "power",
    "capacity",
    "performance",
    "quality",
    "use case",
    "application",
    "suitable for",
    "ideal for",
    "technical",
    "highlights",
    "overview",
    "included",
    "package",
    "design",
    "technology",
    "engineered",
    "certified",
];

/// Weight of each sub-score in the composite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub semantic: f64,
    pub keyword: f64,
    pub completeness: f64,
    pub readability: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            semantic: DEFAULT_WEIGHT_SEMANTIC,
            keyword: DEFAULT_WEIGHT_KEYWORD,
            completeness: DEFAULT_WEIGHT_COMPLETENESS,
            readability: DEFAULT_WEIGHT_READABILITY,
        }
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.semantic + self.keyword + self.completeness + self.readability
    }

    /// Each weight in [0, 1] and the sum within tolerance of 1.0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("semantic", self.semantic),
            ("keyword", self.keyword),
            ("completeness", self.completeness),
            ("readability", self.readability),
        ];
        for (name, value) in named {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::WeightOutOfRange { name, value });
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum { sum });
        }
        Ok(())
    }

    /// Weighted sum of the breakdown, rounded to two decimals.
    pub fn composite(&self, breakdown: &ScoreBreakdown) -> f64 {
        round2(
            breakdown.semantic_relevance * self.semantic
                + breakdown.keyword_coverage * self.keyword
                + breakdown.completeness * self.completeness
                + breakdown.readability * self.readability,
        )
    }
}

/// Scoring parameters shared by the query generator, scorer and weakness analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: Weights,
    pub query_templates: Vec<String>,
    pub completeness_keywords: Vec<String>,
    /// Descriptions shorter than this (chars) are flagged as a clarity issue.
    pub min_description_length: usize,
    /// Descriptions longer than this (chars) are flagged as a clarity issue.
    pub max_description_length: usize,
    /// Flesch reading-ease target.
    pub target_readability: f64,
    /// Sub-scores below this produce a suggestion.
    pub weakness_threshold: f64,
    /// Words per semantic-relevance chunk.
    pub chunk_size: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            query_templates: DEFAULT_QUERY_TEMPLATES.iter().map(|t| t.to_string()).collect(),
            completeness_keywords: DEFAULT_COMPLETENESS_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            min_description_length: DEFAULT_MIN_DESCRIPTION_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            target_readability: DEFAULT_TARGET_READABILITY,
            weakness_threshold: DEFAULT_WEAKNESS_THRESHOLD,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ScoringConfig {
    pub const ENV_WEIGHT_SEMANTIC: &'static str = "VISIBILITY_WEIGHT_SEMANTIC";
    pub const ENV_WEIGHT_KEYWORD: &'static str = "VISIBILITY_WEIGHT_KEYWORD";
    pub const ENV_WEIGHT_COMPLETENESS: &'static str = "VISIBILITY_WEIGHT_COMPLETENESS";
    pub const ENV_WEIGHT_READABILITY: &'static str = "VISIBILITY_WEIGHT_READABILITY";
    pub const ENV_MIN_DESCRIPTION_LENGTH: &'static str = "VISIBILITY_MIN_DESCRIPTION_LENGTH";
    pub const ENV_MAX_DESCRIPTION_LENGTH: &'static str = "VISIBILITY_MAX_DESCRIPTION_LENGTH";
    pub const ENV_TARGET_READABILITY: &'static str = "VISIBILITY_TARGET_READABILITY";

    /// Reads a JSON file; fields not present keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::FileParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, optional file, env overrides, then validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading scoring config file");
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        let config = base.with_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `VISIBILITY_*` overrides on top of `self` (no validation).
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(v) = parse_env::<f64>(Self::ENV_WEIGHT_SEMANTIC)? {
            self.weights.semantic = v;
        }
        if let Some(v) = parse_env::<f64>(Self::ENV_WEIGHT_KEYWORD)? {
            self.weights.keyword = v;
        }
        if let Some(v) = parse_env::<f64>(Self::ENV_WEIGHT_COMPLETENESS)? {
            self.weights.completeness = v;
        }
        if let Some(v) = parse_env::<f64>(Self::ENV_WEIGHT_READABILITY)? {
            self.weights.readability = v;
        }
        if let Some(v) = parse_env::<usize>(Self::ENV_MIN_DESCRIPTION_LENGTH)? {
            self.min_description_length = v;
        }
        if let Some(v) = parse_env::<usize>(Self::ENV_MAX_DESCRIPTION_LENGTH)? {
            self.max_description_length = v;
        }
        if let Some(v) = parse_env::<f64>(Self::ENV_TARGET_READABILITY)? {
            self.target_readability = v;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;

        if self.query_templates.is_empty() {
            return Err(ConfigError::EmptyList {
                name: "query_templates",
            });
        }
        for template in &self.query_templates {
            validate_template(template)?;
        }

        if self.completeness_keywords.is_empty() {
            return Err(ConfigError::EmptyList {
                name: "completeness_keywords",
            });
        }

        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "chunk_size",
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.min_description_length > self.max_description_length {
            return Err(ConfigError::InvalidSetting {
                name: "min_description_length",
                reason: format!(
                    "{} exceeds max_description_length {}",
                    self.min_description_length, self.max_description_length
                ),
            });
        }

        if !(0.0..=100.0).contains(&self.weakness_threshold) {
            return Err(ConfigError::InvalidSetting {
                name: "weakness_threshold",
                reason: format!("{} is outside 0..=100", self.weakness_threshold),
            });
        }

        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        _ => Ok(None),
    }
}
