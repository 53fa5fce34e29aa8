//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// A numeric environment override could not be parsed.
    #[error("failed to parse {name}='{value}' as a number")]
    InvalidNumber { name: &'static str, value: String },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Scoring config file could not be read.
    #[error("failed to read scoring config {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scoring config file is not valid JSON for [`ScoringConfig`](super::ScoringConfig).
    #[error("failed to parse scoring config {path}: {source}")]
    FileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Scoring weights must each lie in [0, 1] and sum to 1.0.
    #[error("scoring weights must sum to 1.0 (got {sum})")]
    WeightSum { sum: f64 },

    #[error("scoring weight '{name}' must be between 0.0 and 1.0 (got {value})")]
    WeightOutOfRange { name: &'static str, value: f64 },

    /// A query template names a slot the generator cannot fill.
    #[error("query template '{template}' references unresolved slot '{{{slot}}}'")]
    UnresolvedSlot { template: String, slot: String },

    /// A query template has an unbalanced `{` or `}`.
    #[error("query template '{template}' has an unbalanced brace")]
    MalformedTemplate { template: String },

    /// A list that must have entries (templates, keywords) is empty.
    #[error("{name} must not be empty")]
    EmptyList { name: &'static str },

    /// Any other out-of-range scoring setting.
    #[error("invalid scoring setting {name}: {reason}")]
    InvalidSetting { name: &'static str, reason: String },
}
