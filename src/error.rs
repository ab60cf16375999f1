//! Error types for the is-it-rick configuration layer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by strict configuration loading, logging setup and the CLI.
///
/// The lenient resolver (`ConfigLoader::load`) never returns these; it logs
/// them and falls back to defaults instead.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Override file not found: {}", .0.display())]
    OverrideNotFound(PathBuf),

    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationFailed(Vec<ValidationError>),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ApiError {
    fn from(err: toml::ser::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

/// A single problem found while validating resolved settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("base_url '{0}' must start and end with '/'")]
    BaseUrl(String),

    #[error("database_directory cannot be empty")]
    EmptyDatabaseDirectory,

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),

    #[error("testing_port cannot be 0")]
    ZeroPort,
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}
