//! CLI error types.

use mystdoc_config::ConfigError;
use mystdoc_spec::SpecError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Spec(#[from] SpecError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid spec file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("{0}")]
    Validation(String),
}
