//! YAML spec loading.

use std::path::{Path, PathBuf};

use crate::Spec;

/// Error loading specifications.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// I/O error reading a spec file.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Spec file path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// Malformed YAML or unexpected structure.
    #[error("Invalid spec YAML{}: {message}", location(.path.as_deref()))]
    Parse {
        /// Spec file path, when loading from a file.
        path: Option<PathBuf>,
        /// Error message from the YAML parser.
        message: String,
    },
    /// A spec without a name.
    #[error("Spec #{index} has an empty name")]
    EmptyName {
        /// Zero-based position in the document.
        index: usize,
    },
}

fn location(path: Option<&Path>) -> String {
    path.map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Parse a YAML sequence of specifications.
///
/// Empty content yields an empty list.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or a spec has an empty name.
pub fn load_specs(content: &str) -> Result<Vec<Spec>, SpecError> {
    parse_specs(content, None)
}

/// Read and parse a YAML spec file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_spec_file(path: &Path) -> Result<Vec<Spec>, SpecError> {
    let content = std::fs::read_to_string(path).map_err(|source| SpecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let specs = parse_specs(&content, Some(path))?;
    tracing::debug!(path = %path.display(), count = specs.len(), "Loaded spec file");
    Ok(specs)
}

fn parse_specs(content: &str, path: Option<&Path>) -> Result<Vec<Spec>, SpecError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let specs: Vec<Spec> = serde_yaml::from_str(trimmed).map_err(|e| SpecError::Parse {
        path: path.map(Path::to_path_buf),
        message: e.to_string(),
    })?;

    if let Some(index) = specs.iter().position(|spec| spec.name.trim().is_empty()) {
        return Err(SpecError::EmptyName { index });
    }

    Ok(specs)
}
