//! Configuration management for mystdoc.
//!
//! Parses `mystdoc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Entries of `registry.spec_files` support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! ## Example
//!
//! ```toml
//! [registry]
//! builtins = true
//! spec_files = ["specs/*.yaml", "${SHARED_SPECS:-../shared}/directives.yaml"]
//!
//! [output]
//! pretty = false
//! ```

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config. Extra spec files are
/// appended to those listed in the file.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the built-in specs flag.
    pub builtins: Option<bool>,
    /// Additional spec files, relative to the working directory.
    pub spec_files: Vec<PathBuf>,
    /// Override pretty-printed output.
    pub pretty: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mystdoc.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Registry sources (spec paths are relative strings from TOML).
    registry: RegistryConfigRaw,
    /// Output formatting.
    pub output: OutputConfig,

    /// Resolved registry configuration (set after loading).
    #[serde(skip)]
    pub registry_resolved: RegistryConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw registry configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RegistryConfigRaw {
    builtins: Option<bool>,
    spec_files: Vec<String>,
}

/// Resolved registry configuration.
#[derive(Debug)]
pub struct RegistryConfig {
    /// Whether the built-in directive specs are loaded.
    pub builtins: bool,
    /// Spec file paths or glob patterns, resolved against the config directory.
    pub spec_files: Vec<PathBuf>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            builtins: true,
            spec_files: Vec::new(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`registry.spec_files`").
        field: String,
        /// Error message (e.g., "${`SPEC_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mystdoc.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, and the
    /// merged result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(builtins) = settings.builtins {
            self.registry_resolved.builtins = builtins;
        }
        self.registry_resolved
            .spec_files
            .extend(settings.spec_files.iter().cloned());
        if let Some(pretty) = settings.pretty {
            self.output.pretty = pretty;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        for (i, spec_file) in config.registry.spec_files.iter().enumerate() {
            require_non_empty(spec_file, &format!("registry.spec_files[{i}]"))?;
        }

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`load`](Self::load) once CLI settings are
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the registry has no spec source.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.registry_resolved.builtins && self.registry_resolved.spec_files.is_empty() {
            return Err(ConfigError::Validation(
                "registry has no specs: enable registry.builtins or list registry.spec_files"
                    .to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        for (i, spec_file) in self.registry.spec_files.iter_mut().enumerate() {
            *spec_file = expand::expand_env(spec_file, &format!("registry.spec_files[{i}]"))?;
        }
        Ok(())
    }

    /// Resolve relative spec paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.registry_resolved = RegistryConfig {
            builtins: self.registry.builtins.unwrap_or(true),
            spec_files: self
                .registry
                .spec_files
                .iter()
                .map(|file| config_dir.join(file))
                .collect(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.registry_resolved.builtins);
        assert!(config.registry_resolved.spec_files.is_empty());
        assert!(config.output.pretty);
        assert!(config.config_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.output.pretty);
        assert!(config.registry.builtins.is_none());
    }

    #[test]
    fn test_parse_output_config() {
        let config: Config = toml::from_str("[output]\npretty = false\n").unwrap();
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[registry]
builtins = false
spec_files = ["specs/*.yaml", "/abs/extra.yaml"]
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert!(!config.registry_resolved.builtins);
        assert_eq!(
            config.registry_resolved.spec_files,
            vec![
                PathBuf::from("/project/specs/*.yaml"),
                PathBuf::from("/abs/extra.yaml")
            ]
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mystdoc.toml");
        std::fs::write(
            &path,
            "[registry]\nspec_files = [\"directives.yaml\"]\n[output]\npretty = false\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert!(config.registry_resolved.builtins);
        assert_eq!(
            config.registry_resolved.spec_files,
            vec![dir.path().join("directives.yaml")]
        );
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/mystdoc.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.to_string().contains("/nonexistent/mystdoc.toml"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mystdoc.toml");
        std::fs::write(&path, "[registry\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_rejects_empty_spec_file_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mystdoc.toml");
        std::fs::write(&path, "[registry]\nspec_files = [\"\"]\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("registry.spec_files[0]"));
    }

    #[test]
    fn test_load_expands_env_vars() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("MYSTDOC_TEST_SHARED", "shared");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mystdoc.toml");
        std::fs::write(
            &path,
            "[registry]\nspec_files = [\"${MYSTDOC_TEST_SHARED}/specs.yaml\"]\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(
            config.registry_resolved.spec_files,
            vec![dir.path().join("shared/specs.yaml")]
        );
        unsafe {
            std::env::remove_var("MYSTDOC_TEST_SHARED");
        }
    }

    #[test]
    fn test_cli_settings_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mystdoc.toml");
        std::fs::write(&path, "[registry]\nspec_files = [\"a.yaml\"]\n").unwrap();

        let settings = CliSettings {
            builtins: Some(false),
            spec_files: vec![PathBuf::from("b.yaml")],
            pretty: Some(false),
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert!(!config.registry_resolved.builtins);
        assert_eq!(
            config.registry_resolved.spec_files,
            vec![dir.path().join("a.yaml"), PathBuf::from("b.yaml")]
        );
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_validate_requires_a_spec_source() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings {
            builtins: Some(false),
            ..CliSettings::default()
        });

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("registry.builtins"));
    }
}
