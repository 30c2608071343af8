//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod directive;
pub(crate) mod list;
pub(crate) mod reference;

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use mystdoc_config::{CliSettings, Config};
use mystdoc_spec::Registry;
use serde_json::Value;

use crate::error::CliError;
use crate::sources::load_registry;

pub(crate) use check::CheckArgs;
pub(crate) use directive::DirectiveArgs;
pub(crate) use list::ListArgs;
pub(crate) use reference::ReferenceArgs;

/// Options shared by every command.
#[derive(Args, Debug, Default)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover mystdoc.toml).
    #[arg(short, long, global = true, env = "MYSTDOC_CONFIG")]
    pub(crate) config: Option<PathBuf>,

    /// Additional YAML spec file (repeatable).
    #[arg(long = "spec", global = true, value_name = "FILE")]
    pub(crate) spec_files: Vec<PathBuf>,

    /// Do not load the built-in directive specs.
    #[arg(long, global = true)]
    pub(crate) no_builtins: bool,

    /// Print compact JSON instead of pretty-printed JSON.
    #[arg(long, global = true)]
    pub(crate) compact: bool,

    /// Enable verbose output (info-level logging).
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
}

/// Loaded configuration and the registry built from it.
pub(crate) struct Session {
    pub(crate) config: Config,
    pub(crate) registry: Registry,
}

impl GlobalArgs {
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            builtins: self.no_builtins.then_some(false),
            spec_files: self.spec_files.clone(),
            pretty: self.compact.then_some(false),
        }
    }

    /// Load configuration and assemble the registry.
    pub(crate) fn session(&self) -> Result<Session, CliError> {
        let config = Config::load(self.config.as_deref(), Some(&self.cli_settings()))?;
        let registry = load_registry(&config.registry_resolved)?;
        Ok(Session { config, registry })
    }
}

impl Session {
    /// Write `value` to stdout as JSON, honoring `output.pretty`.
    pub(crate) fn write_json(&self, value: &Value) -> Result<(), CliError> {
        let mut stdout = std::io::stdout().lock();
        if self.config.output.pretty {
            serde_json::to_writer_pretty(&mut stdout, value)?;
        } else {
            serde_json::to_writer(&mut stdout, value)?;
        }
        writeln!(stdout)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_settings_from_flags() {
        let args = GlobalArgs {
            spec_files: vec![PathBuf::from("extra.yaml")],
            no_builtins: true,
            compact: true,
            ..GlobalArgs::default()
        };
        let settings = args.cli_settings();

        assert_eq!(settings.builtins, Some(false));
        assert_eq!(settings.pretty, Some(false));
        assert_eq!(settings.spec_files, vec![PathBuf::from("extra.yaml")]);
    }

    #[test]
    fn test_cli_settings_defaults_defer_to_config() {
        let settings = GlobalArgs::default().cli_settings();
        assert!(settings.builtins.is_none());
        assert!(settings.pretty.is_none());
        assert!(settings.spec_files.is_empty());
    }

    #[test]
    fn test_session_with_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("specs.yaml"), "- name: tab-set\n").unwrap();
        let config = dir.path().join("mystdoc.toml");
        std::fs::write(
            &config,
            "[registry]\nbuiltins = false\nspec_files = [\"specs.yaml\"]\n",
        )
        .unwrap();

        let args = GlobalArgs {
            config: Some(config),
            ..GlobalArgs::default()
        };
        let session = args.session().unwrap();

        assert_eq!(session.registry.len(), 1);
        assert!(session.config.output.pretty);
    }
}
