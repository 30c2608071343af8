//! Registry assembly from built-in specs and spec files.

use std::path::PathBuf;

use mystdoc_config::RegistryConfig;
use mystdoc_spec::{Registry, Spec, builtin_specs, load_spec_file};
use rayon::prelude::*;

use crate::error::CliError;

/// Build the registry: built-in specs first, then spec files in listed order.
///
/// Glob patterns expand to their matches in sorted order. A pattern that
/// matches nothing is logged and skipped; a plain path that does not exist is
/// an error.
pub(crate) fn load_registry(config: &RegistryConfig) -> Result<Registry, CliError> {
    let mut specs = if config.builtins {
        builtin_specs()?
    } else {
        Vec::new()
    };

    let files = expand_spec_files(&config.spec_files)?;
    let loaded: Vec<Vec<Spec>> = files
        .par_iter()
        .map(|path| load_spec_file(path))
        .collect::<Result<_, _>>()?;
    specs.extend(loaded.into_iter().flatten());

    tracing::info!(
        specs = specs.len(),
        files = files.len(),
        builtins = config.builtins,
        "Loaded spec registry"
    );
    Ok(Registry::new(specs))
}

fn expand_spec_files(entries: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    for entry in entries {
        let pattern = entry.to_string_lossy();
        if !is_glob(&pattern) {
            files.push(entry.clone());
            continue;
        }

        let mut matches = glob::glob(&pattern)?
            .map(|path| path.map_err(glob::GlobError::into_error))
            .collect::<Result<Vec<_>, _>>()?;
        if matches.is_empty() {
            tracing::warn!(pattern = %pattern, "Spec file pattern matched no files");
        }
        matches.sort();
        files.extend(matches);
    }
    Ok(files)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

#[cfg(test)]
mod tests {
    use super::*;
    use mystdoc_spec::SpecSource;
    use std::path::Path;
    use pretty_assertions::assert_eq;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn config(builtins: bool, spec_files: Vec<PathBuf>) -> RegistryConfig {
        RegistryConfig {
            builtins,
            spec_files,
        }
    }

    #[test]
    fn test_builtins_only() {
        let registry = load_registry(&config(true, Vec::new())).unwrap();
        assert!(registry.get("admonition").is_some());
    }

    #[test]
    fn test_files_follow_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "extra.yaml", "- name: tab-set\n  alias: [tabs]\n");

        let registry = load_registry(&config(true, vec![file])).unwrap();
        let names: Vec<_> = registry.specs().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names.first(), Some(&"admonition"));
        assert_eq!(names.last(), Some(&"tab-set"));
        assert_eq!(registry.get_by_name_or_alias("tabs").unwrap().name, "tab-set");
    }

    #[test]
    fn test_glob_matches_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b.yaml", "- name: beta\n");
        write(dir.path(), "a.yaml", "- name: alpha\n");
        write(dir.path(), "ignored.txt", "- name: ignored\n");

        let registry = load_registry(&config(false, vec![dir.path().join("*.yaml")])).unwrap();
        let names: Vec<_> = registry.specs().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_unmatched_glob_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let registry = load_registry(&config(false, vec![dir.path().join("*.yaml")])).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_missing_plain_file_is_error() {
        let err = load_registry(&config(false, vec![PathBuf::from("/nonexistent/specs.yaml")]))
            .unwrap_err();
        assert!(matches!(err, CliError::Spec(_)));
    }

    #[test]
    fn test_is_glob() {
        assert!(is_glob("specs/*.yaml"));
        assert!(is_glob("spec?.yaml"));
        assert!(is_glob("[ab].yaml"));
        assert!(!is_glob("specs/extra.yaml"));
    }
}
