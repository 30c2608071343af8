//! `${VAR}` expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a string.
///
/// Strings without `${` are returned unchanged, so a bare `$` in a path is
/// left alone.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("MYSTDOC_TEST_SPEC_DIR", "/opt/specs");
        }
        let result = expand_env("${MYSTDOC_TEST_SPEC_DIR}/*.yaml", "registry.spec_files").unwrap();
        assert_eq!(result, "/opt/specs/*.yaml");
        unsafe {
            std::env::remove_var("MYSTDOC_TEST_SPEC_DIR");
        }
    }

    #[test]
    fn test_expand_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MYSTDOC_TEST_UNSET_DIR");
        }
        let result = expand_env("${MYSTDOC_TEST_UNSET_DIR:-specs}/extra.yaml", "field").unwrap();
        assert_eq!(result, "specs/extra.yaml");
    }

    #[test]
    fn test_expand_missing_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MYSTDOC_TEST_MISSING");
        }
        let err = expand_env("${MYSTDOC_TEST_MISSING}", "registry.spec_files").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("MYSTDOC_TEST_MISSING"));
        assert!(err.to_string().contains("registry.spec_files"));
    }

    #[test]
    fn test_literal_and_bare_dollar_unchanged() {
        assert_eq!(expand_env("specs/*.yaml", "f").unwrap(), "specs/*.yaml");
        assert_eq!(expand_env("$HOME/specs", "f").unwrap(), "$HOME/specs");
    }
}
