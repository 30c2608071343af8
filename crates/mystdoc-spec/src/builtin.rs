//! Built-in directive specifications embedded at compile time.

use crate::{Spec, SpecError, load_specs};

const BUILTIN_SPECS: &str = include_str!("builtin.yaml");

/// Specifications for the common directives, in declaration order.
///
/// # Errors
///
/// Returns an error only if the embedded YAML is malformed.
pub fn builtin_specs() -> Result<Vec<Spec>, SpecError> {
    load_specs(BUILTIN_SPECS)
}
