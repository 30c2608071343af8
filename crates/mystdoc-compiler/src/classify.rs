//! Option type classification.

use mystdoc_spec::{OptionSpec, OptionType};

/// Display name of an option's declared type.
///
/// Returns an empty string for unrecognized tags, which suppresses the type
/// annotation in the compiled term.
///
/// # Example
///
/// ```
/// use mystdoc_compiler::classify;
/// use mystdoc_spec::{OptionSpec, OptionType};
///
/// assert_eq!(classify(&OptionSpec::new(OptionType::Parsed)), "parsed");
/// assert_eq!(classify(&OptionSpec::default()), "");
/// ```
#[must_use]
pub fn classify(option: &OptionSpec) -> &'static str {
    match option.option_type {
        OptionType::String => "string",
        OptionType::Number => "number",
        OptionType::Boolean => "boolean",
        OptionType::Parsed => "parsed",
        OptionType::Unrecognized => "",
    }
}
