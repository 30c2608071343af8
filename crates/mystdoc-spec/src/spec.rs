//! Directive and role specifications.

use serde::Deserialize;

use crate::{OptionMap, OptionSpec};

/// Declarative metadata for a directive or role.
///
/// YAML field names follow the usual plugin layout (`arg`, `body`,
/// `options`, `alias`, `doc`); the longer spellings `argument`, `aliases`,
/// and `documentation` are accepted too.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Spec {
    /// Unique name within a registry.
    pub name: String,
    /// Alternative names, in declaration order.
    #[serde(default, alias = "alias")]
    pub aliases: Vec<String>,
    /// Single-line argument shape, if the construct takes one.
    #[serde(default, rename = "arg", alias = "argument")]
    pub argument: Option<OptionSpec>,
    /// Body shape, if the construct takes one.
    #[serde(default)]
    pub body: Option<OptionSpec>,
    /// Named options in declaration order.
    #[serde(default)]
    pub options: OptionMap,
    /// Free-form markup documentation.
    #[serde(default, alias = "documentation")]
    pub doc: Option<String>,
}

impl Spec {
    /// Create a spec with no argument, body, options, or aliases.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the alias list.
    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Set the argument shape.
    #[must_use]
    pub fn with_argument(mut self, argument: OptionSpec) -> Self {
        self.argument = Some(argument);
        self
    }

    /// Set the body shape.
    #[must_use]
    pub fn with_body(mut self, body: OptionSpec) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a named option. Re-adding a name replaces it in place.
    #[must_use]
    pub fn with_option(mut self, name: impl Into<String>, option: OptionSpec) -> Self {
        self.options.insert(name, option);
        self
    }

    /// Set the documentation string.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Whether `name` is this spec's name or one of its aliases.
    #[must_use]
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| alias == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OptionType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_spec_from_yaml_short_names() {
        let yaml = r"
name: figure
alias: [fig]
arg: {type: String, required: true, doc: Image path.}
body: {type: parsed}
doc: Insert a figure.
options:
  width: {type: string}
  align: {type: String}
";
        let spec: Spec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            spec,
            Spec::new("figure")
                .with_aliases(["fig"])
                .with_argument(
                    OptionSpec::new(OptionType::String)
                        .required()
                        .with_doc("Image path.")
                )
                .with_body(OptionSpec::new(OptionType::Parsed))
                .with_option("width", OptionSpec::new(OptionType::String))
                .with_option("align", OptionSpec::new(OptionType::String))
                .with_doc("Insert a figure.")
        );
    }

    #[test]
    fn test_spec_from_yaml_long_names() {
        let yaml = r"
name: include
aliases: [literalinclude]
argument: {type: string}
documentation: Include a file.
";
        let spec: Spec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(spec.aliases, vec!["literalinclude"]);
        assert!(spec.argument.is_some());
        assert!(spec.body.is_none());
        assert!(spec.options.is_empty());
        assert_eq!(spec.doc.as_deref(), Some("Include a file."));
    }

    #[test]
    fn test_answers_to_name_and_aliases() {
        let spec = Spec::new("code-block").with_aliases(["code", "sourcecode"]);
        assert!(spec.answers_to("code-block"));
        assert!(spec.answers_to("sourcecode"));
        assert!(!spec.answers_to("codeblock"));
    }
}
