//! Option shapes: type tags, option specs, and ordered option maps.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Declared type of an option value.
///
/// Closed set. Both external spellings of a tag (`string` / `String`,
/// `number` / `Number`, `boolean` / `Boolean`, `parsed` / `myst`) map to the
/// same variant; anything else becomes [`Unrecognized`](Self::Unrecognized).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum OptionType {
    String,
    Number,
    Boolean,
    /// Value is markup, parsed into nodes by the host.
    Parsed,
    /// Unknown tag; rendered without a type annotation.
    #[default]
    Unrecognized,
}

impl OptionType {
    /// Normalize an external type tag.
    ///
    /// # Example
    ///
    /// ```
    /// use mystdoc_spec::OptionType;
    ///
    /// assert_eq!(OptionType::from_tag("String"), OptionType::String);
    /// assert_eq!(OptionType::from_tag("string"), OptionType::String);
    /// assert_eq!(OptionType::from_tag("myst"), OptionType::Parsed);
    /// assert_eq!(OptionType::from_tag("Date"), OptionType::Unrecognized);
    /// ```
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "string" | "String" => Self::String,
            "number" | "Number" => Self::Number,
            "boolean" | "Boolean" => Self::Boolean,
            "parsed" | "myst" => Self::Parsed,
            _ => Self::Unrecognized,
        }
    }
}

impl From<String> for OptionType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<&str> for OptionType {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

/// Shape of a single option, argument, or body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct OptionSpec {
    /// Declared value type. Missing tags are [`OptionType::Unrecognized`].
    #[serde(rename = "type", default)]
    pub option_type: OptionType,
    /// Whether the option must be supplied.
    #[serde(default)]
    pub required: bool,
    /// Free-form markup documentation.
    #[serde(default, alias = "documentation")]
    pub doc: Option<String>,
    /// Alternative names, in declaration order.
    #[serde(default, alias = "alias")]
    pub aliases: Vec<String>,
}

impl OptionSpec {
    /// Create an optional option of the given type.
    #[must_use]
    pub fn new(option_type: OptionType) -> Self {
        Self {
            option_type,
            ..Self::default()
        }
    }

    /// Mark the option as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the documentation string.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
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
}

/// Named options in declaration order.
///
/// YAML mappings are read in document order, so iteration follows the order
/// the options were written in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionMap(Vec<(String, OptionSpec)>);

impl OptionMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an option, replacing an existing one with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, option: OptionSpec) {
        let name = name.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = option,
            None => self.0.push((name, option)),
        }
    }

    /// Get an option by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, option)| option)
    }

    /// Iterate options in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionSpec)> {
        self.0.iter().map(|(name, option)| (name.as_str(), option))
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, OptionSpec)> for OptionMap {
    fn from_iter<I: IntoIterator<Item = (S, OptionSpec)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, option) in iter {
            map.insert(name, option);
        }
        map
    }
}

impl<'de> Deserialize<'de> for OptionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OptionMapVisitor;

        impl<'de> Visitor<'de> for OptionMapVisitor {
            type Value = OptionMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of option names to option specs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<OptionMap, A::Error> {
                let mut map = OptionMap::new();
                // A bare `name:` entry declares an untyped option
                while let Some((name, option)) =
                    access.next_entry::<String, Option<OptionSpec>>()?
                {
                    map.insert(name, option.unwrap_or_default());
                }
                Ok(map)
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<OptionMap, E> {
                Ok(OptionMap::new())
            }
        }

        deserializer.deserialize_any(OptionMapVisitor)
    }
}
