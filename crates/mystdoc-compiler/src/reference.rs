//! Directive reference resolution.
//!
//! A reference body is either a bare label (`figure`, `figure.width`) or a
//! labeled form with display text (`the figure width <figure.width>`). The
//! label is `name[.option]`, where `name` may be a directive name or alias.

use std::sync::LazyLock;

use mystdoc_spec::SpecSource;
use mystdoc_tree::{Node, NodeKind};
use regex::Regex;

/// `lead text <label>`, anchored to the whole body.
static LABELED_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?s)(.*?)<([^<>]+)>$").unwrap());

/// Parsed reference body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceExpr<'a> {
    /// `lead <target>` form. `lead` is untrimmed and may be empty.
    Labeled { lead: &'a str, target: &'a str },
    /// The whole body is the label.
    Verbatim(&'a str),
}

impl<'a> ReferenceExpr<'a> {
    /// Classify a reference body.
    ///
    /// # Example
    ///
    /// ```
    /// use mystdoc_compiler::ReferenceExpr;
    ///
    /// assert_eq!(
    ///     ReferenceExpr::parse("Width <figure.width>"),
    ///     ReferenceExpr::Labeled { lead: "Width ", target: "figure.width" },
    /// );
    /// assert_eq!(ReferenceExpr::parse("figure"), ReferenceExpr::Verbatim("figure"));
    /// ```
    #[must_use]
    pub fn parse(body: &'a str) -> Self {
        match LABELED_REFERENCE.captures(body) {
            Some(caps) => match (caps.get(1), caps.get(2)) {
                (Some(lead), Some(target)) => Self::Labeled {
                    lead: lead.as_str(),
                    target: target.as_str(),
                },
                _ => Self::Verbatim(body),
            },
            None => Self::Verbatim(body),
        }
    }

    /// The `name[.option]` label.
    #[must_use]
    pub fn label(&self) -> &'a str {
        match self {
            Self::Labeled { target, .. } => target,
            Self::Verbatim(body) => body,
        }
    }

    /// Trimmed lead text, if present and non-blank.
    #[must_use]
    pub fn display_text(&self) -> Option<&'a str> {
        match self {
            Self::Labeled { lead, .. } => Some(lead.trim()).filter(|text| !text.is_empty()),
            Self::Verbatim(_) => None,
        }
    }
}

/// Resolve a reference body into a `crossReference` node.
///
/// The label's name part is looked up by name or alias, so references to an
/// alias point at the canonical directive. Unknown names are used verbatim;
/// resolution never fails.
///
/// The node carries one `inlineCode` child showing, in order of preference,
/// the lead text, the option name, or the name as written.
pub fn resolve_reference<S: SpecSource + ?Sized>(body: &str, specs: &S) -> Node {
    let expr = ReferenceExpr::parse(body);
    let (target_name, sub_option) = split_label(expr.label());

    let resolved = specs
        .get_by_name_or_alias(target_name)
        .map_or(target_name, |spec| spec.name.as_str());

    let identifier = match sub_option {
        Some(option) => format!("directive-{resolved}-{option}"),
        None => format!("directive-{resolved}"),
    };

    let display = expr
        .display_text()
        .or(sub_option)
        .unwrap_or(target_name);

    tracing::debug!(body, %identifier, "Resolved directive reference");

    Node::new(NodeKind::CrossReference)
        .with_identifier(identifier)
        .with_child(Node::inline_code(display))
}

/// Split `name.option` on the first dot. A trailing dot means no option.
fn split_label(label: &str) -> (&str, Option<&str>) {
    match label.split_once('.') {
        Some((name, option)) if !option.is_empty() => (name, Some(option)),
        Some((name, _)) => (name, None),
        None => (label, None),
    }
}
