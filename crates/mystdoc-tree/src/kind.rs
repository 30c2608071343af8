//! Node kind tags.

use std::fmt;

/// Kind tag of a documentation [`Node`](crate::Node).
///
/// The set is closed; [`as_str`](Self::as_str) yields the string tag that
/// downstream renderers dispatch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum NodeKind {
    Heading,
    Paragraph,
    Div,
    Strong,
    Emphasis,
    Delete,
    Superscript,
    Subscript,
    InlineCode,
    Code,
    Link,
    Image,
    List,
    ListItem,
    Blockquote,
    ThematicBreak,
    Break,
    Html,
    DefinitionList,
    DefinitionTerm,
    DefinitionDescription,
    CrossReference,
    Table,
    TableRow,
    TableCell,
}

impl NodeKind {
    /// String tag for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::Div => "div",
            Self::Strong => "strong",
            Self::Emphasis => "emphasis",
            Self::Delete => "delete",
            Self::Superscript => "superscript",
            Self::Subscript => "subscript",
            Self::InlineCode => "inlineCode",
            Self::Code => "code",
            Self::Link => "link",
            Self::Image => "image",
            Self::List => "list",
            Self::ListItem => "listItem",
            Self::Blockquote => "blockquote",
            Self::ThematicBreak => "thematicBreak",
            Self::Break => "break",
            Self::Html => "html",
            Self::DefinitionList => "definitionList",
            Self::DefinitionTerm => "definitionTerm",
            Self::DefinitionDescription => "definitionDescription",
            Self::CrossReference => "crossReference",
            Self::Table => "table",
            Self::TableRow => "tableRow",
            Self::TableCell => "tableCell",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
