//! Documentation tree nodes.

use std::collections::BTreeMap;

use crate::NodeKind;

/// Child of a [`Node`]: either a nested node or a leaf text run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Child {
    /// Nested node.
    Node(Node),
    /// Leaf text.
    Text(String),
}

impl Child {
    /// Leaf text, if this child is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Node(_) => None,
        }
    }

    /// Nested node, if this child is a node.
    #[must_use]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Text(_) => None,
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Node(node) => node.collect_text(out),
        }
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Generic labeled tree node.
///
/// Nodes are plain values: produced fresh by each compile call and never
/// shared or mutated afterwards. Attributes are kept in a sorted map so that
/// serialized output is deterministic.
///
/// # Example
///
/// ```
/// use mystdoc_tree::{Node, NodeKind};
///
/// let heading = Node::new(NodeKind::Heading)
///     .with_attr("depth", "2")
///     .with_attr("identifier", "directive-figure")
///     .with_child(Node::inline_code("figure"))
///     .with_child(" directive");
///
/// assert_eq!(heading.identifier(), Some("directive-figure"));
/// assert_eq!(heading.text_content(), "figure directive");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Kind tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: NodeKind,
    /// String attributes (e.g. `identifier`, `depth`, `url`).
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "BTreeMap::is_empty")
    )]
    pub attributes: BTreeMap<String, String>,
    /// Ordered children.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Child>,
}

impl Node {
    /// Create an empty node of the given kind.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a `strong` node wrapping a single text run.
    #[must_use]
    pub fn strong(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Strong).with_child(Child::Text(text.into()))
    }

    /// Create an `emphasis` node wrapping a single text run.
    #[must_use]
    pub fn emphasis(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Emphasis).with_child(Child::Text(text.into()))
    }

    /// Create an `inlineCode` node holding `code` as its only leaf.
    #[must_use]
    pub fn inline_code(code: impl Into<String>) -> Self {
        Self::new(NodeKind::InlineCode).with_child(Child::Text(code.into()))
    }

    /// Set an attribute.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Set the `identifier` attribute.
    #[must_use]
    pub fn with_identifier(self, identifier: impl Into<String>) -> Self {
        self.with_attr("identifier", identifier)
    }

    /// Append a child.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children.
    #[must_use]
    pub fn with_children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// The `identifier` attribute, if set.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.attr("identifier")
    }

    /// Iterate over child nodes, skipping leaf text.
    pub fn child_nodes(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(Child::as_node)
    }

    /// Concatenated leaf text of the whole subtree.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Depth-first search for the first node satisfying `predicate`,
    /// starting with `self`.
    pub fn find(&self, predicate: &impl Fn(&Node) -> bool) -> Option<&Node> {
        if predicate(self) {
            return Some(self);
        }
        self.child_nodes().find_map(|child| child.find(predicate))
    }

    /// Find a node by its `identifier` attribute.
    #[must_use]
    pub fn find_by_identifier(&self, identifier: &str) -> Option<&Node> {
        self.find(&|node: &Node| node.identifier() == Some(identifier))
    }
}
