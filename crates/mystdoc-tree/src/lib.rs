//! Renderer-agnostic documentation tree.
//!
//! This crate provides the [`Node`] type used as the output currency of the
//! documentation compilers, together with a [`MarkupParser`] abstraction for
//! turning free-form documentation strings into sub-trees.
//!
//! # Architecture
//!
//! - [`Node`]: a labeled tree node with a [`NodeKind`] tag, string attributes,
//!   and ordered children (nodes or leaf text)
//! - [`MarkupParser`]: trait for parsing markup source into block nodes
//! - [`CommonMarkParser`]: default parser built on pulldown-cmark
//!
//! Trees carry structure only. Turning them into HTML or any other format is
//! left to downstream renderers.
//!
//! # Example
//!
//! ```
//! use mystdoc_tree::{CommonMarkParser, MarkupParser, Node, NodeKind};
//!
//! let nodes = CommonMarkParser::new().parse("Hello **world**");
//! assert_eq!(nodes.len(), 1);
//! assert_eq!(nodes[0].kind, NodeKind::Paragraph);
//! assert_eq!(nodes[0].text_content(), "Hello world");
//!
//! let code = Node::inline_code("admonition");
//! assert_eq!(code.kind.as_str(), "inlineCode");
//! ```

mod kind;
mod markup;
mod node;

pub use kind::NodeKind;
pub use markup::{CommonMarkParser, MarkupParser};
pub use node::{Child, Node};
