//! Markup parsing into documentation nodes.
//!
//! [`CommonMarkParser`] walks pulldown-cmark events and builds a [`Node`]
//! tree with a container stack: every `Start` pushes a node, every `End`
//! pops it and attaches it to its parent.

use pulldown_cmark::{
    Alignment, BlockQuoteKind, CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag,
};

use crate::{Child, Node, NodeKind};

/// Parses free-form documentation source into block-level nodes.
///
/// Implementations must be pure: the same input always yields the same
/// tree, and parsing never fails (malformed markup degrades to text).
pub trait MarkupParser {
    /// Parse `text` into a sequence of block nodes.
    fn parse(&self, text: &str) -> Vec<Node>;
}

impl<P: MarkupParser + ?Sized> MarkupParser for &P {
    fn parse(&self, text: &str) -> Vec<Node> {
        (**self).parse(text)
    }
}

/// CommonMark markup parser backed by pulldown-cmark.
///
/// GFM extensions (tables, strikethrough, task lists, alerts) and definition
/// lists are enabled by default.
#[derive(Clone, Copy, Debug)]
pub struct CommonMarkParser {
    gfm: bool,
}

impl Default for CommonMarkParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommonMarkParser {
    /// Create a parser with GFM enabled.
    #[must_use]
    pub fn new() -> Self {
        Self { gfm: true }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        let base = Options::ENABLE_DEFINITION_LIST;
        if self.gfm {
            base | Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            base
        }
    }
}

impl MarkupParser for CommonMarkParser {
    fn parse(&self, text: &str) -> Vec<Node> {
        let mut builder = TreeBuilder::default();
        for event in Parser::new_ext(text, self.parser_options()) {
            builder.process_event(event);
        }
        builder.finish()
    }
}

/// Container stack used while folding events into a tree.
#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Node>,
    roots: Vec<Node>,
}

impl TreeBuilder {
    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(_) => self.end_tag(),
            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => self.push_node(Node::inline_code(&*code)),
            Event::Html(html) => self.push_text(&html),
            Event::InlineHtml(html) => {
                self.push_node(Node::new(NodeKind::Html).with_child(&*html));
            }
            Event::SoftBreak => self.push_text("\n"),
            Event::HardBreak => self.push_node(Node::new(NodeKind::Break)),
            Event::Rule => self.push_node(Node::new(NodeKind::ThematicBreak)),
            Event::TaskListMarker(checked) => {
                if let Some(item) = self.stack.last_mut() {
                    item.attributes
                        .insert("checked".to_owned(), checked.to_string());
                }
            }
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {
                // Not enabled in parser options
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        let node = match tag {
            Tag::Paragraph => Node::new(NodeKind::Paragraph),
            Tag::Heading { level, id, .. } => {
                let node = Node::new(NodeKind::Heading)
                    .with_attr("depth", heading_level_to_num(level).to_string());
                match id {
                    Some(id) => node.with_identifier(&*id),
                    None => node,
                }
            }
            Tag::BlockQuote(kind) => {
                let node = Node::new(NodeKind::Blockquote);
                match kind {
                    Some(kind) => node.with_attr("kind", alert_kind_name(kind)),
                    None => node,
                }
            }
            Tag::CodeBlock(kind) => {
                let node = Node::new(NodeKind::Code);
                match kind {
                    CodeBlockKind::Fenced(info) if !info.is_empty() => {
                        let lang = info.split_whitespace().next().unwrap_or_default();
                        node.with_attr("lang", lang)
                    }
                    _ => node,
                }
            }
            Tag::HtmlBlock => Node::new(NodeKind::Html),
            Tag::List(start) => match start {
                Some(n) => Node::new(NodeKind::List)
                    .with_attr("ordered", "true")
                    .with_attr("start", n.to_string()),
                None => Node::new(NodeKind::List).with_attr("ordered", "false"),
            },
            Tag::Item => Node::new(NodeKind::ListItem),
            // Not enabled in parser options; a plain container keeps the stack balanced
            Tag::FootnoteDefinition(_) | Tag::MetadataBlock(_) => Node::new(NodeKind::Div),
            Tag::DefinitionList => Node::new(NodeKind::DefinitionList),
            Tag::DefinitionListTitle => Node::new(NodeKind::DefinitionTerm),
            Tag::DefinitionListDefinition => Node::new(NodeKind::DefinitionDescription),
            Tag::Table(alignments) => {
                Node::new(NodeKind::Table).with_attr("align", alignment_list(&alignments))
            }
            Tag::TableHead => Node::new(NodeKind::TableRow).with_attr("header", "true"),
            Tag::TableRow => Node::new(NodeKind::TableRow),
            Tag::TableCell => Node::new(NodeKind::TableCell),
            Tag::Emphasis => Node::new(NodeKind::Emphasis),
            Tag::Strong => Node::new(NodeKind::Strong),
            Tag::Strikethrough => Node::new(NodeKind::Delete),
            Tag::Superscript => Node::new(NodeKind::Superscript),
            Tag::Subscript => Node::new(NodeKind::Subscript),
            Tag::Link {
                dest_url, title, ..
            } => with_title(
                Node::new(NodeKind::Link).with_attr("url", &*dest_url),
                &title,
            ),
            Tag::Image {
                dest_url, title, ..
            } => with_title(
                Node::new(NodeKind::Image).with_attr("url", &*dest_url),
                &title,
            ),
        };
        self.stack.push(node);
    }

    fn end_tag(&mut self) {
        let Some(mut node) = self.stack.pop() else {
            return;
        };
        match node.kind {
            NodeKind::Code => {
                // Fenced content always ends with a newline; the node holds
                // the code without it.
                let mut content = node.text_content();
                if content.ends_with('\n') {
                    content.pop();
                }
                node.children = vec![Child::Text(content)];
            }
            NodeKind::Image => {
                let alt = node.text_content();
                node.children.clear();
                node.attributes.insert("alt".to_owned(), alt);
            }
            _ => {}
        }
        self.push_node(node);
    }

    fn push_text(&mut self, text: &str) {
        match self.stack.last_mut() {
            Some(parent) => {
                if let Some(Child::Text(last)) = parent.children.last_mut() {
                    last.push_str(text);
                } else {
                    parent.children.push(Child::Text(text.to_owned()));
                }
            }
            None => {
                self.roots
                    .push(Node::new(NodeKind::Paragraph).with_child(text));
            }
        }
    }

    fn push_node(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(Child::Node(node)),
            None => self.roots.push(node),
        }
    }

    fn finish(mut self) -> Vec<Node> {
        while !self.stack.is_empty() {
            self.end_tag();
        }
        self.roots
    }
}

fn with_title(node: Node, title: &str) -> Node {
    if title.is_empty() {
        node
    } else {
        node.with_attr("title", title)
    }
}

/// Convert heading level enum to number (1-6).
fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn alert_kind_name(kind: BlockQuoteKind) -> &'static str {
    match kind {
        BlockQuoteKind::Note => "note",
        BlockQuoteKind::Tip => "tip",
        BlockQuoteKind::Important => "important",
        BlockQuoteKind::Warning => "warning",
        BlockQuoteKind::Caution => "caution",
    }
}

fn alignment_list(alignments: &[Alignment]) -> String {
    alignments
        .iter()
        .map(|a| match a {
            Alignment::None => "none",
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        })
        .collect::<Vec<_>>()
        .join(",")
}
