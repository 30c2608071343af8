//! Directive documentation sections.

use mystdoc_spec::{Spec, SpecSource};
use mystdoc_tree::{CommonMarkParser, MarkupParser, Node, NodeKind};

use crate::option::{alias_children, compile_option};
use crate::{DiagnosticSink, resolve_reference};

/// Compiles registry entries into documentation trees.
///
/// Holds a spec source and the markup parser used for documentation strings.
/// Compilation is pure apart from diagnostics, so a compiler can be shared
/// across threads when its source and parser are.
///
/// # Example
///
/// ```
/// use mystdoc_compiler::{DocCompiler, Diagnostics};
/// use mystdoc_spec::{Registry, Spec};
///
/// let registry = Registry::new(vec![Spec::new("mermaid")]);
/// let compiler = DocCompiler::new(&registry);
///
/// let mut diagnostics = Diagnostics::new();
/// let nodes = compiler.compile_directive("mermaid", &mut diagnostics);
/// assert_eq!(nodes.len(), 3);
/// assert_eq!(nodes[0].identifier(), Some("directive-mermaid"));
/// assert!(diagnostics.is_empty());
/// ```
#[derive(Debug)]
pub struct DocCompiler<'a, S: ?Sized, P = CommonMarkParser> {
    specs: &'a S,
    parser: P,
}

impl<'a, S: SpecSource + ?Sized> DocCompiler<'a, S> {
    /// Create a compiler using the default CommonMark parser.
    #[must_use]
    pub fn new(specs: &'a S) -> Self {
        Self {
            specs,
            parser: CommonMarkParser::new(),
        }
    }
}

impl<'a, S: SpecSource + ?Sized, P: MarkupParser> DocCompiler<'a, S, P> {
    /// Replace the markup parser.
    #[must_use]
    pub fn with_parser<Q: MarkupParser>(self, parser: Q) -> DocCompiler<'a, S, Q> {
        DocCompiler {
            specs: self.specs,
            parser,
        }
    }

    /// Spec source the compiler looks names up in.
    #[must_use]
    pub fn specs(&self) -> &'a S {
        self.specs
    }

    /// Compile the documentation section for the directive named `name`.
    ///
    /// Returns `[heading, div, definitionList]`. Lookup is by exact name;
    /// aliases are not accepted here. An unknown name is reported to `sink`
    /// once and yields an empty list.
    pub fn compile_directive(&self, name: &str, sink: &mut dyn DiagnosticSink) -> Vec<Node> {
        let Some(spec) = self.specs.get(name) else {
            sink.report_error(format!("myst:directive: Unknown myst directive \"{name}\""));
            return Vec::new();
        };

        tracing::debug!(name, options = spec.options.len(), "Compiling directive docs");
        vec![heading(name), self.intro(spec), self.definitions(spec)]
    }

    /// Compile several directives in order.
    ///
    /// Unknown names are reported and skipped; each entry of the result is
    /// the section for the corresponding input name (empty when skipped).
    pub fn compile_directives<I, N>(
        &self,
        names: I,
        sink: &mut dyn DiagnosticSink,
    ) -> Vec<Vec<Node>>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.compile_directive(name.as_ref(), sink))
            .collect()
    }

    /// Resolve a reference body against this compiler's spec source.
    #[must_use]
    pub fn resolve_reference(&self, body: &str) -> Node {
        resolve_reference(body, self.specs)
    }

    /// Documentation followed by the alias paragraph.
    fn intro(&self, spec: &Spec) -> Node {
        let mut div = Node::new(NodeKind::Div);
        if let Some(doc) = &spec.doc {
            div = div.with_children(self.parser.parse(doc));
        }
        if !spec.aliases.is_empty() {
            div = div.with_child(
                Node::new(NodeKind::Paragraph).with_children(alias_children(&spec.aliases)),
            );
        }
        div
    }

    fn definitions(&self, spec: &Spec) -> Node {
        let name = spec.name.as_str();
        let parser = &self.parser;

        let options: Vec<Node> = spec
            .options
            .iter()
            .flat_map(|(option_name, option)| {
                compile_option(name, option_name, Some(option), parser)
            })
            .collect();

        let options_description = if options.is_empty() {
            Node::new(NodeKind::DefinitionDescription).with_child("No options")
        } else {
            Node::new(NodeKind::DefinitionDescription)
                .with_child(Node::new(NodeKind::DefinitionList).with_children(options))
        };

        Node::new(NodeKind::DefinitionList)
            .with_children(compile_option(name, "arg", spec.argument.as_ref(), parser))
            .with_children(compile_option(name, "body", spec.body.as_ref(), parser))
            .with_child(
                Node::new(NodeKind::DefinitionTerm)
                    .with_identifier(format!("directive-{name}-opts"))
                    .with_child(Node::strong("Options")),
            )
            .with_child(options_description)
    }
}

fn heading(name: &str) -> Node {
    Node::new(NodeKind::Heading)
        .with_attr("depth", "2")
        .with_identifier(format!("directive-{name}"))
        .with_child(Node::inline_code(name))
        .with_child(" directive")
}
