//! Option documentation fragments.

use mystdoc_spec::OptionSpec;
use mystdoc_tree::{Child, MarkupParser, Node, NodeKind};

use crate::classify;

/// Compile one option into definition-list entries.
///
/// Produces `[term, description]`, followed by an alias description when the
/// option has aliases. An absent option yields no entries.
///
/// The pseudo-options `arg` and `body` are labeled "Directive Argument" and
/// "Directive Body"; every other option is labeled with its own name.
pub fn compile_option<P: MarkupParser + ?Sized>(
    spec_name: &str,
    option_name: &str,
    option: Option<&OptionSpec>,
    parser: &P,
) -> Vec<Node> {
    let Some(option) = option else {
        return Vec::new();
    };

    let mut entries = Vec::with_capacity(3);
    entries.push(term(spec_name, option_name, option));

    let description = Node::new(NodeKind::DefinitionDescription);
    entries.push(match option.doc.as_deref() {
        Some(doc) if !doc.is_empty() => description.with_children(parser.parse(doc)),
        _ => description.with_child("No description"),
    });

    if !option.aliases.is_empty() {
        entries.push(
            Node::new(NodeKind::DefinitionDescription)
                .with_children(alias_children(&option.aliases)),
        );
    }

    entries
}

fn term(spec_name: &str, option_name: &str, option: &OptionSpec) -> Node {
    let label = match option_name {
        "arg" => "Directive Argument",
        "body" => "Directive Body",
        name => name,
    };

    let mut term = Node::new(NodeKind::DefinitionTerm)
        .with_identifier(format!("directive-{spec_name}-{option_name}"))
        .with_child(Node::strong(label));

    let type_name = classify(option);
    if !type_name.is_empty() {
        let annotation = if option.required {
            format!("{type_name}, required")
        } else {
            type_name.to_owned()
        };
        term = term
            .with_child(" (")
            .with_child(Node::emphasis(annotation))
            .with_child(")");
    }

    term
}

/// `Alias: a, b, c` children: a strong label, then inline-code aliases
/// separated by `, ` with no trailing separator.
pub(crate) fn alias_children(aliases: &[String]) -> Vec<Child> {
    let mut children = Vec::with_capacity(aliases.len() * 2 + 1);
    children.push(Node::strong("Alias").into());
    children.push(": ".into());
    for (i, alias) in aliases.iter().enumerate() {
        if i > 0 {
            children.push(", ".into());
        }
        children.push(Node::inline_code(alias.as_str()).into());
    }
    children
}
