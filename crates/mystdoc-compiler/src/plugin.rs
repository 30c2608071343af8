//! Directive and role handlers, bundled as a plugin.
//!
//! Hosts that parse documents call a [`DirectiveHandler`] when they meet a
//! directive whose name matches [`DirectiveHandler::spec`], and a
//! [`RoleHandler`] for matching roles. The handlers' own specs can be added to
//! a registry so that directives documenting themselves work too.

use mystdoc_spec::{OptionSpec, OptionType, Spec, SpecSource};
use mystdoc_tree::{MarkupParser, Node};

use crate::{DiagnosticSink, DocCompiler};

/// Name shared by the documentation directive and role.
pub const DOCS_NAME: &str = "myst:directive";

/// Parsed invocation of a directive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectiveData<'a> {
    /// Single-line argument, if given.
    pub arg: Option<&'a str>,
    /// Body text, if given.
    pub body: Option<&'a str>,
}

/// Parsed invocation of a role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleData<'a> {
    /// Role body text.
    pub body: &'a str,
}

/// What a handler can see while running.
pub struct HandlerContext<'a> {
    /// Specs the handler documents or references.
    pub specs: &'a dyn SpecSource,
    /// Parser for documentation strings.
    pub parser: &'a dyn MarkupParser,
    /// Destination for errors.
    pub sink: &'a mut dyn DiagnosticSink,
}

/// Handler for a block directive.
pub trait DirectiveHandler: Send + Sync {
    /// Name the directive is invoked by.
    fn name(&self) -> &str;

    /// Spec the directive is registered under.
    fn spec(&self) -> Spec;

    /// Expand the directive into nodes.
    fn run(&self, data: DirectiveData<'_>, ctx: &mut HandlerContext<'_>) -> Vec<Node>;
}

/// Handler for an inline role.
pub trait RoleHandler: Send + Sync {
    /// Name the role is invoked by.
    fn name(&self) -> &str;

    /// Spec the role is registered under.
    fn spec(&self) -> Spec;

    /// Expand the role into inline nodes.
    fn run(&self, data: RoleData<'_>, ctx: &mut HandlerContext<'_>) -> Vec<Node>;
}

/// `myst:directive` directive: documents the directive named by its argument.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocsDirective;

impl DirectiveHandler for DocsDirective {
    fn name(&self) -> &str {
        DOCS_NAME
    }

    fn spec(&self) -> Spec {
        Spec::new(self.name())
            .with_argument(
                OptionSpec::new(OptionType::String)
                    .required()
                    .with_doc("Name of the directive to document."),
            )
            .with_doc("Generate the documentation section for a directive.")
    }

    fn run(&self, data: DirectiveData<'_>, ctx: &mut HandlerContext<'_>) -> Vec<Node> {
        let Some(name) = data.arg.map(str::trim).filter(|name| !name.is_empty()) else {
            ctx.sink
                .report_error(format!("{DOCS_NAME}: Missing directive name argument"));
            return Vec::new();
        };

        DocCompiler::new(ctx.specs)
            .with_parser(ctx.parser)
            .compile_directive(name, ctx.sink)
    }
}

/// `myst:directive` role: cross-references a directive or one of its options.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocsRole;

impl RoleHandler for DocsRole {
    fn name(&self) -> &str {
        DOCS_NAME
    }

    fn spec(&self) -> Spec {
        Spec::new(self.name())
            .with_body(
                OptionSpec::new(OptionType::String)
                    .required()
                    .with_doc("Reference as `name`, `name.option`, or `text <name.option>`."),
            )
            .with_doc("Reference a directive or one of its options.")
    }

    fn run(&self, data: RoleData<'_>, ctx: &mut HandlerContext<'_>) -> Vec<Node> {
        vec![crate::resolve_reference(data.body, ctx.specs)]
    }
}

/// A named bundle of directive and role handlers.
pub struct Plugin {
    pub name: String,
    pub author: String,
    pub license: String,
    pub directives: Vec<Box<dyn DirectiveHandler>>,
    pub roles: Vec<Box<dyn RoleHandler>>,
}

impl Plugin {
    /// The documentation plugin: [`DocsDirective`] and [`DocsRole`].
    ///
    /// # Example
    ///
    /// ```
    /// use mystdoc_compiler::{Diagnostics, HandlerContext, Plugin, RoleData};
    /// use mystdoc_spec::{Registry, Spec};
    /// use mystdoc_tree::CommonMarkParser;
    ///
    /// let plugin = Plugin::docs();
    /// let registry = Registry::new(vec![Spec::new("figure")]);
    /// let mut diagnostics = Diagnostics::new();
    /// let mut ctx = HandlerContext {
    ///     specs: &registry,
    ///     parser: &CommonMarkParser::new(),
    ///     sink: &mut diagnostics,
    /// };
    ///
    /// let role = plugin.role("myst:directive").unwrap();
    /// let nodes = role.run(RoleData { body: "figure" }, &mut ctx);
    /// assert_eq!(nodes[0].identifier(), Some("directive-figure"));
    /// ```
    #[must_use]
    pub fn docs() -> Self {
        Self {
            name: "MyST Documentation Plugins".to_owned(),
            author: "Rowan Cockett".to_owned(),
            license: "MIT".to_owned(),
            directives: vec![Box::new(DocsDirective)],
            roles: vec![Box::new(DocsRole)],
        }
    }

    /// Find a directive handler by name.
    #[must_use]
    pub fn directive(&self, name: &str) -> Option<&dyn DirectiveHandler> {
        self.directives
            .iter()
            .find(|handler| handler.name() == name)
            .map(AsRef::as_ref)
    }

    /// Find a role handler by name.
    #[must_use]
    pub fn role(&self, name: &str) -> Option<&dyn RoleHandler> {
        self.roles
            .iter()
            .find(|handler| handler.name() == name)
            .map(AsRef::as_ref)
    }

    /// Specs of every directive the plugin provides.
    #[must_use]
    pub fn directive_specs(&self) -> Vec<Spec> {
        self.directives.iter().map(|handler| handler.spec()).collect()
    }
}

impl std::fmt::Debug for Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plugin")
            .field("name", &self.name)
            .field("author", &self.author)
            .field("license", &self.license)
            .field("directives", &self.directives.len())
            .field("roles", &self.roles.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Diagnostics;
    use mystdoc_spec::{Registry, builtin_specs};
    use mystdoc_tree::{CommonMarkParser, NodeKind};
    use pretty_assertions::assert_eq;

    fn with_context<T>(
        registry: &Registry,
        f: impl FnOnce(&mut HandlerContext<'_>) -> T,
    ) -> (T, Diagnostics) {
        let parser = CommonMarkParser::new();
        let mut diagnostics = Diagnostics::new();
        let result = {
            let mut ctx = HandlerContext {
                specs: registry,
                parser: &parser,
                sink: &mut diagnostics,
            };
            f(&mut ctx)
        };
        (result, diagnostics)
    }

    #[test]
    fn test_plugin_metadata() {
        let plugin = Plugin::docs();
        assert_eq!(plugin.name, "MyST Documentation Plugins");
        assert_eq!(plugin.license, "MIT");
        assert_eq!(plugin.directives.len(), 1);
        assert_eq!(plugin.roles.len(), 1);
    }

    #[test]
    fn test_handler_specs() {
        let directive = DocsDirective.spec();
        assert_eq!(directive.name, "myst:directive");
        let arg = directive.argument.unwrap();
        assert_eq!(arg.option_type, OptionType::String);
        assert!(arg.required);
        assert!(directive.body.is_none());

        let role = DocsRole.spec();
        assert!(role.argument.is_none());
        assert!(role.body.unwrap().required);
    }

    #[test]
    fn test_lookup_handlers() {
        let plugin = Plugin::docs();
        assert!(plugin.directive(DOCS_NAME).is_some());
        assert!(plugin.role(DOCS_NAME).is_some());
        assert!(plugin.directive("myst:role").is_none());
    }

    #[test]
    fn test_handler_name_matches_spec() {
        let plugin = Plugin::docs();
        let directive = plugin.directive(DOCS_NAME).unwrap();
        assert_eq!(directive.spec().name, directive.name());
        let role = plugin.role(DOCS_NAME).unwrap();
        assert_eq!(role.spec().name, role.name());
    }

    #[test]
    fn test_directive_documents_named_directive() {
        let registry = Registry::new(builtin_specs().unwrap());
        let (nodes, diagnostics) = with_context(&registry, |ctx| {
            DocsDirective.run(
                DirectiveData {
                    arg: Some(" figure "),
                    body: None,
                },
                ctx,
            )
        });

        assert!(diagnostics.is_empty());
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].kind, NodeKind::Heading);
        assert_eq!(nodes[0].identifier(), Some("directive-figure"));
    }

    #[test]
    fn test_directive_unknown_name() {
        let registry = Registry::default();
        let (nodes, diagnostics) = with_context(&registry, |ctx| {
            DocsDirective.run(
                DirectiveData {
                    arg: Some("nope"),
                    body: None,
                },
                ctx,
            )
        });

        assert!(nodes.is_empty());
        assert_eq!(
            diagnostics.errors(),
            ["myst:directive: Unknown myst directive \"nope\""]
        );
    }

    #[test]
    fn test_directive_missing_argument() {
        let registry = Registry::default();
        let (nodes, diagnostics) =
            with_context(&registry, |ctx| DocsDirective.run(DirectiveData::default(), ctx));

        assert!(nodes.is_empty());
        assert_eq!(diagnostics.errors().len(), 1);
    }

    #[test]
    fn test_self_documenting_plugin() {
        let plugin = Plugin::docs();
        let registry = Registry::new(plugin.directive_specs());
        let (nodes, diagnostics) = with_context(&registry, |ctx| {
            plugin.directive(DOCS_NAME).unwrap().run(
                DirectiveData {
                    arg: Some(DOCS_NAME),
                    body: None,
                },
                ctx,
            )
        });

        assert!(diagnostics.is_empty());
        assert_eq!(nodes[0].identifier(), Some("directive-myst:directive"));
    }

    #[test]
    fn test_role_resolves_alias() {
        let registry = Registry::new(builtin_specs().unwrap());
        let (nodes, diagnostics) = with_context(&registry, |ctx| {
            DocsRole.run(
                RoleData {
                    body: "line numbers <code.linenos>",
                },
                ctx,
            )
        });

        assert!(diagnostics.is_empty());
        assert_eq!(
            nodes,
            vec![
                Node::new(NodeKind::CrossReference)
                    .with_identifier("directive-code-block-linenos")
                    .with_child(Node::inline_code("line numbers"))
            ]
        );
    }
}
