//! Directive documentation compiler.
//!
//! Turns declarative directive [`Spec`](mystdoc_spec::Spec)s into
//! renderer-agnostic documentation trees, and resolves inline directive
//! references into cross-reference nodes.
//!
//! # Architecture
//!
//! - [`classify`]: display name of an option's type
//! - [`compile_option`]: definition-list entries for one option
//! - [`DocCompiler`]: full documentation section for a directive
//! - [`resolve_reference`]: `text <name.option>` to a `crossReference` node
//! - [`DiagnosticSink`]: where compile errors go
//! - [`Plugin`]: the `myst:directive` directive and role as handlers
//!
//! Compilation never fails. An unknown directive is reported to the sink and
//! produces no nodes; an unknown reference target is used verbatim.
//!
//! # Example
//!
//! ```
//! use mystdoc_compiler::{DocCompiler, Diagnostics};
//! use mystdoc_spec::{Registry, builtin_specs};
//!
//! let registry = Registry::new(builtin_specs().unwrap());
//! let compiler = DocCompiler::new(&registry);
//!
//! let mut diagnostics = Diagnostics::new();
//! let section = compiler.compile_directive("figure", &mut diagnostics);
//! assert_eq!(section[0].text_content(), "figure directive");
//!
//! let xref = compiler.resolve_reference("fig width <figure.width>");
//! assert_eq!(xref.identifier(), Some("directive-figure-width"));
//! ```

mod classify;
mod diagnostics;
mod directive;
mod option;
mod plugin;
mod reference;

pub use classify::classify;
pub use diagnostics::{DiagnosticSink, Diagnostics, TracingSink};
pub use directive::DocCompiler;
pub use option::compile_option;
pub use plugin::{
    DOCS_NAME, DirectiveData, DirectiveHandler, DocsDirective, DocsRole, HandlerContext, Plugin,
    RoleData, RoleHandler,
};
pub use reference::{ReferenceExpr, resolve_reference};
