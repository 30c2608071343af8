//! Directive and role specifications.
//!
//! This crate provides the declarative metadata consumed by the documentation
//! compilers, and the registry they look specifications up in:
//!
//! - [`Spec`]: a directive or role with its argument, body, and named options
//! - [`OptionSpec`] and [`OptionType`]: the typed shape of a single option
//! - [`Registry`]: specifications indexed by name and by alias
//! - [`SpecSource`]: lookup trait implemented by [`Registry`]
//!
//! Specifications are loaded from YAML with [`load_specs`] or
//! [`load_spec_file`]; a small built-in set is available via [`builtin_specs`].
//!
//! ## Type tags
//!
//! Option types accept both the lowercase name (`string`) and the class-like
//! marker (`String`). Both normalize to the same [`OptionType`] variant when
//! the spec is loaded, so nothing downstream inspects raw tags.
//!
//! # Example
//!
//! ```
//! use mystdoc_spec::{Registry, SpecSource, load_specs};
//!
//! let specs = load_specs(r#"
//! - name: admonition
//!   alias: [note]
//!   arg: { type: String, required: true }
//! "#).unwrap();
//!
//! let registry = Registry::new(specs);
//! assert!(registry.get("note").is_none());
//! assert_eq!(registry.get_by_name_or_alias("note").unwrap().name, "admonition");
//! ```

mod builtin;
mod load;
mod option;
mod registry;
mod spec;

pub use builtin::builtin_specs;
pub use load::{SpecError, load_spec_file, load_specs};
pub use option::{OptionMap, OptionSpec, OptionType};
pub use registry::{Collision, CollisionKind, Registry, SpecSource};
pub use spec::Spec;
