//! `mystdoc directive` command implementation.

use clap::Args;
use mystdoc_compiler::{Diagnostics, DocCompiler};
use mystdoc_spec::Registry;
use mystdoc_tree::Node;
use rayon::prelude::*;

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the directive command.
#[derive(Args)]
pub(crate) struct DirectiveArgs {
    /// Directive names to document (exact names, not aliases).
    #[arg(required = true, value_name = "NAME")]
    names: Vec<String>,
}

impl DirectiveArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let session = global.session()?;

        let (sections, errors) = compile_all(&session.registry, &self.names);
        output.diagnostics(&errors);

        session.write_json(&serde_json::to_value(&sections)?)?;

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CliError::Validation(format!(
                "{} of {} directives could not be documented",
                errors.len(),
                self.names.len()
            )))
        }
    }
}

/// Compile every name in parallel; sections and diagnostics keep input order.
fn compile_all(registry: &Registry, names: &[String]) -> (Vec<Vec<Node>>, Vec<String>) {
    let compiler = DocCompiler::new(registry);

    let results: Vec<(Vec<Node>, Diagnostics)> = names
        .par_iter()
        .map(|name| {
            let mut diagnostics = Diagnostics::new();
            let section = compiler.compile_directive(name, &mut diagnostics);
            (section, diagnostics)
        })
        .collect();

    let mut sections = Vec::with_capacity(results.len());
    let mut errors = Vec::new();
    for (section, diagnostics) in results {
        sections.push(section);
        errors.extend(diagnostics.into_errors());
    }
    (sections, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mystdoc_spec::builtin_specs;
    use pretty_assertions::assert_eq;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|&name| name.to_owned()).collect()
    }

    #[test]
    fn test_compile_all_keeps_input_order() {
        let registry = Registry::new(builtin_specs().unwrap());
        let (sections, errors) = compile_all(&registry, &names(&["math", "figure", "mermaid"]));

        assert!(errors.is_empty());
        let ids: Vec<_> = sections.iter().map(|s| s[0].identifier().unwrap()).collect();
        assert_eq!(ids, vec!["directive-math", "directive-figure", "directive-mermaid"]);
    }

    #[test]
    fn test_compile_all_reports_unknown_in_order() {
        let registry = Registry::new(builtin_specs().unwrap());
        let (sections, errors) = compile_all(&registry, &names(&["zzz", "figure", "aaa"]));

        assert_eq!(sections.len(), 3);
        assert!(sections[0].is_empty());
        assert!(!sections[1].is_empty());
        assert_eq!(
            errors,
            vec![
                "myst:directive: Unknown myst directive \"zzz\"",
                "myst:directive: Unknown myst directive \"aaa\"",
            ]
        );
    }

    #[test]
    fn test_sections_serialize_with_type_tags() {
        let registry = Registry::new(builtin_specs().unwrap());
        let (sections, _) = compile_all(&registry, &names(&["mermaid"]));

        let json = serde_json::to_value(&sections).unwrap();
        assert_eq!(json[0][0]["type"], "heading");
        assert_eq!(json[0][0]["attributes"]["identifier"], "directive-mermaid");
        assert_eq!(json[0][0]["children"][1], " directive");
    }
}
