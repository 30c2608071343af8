//! Human-readable reporting on stderr.
//!
//! Stdout carries JSON only; diagnostics, collision reports and summaries go
//! through [`Output`].

use console::{Style, Term};
use mystdoc_spec::{Collision, CollisionKind};

/// Styled stderr reporter.
pub(crate) struct Output {
    term: Term,
    error: Style,
    warning: Style,
    ok: Style,
    heading: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            error: Style::new().red(),
            warning: Style::new().yellow(),
            ok: Style::new().green(),
            heading: Style::new().cyan().bold(),
        }
    }

    /// Report a fatal or per-item error.
    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.error, msg);
    }

    /// Report compile diagnostics in the order they were produced.
    pub(crate) fn diagnostics(&self, errors: &[String]) {
        for error in errors {
            self.error(error);
        }
    }

    /// Report the outcome of a registry check.
    pub(crate) fn check_report(&self, spec_count: usize, collisions: &[Collision]) {
        self.line(&self.heading, &format!("Checked {spec_count} specs"));
        if collisions.is_empty() {
            self.line(&self.ok, "No name or alias collisions");
            return;
        }
        for collision in collisions {
            self.line(&self.warning, &describe(collision));
        }
    }

    fn line(&self, style: &Style, msg: &str) {
        // stderr may be closed; reporting is best-effort
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}

/// One-line explanation of a registry collision.
pub(crate) fn describe(collision: &Collision) -> String {
    match collision.kind {
        CollisionKind::Name => format!(
            "Duplicate spec name \"{}\": later definition is ignored",
            collision.key
        ),
        CollisionKind::Alias => format!(
            "\"{}\" is claimed by \"{}\" and \"{}\": resolves to \"{}\"",
            collision.key, collision.kept, collision.shadowed, collision.kept
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mystdoc_spec::{Registry, Spec};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_describe_alias_collision() {
        let registry = Registry::new(vec![
            Spec::new("admonition").with_aliases(["note"]),
            Spec::new("callout").with_aliases(["note"]),
        ]);

        assert_eq!(
            describe(&registry.collisions()[0]),
            "\"note\" is claimed by \"admonition\" and \"callout\": resolves to \"admonition\""
        );
    }

    #[test]
    fn test_describe_duplicate_name() {
        let registry = Registry::new(vec![Spec::new("math"), Spec::new("math")]);
        assert_eq!(
            describe(&registry.collisions()[0]),
            "Duplicate spec name \"math\": later definition is ignored"
        );
    }
}
