//! Diagnostics reported while compiling.

use std::path::{Path, PathBuf};

/// Receiver for compile errors.
///
/// Reporting is fire-and-forget: the compiler never inspects the outcome and
/// carries on with whatever it can still produce.
pub trait DiagnosticSink {
    /// Report an error message.
    fn report_error(&mut self, message: String);
}

/// Sink that collects messages in report order.
///
/// # Example
///
/// ```
/// use mystdoc_compiler::{DiagnosticSink, Diagnostics};
///
/// let mut diagnostics = Diagnostics::new().with_source("docs/directives.md");
/// diagnostics.report_error("something went wrong".to_owned());
///
/// assert_eq!(diagnostics.errors(), ["something went wrong"]);
/// assert_eq!(diagnostics.source().unwrap().to_str(), Some("docs/directives.md"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    source: Option<PathBuf>,
    errors: Vec<String>,
}

impl Diagnostics {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the document the diagnostics belong to.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Document the diagnostics belong to, if known.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Collected error messages.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume the collector, returning the messages.
    #[must_use]
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

impl DiagnosticSink for Diagnostics {
    fn report_error(&mut self, message: String) {
        self.errors.push(message);
    }
}

/// Sink that logs each error through `tracing` at warn level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report_error(&mut self, message: String) {
        tracing::warn!(%message, "Documentation compile error");
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report_error(&mut self, message: String) {
        (**self).report_error(message);
    }
}
