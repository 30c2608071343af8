//! `mystdoc reference` command implementation.

use clap::Args;

use super::GlobalArgs;
use crate::error::CliError;

/// Arguments for the reference command.
#[derive(Args)]
pub(crate) struct ReferenceArgs {
    /// Reference body, e.g. `figure.width` or `the width <figure.width>`.
    #[arg(value_name = "TEXT")]
    text: String,
}

impl ReferenceArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let session = global.session()?;
        let node = mystdoc_compiler::resolve_reference(&self.text, &session.registry);
        session.write_json(&serde_json::to_value(&node)?)
    }
}
