//! `mystdoc check` command implementation.

use clap::Args;

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Report collisions without failing.
    #[arg(long)]
    warn_only: bool,
}

impl CheckArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let session = global.session()?;
        let collisions = session.registry.collisions();

        output.check_report(session.registry.len(), collisions);
        if collisions.is_empty() || self.warn_only {
            return Ok(());
        }
        Err(CliError::Validation(format!(
            "{} name/alias collision(s) found",
            collisions.len()
        )))
    }
}
