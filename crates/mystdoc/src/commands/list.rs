//! `mystdoc list` command implementation.

use std::io::Write;

use clap::Args;
use mystdoc_spec::{Registry, Spec};

use super::GlobalArgs;
use crate::error::CliError;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Print names only, without aliases.
    #[arg(long)]
    names_only: bool,
}

impl ListArgs {
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let session = global.session()?;
        let mut stdout = std::io::stdout().lock();
        for line in lines(&session.registry, self.names_only) {
            writeln!(stdout, "{line}")?;
        }
        Ok(())
    }
}

fn lines(registry: &Registry, names_only: bool) -> Vec<String> {
    registry
        .specs()
        .iter()
        .map(|spec| if names_only { spec.name.clone() } else { describe(spec) })
        .collect()
}

fn describe(spec: &Spec) -> String {
    if spec.aliases.is_empty() {
        spec.name.clone()
    } else {
        format!("{} (alias: {})", spec.name, spec.aliases.join(", "))
    }
}
