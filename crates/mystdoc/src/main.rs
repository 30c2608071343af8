//! mystdoc CLI - directive documentation compiler.
//!
//! Provides commands for:
//! - `directive`: Compile documentation trees for directives, as JSON
//! - `reference`: Resolve a directive reference into a cross-reference node
//! - `list`: List registered directives and their aliases
//! - `check`: Report name and alias collisions in the registry

mod commands;
mod error;
mod output;
mod sources;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, DirectiveArgs, GlobalArgs, ListArgs, ReferenceArgs};
use output::Output;

/// mystdoc - Directive documentation compiler.
#[derive(Parser)]
#[command(name = "mystdoc", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile documentation for directives and print it as JSON.
    Directive(DirectiveArgs),
    /// Resolve a directive reference and print the node as JSON.
    Reference(ReferenceArgs),
    /// List registered directives.
    List(ListArgs),
    /// Check the registry for name and alias collisions.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Directive(args) => args.execute(&cli.global),
        Commands::Reference(args) => args.execute(&cli.global),
        Commands::List(args) => args.execute(&cli.global),
        Commands::Check(args) => args.execute(&cli.global),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
