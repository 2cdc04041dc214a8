//! The CLI can do a few things. This provides a central point where those things are routed and
//! then done, making it easier to test this crate deterministically.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use criteria_cli::{run, Command};

/// Translate URL query strings into SQL statements and document filters.
#[derive(Debug, Parser)]
#[command(name = "criteria", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    run(args.command, &mut std::io::stdout().lock())
}
