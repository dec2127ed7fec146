//! Symforge - merge-mode test fixture generator for XKB symbols databases.
//!
//! Generates symbols data files and matching C test assertions from a
//! catalog of merge scenarios, with the merge engine as the oracle for
//! expected results.

use anyhow::Result;
use clap::{Parser, Subcommand};
use symforge::cli::{CheckArgs, GenerateArgs, InspectArgs};
use symforge::constants::APP_BINARY_NAME;
use tracing_subscriber::EnvFilter;

/// Merge-mode test fixture generator for XKB symbols databases
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate symbols data files and C test headers
    Generate(GenerateArgs),
    /// Validate the catalog against the merge engine
    Check(CheckArgs),
    /// Dump the resolved catalog
    Inspect(InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Generate(args) => args.execute(),
        Command::Check(args) => args.execute(),
        Command::Inspect(args) => args.execute(),
    }
}

/// Initializes the log subscriber; `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
