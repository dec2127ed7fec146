//! CLI command handlers.
//!
//! Each subcommand is an `Args` struct with an `execute` method, giving
//! scriptable access to generation, catalog validation, and inspection
//! for automation and CI.

pub mod check;
pub mod generate;
pub mod inspect;

// Re-export types used by main.rs and tests
pub use check::CheckArgs;
pub use generate::GenerateArgs;
pub use inspect::InspectArgs;

use crate::config::Config;
use crate::fixtures::catalog;
use crate::fixtures::TestSuite;
use anyhow::{bail, Context, Result};

/// Resolves the suites named on the command line, falling back to the
/// configured defaults when none were given.
pub(crate) fn resolve_suites(names: &[String], config: &Config) -> Result<Vec<TestSuite>> {
    let names = if names.is_empty() {
        &config.suites.enabled
    } else {
        names
    };
    let mut suites = Vec::with_capacity(names.len());
    for name in names {
        let suite = catalog::suite_by_name(name)
            .with_context(|| format!("Failed to build suite '{name}'"))?;
        match suite {
            Some(suite) => suites.push(suite),
            None => bail!("Unknown suite '{name}'. Known suites: common, x11, xkbcommon"),
        }
    }
    Ok(suites)
}
