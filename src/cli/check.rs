//! Check command: validate the catalog against the merge engine.

use crate::cli::resolve_suites;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::fixtures::{TestCase, TestSuite};
use crate::merge::{merge, MergeMode};
use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

/// Validate catalog consistency and merge-engine invariants
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Suites to check (repeatable; default: all configured)
    #[arg(short, long, value_name = "NAME")]
    pub suite: Vec<String>,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        let config = Config::load_or_default(&self.config)?;
        let suites = resolve_suites(&self.suite, &config)?;

        let mut checks = 0_usize;
        let mut failures = Vec::new();
        for suite in &suites {
            check_suite(suite, &mut checks, &mut failures)?;
        }

        if failures.is_empty() {
            println!("OK: {checks} checks across {} suite(s)", suites.len());
            Ok(())
        } else {
            for failure in &failures {
                eprintln!("FAIL: {failure}");
            }
            bail!("{} of {} checks failed", failures.len(), checks);
        }
    }
}

fn check_suite(suite: &TestSuite, checks: &mut usize, failures: &mut Vec<String>) -> Result<()> {
    for group in &suite.groups {
        for case in group.cases() {
            let place = format!("{}/{}/{}", suite.name, group.name, case.key.xkb());
            debug!(case = %place, "checking");

            check_self_override(case, &place, checks, failures);
            check_stale_pins(case, &place, checks, failures);
            if group.name == "actions-only" {
                check_projection_commutes(case, &place, checks, failures)
                    .with_context(|| format!("Projection failed for {place}"))?;
            }
        }
    }
    Ok(())
}

/// Merging an entry with itself under Override must be the identity.
fn check_self_override(
    case: &TestCase,
    place: &str,
    checks: &mut usize,
    failures: &mut Vec<String>,
) {
    for entry in [&case.base, &case.update] {
        *checks += 1;
        if &merge(entry, entry, MergeMode::Override) != entry {
            failures.push(format!("{place}: override on self is not the identity"));
        }
    }
}

/// A pinned expectation equal to the engine's result is stale: the pin
/// exists to record a dialect divergence.
fn check_stale_pins(case: &TestCase, place: &str, checks: &mut usize, failures: &mut Vec<String>) {
    for mode in MergeMode::ALL {
        if !case.is_pinned(mode) {
            continue;
        }
        *checks += 1;
        let computed = match mode {
            MergeMode::Replace => case.update.clone(),
            mode => merge(&case.base, &case.update, mode),
        };
        if case.expected(mode) == computed {
            failures.push(format!("{place}: pinned {mode} expectation matches the engine"));
        }
    }
}

/// Projection must commute with merge for the computed modes: projecting
/// the merge result equals merging the projected inputs.
fn check_projection_commutes(
    case: &TestCase,
    place: &str,
    checks: &mut usize,
    failures: &mut Vec<String>,
) -> Result<()> {
    for keep_actions in [false, true] {
        let base = case.base.project_keysyms(keep_actions)?;
        let update = case.update.project_keysyms(keep_actions)?;
        for mode in [MergeMode::Update, MergeMode::Augment, MergeMode::Override] {
            *checks += 1;
            let merged_then_projected =
                merge(&case.base, &case.update, mode).project_keysyms(keep_actions)?;
            let projected_then_merged = merge(&base, &update, mode);
            if merged_then_projected != projected_then_merged {
                failures.push(format!(
                    "{place}: projection (keep_actions={keep_actions}) does not commute with {mode}"
                ));
            }
        }
    }
    Ok(())
}
