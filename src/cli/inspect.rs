//! Inspect command: dump the resolved catalog.

use crate::cli::resolve_suites;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::fixtures::{GroupItem, TestSuite};
use crate::merge::MergeMode;
use anyhow::Result;
use clap::Args;
use serde_json::json;
use std::path::PathBuf;

/// Dump the resolved catalog, expected results included
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Suites to inspect (repeatable; default: all configured)
    #[arg(short, long, value_name = "NAME")]
    pub suite: Vec<String>,

    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        let config = Config::load_or_default(&self.config)?;
        let suites = resolve_suites(&self.suite, &config)?;

        if self.json {
            let value: Vec<_> = suites.iter().map(suite_json).collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            for suite in &suites {
                print_suite(suite);
            }
        }
        Ok(())
    }
}

fn print_suite(suite: &TestSuite) {
    println!("suite {} (suffix {:?})", suite.name, suite.suffix);
    for group in &suite.groups {
        println!("  group {} ({} cases)", group.name, group.cases().count());
        for item in &group.items {
            match item {
                GroupItem::Comment(text) => println!("    # {text}"),
                GroupItem::Case(case) => {
                    println!("    key {}", case.key.xkb_name());
                    println!("      base:     {}", case.base.xkb());
                    println!("      update:   {}", case.update.xkb());
                    for mode in MergeMode::ALL {
                        let marker = if case.is_pinned(mode) { " (pinned)" } else { "" };
                        println!(
                            "      {:<9} {}{}",
                            format!("{mode}:"),
                            case.expected(mode).xkb(),
                            marker
                        );
                    }
                }
            }
        }
    }
}

fn suite_json(suite: &TestSuite) -> serde_json::Value {
    json!({
        "name": suite.name,
        "suffix": suite.suffix,
        "groups": suite.groups.iter().map(|group| json!({
            "name": group.name,
            "cases": group.cases().map(|case| json!({
                "key": {
                    "c": case.key.c_name(),
                    "xkb": case.key.xkb_name(),
                },
                "base": &case.base,
                "update": &case.update,
                "expected": MergeMode::ALL.iter().map(|&mode| {
                    (mode.name().to_string(), json!({
                        "entry": case.expected(mode),
                        "pinned": case.is_pinned(mode),
                    }))
                }).collect::<serde_json::Map<_, _>>(),
            })).collect::<Vec<_>>(),
        })).collect::<Vec<_>>(),
    })
}
