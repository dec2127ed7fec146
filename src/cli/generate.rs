//! Generate command for fixture artifacts.

use crate::cli::resolve_suites;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::constants::APP_NAME;
use crate::export::{c_tests, symbols};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Generate symbols data files and C test headers from the catalog
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Output directory for symbols data files (overrides config)
    #[arg(long, value_name = "DIR")]
    pub symbols_dir: Option<PathBuf>,

    /// Output directory for C test headers (overrides config)
    #[arg(long, value_name = "DIR")]
    pub tests_dir: Option<PathBuf>,

    /// Suites to generate (repeatable; default: all configured)
    #[arg(short, long, value_name = "NAME")]
    pub suite: Vec<String>,

    /// Emit provenance comments in expected sections
    #[arg(long)]
    pub debug: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> Result<()> {
        let mut config = Config::load_or_default(&self.config)?;
        if let Some(dir) = &self.symbols_dir {
            config.output.symbols_dir.clone_from(dir);
        }
        if let Some(dir) = &self.tests_dir {
            config.output.tests_dir.clone_from(dir);
        }

        let suites = resolve_suites(&self.suite, &config)?;

        std::fs::create_dir_all(&config.output.symbols_dir).with_context(|| {
            format!(
                "Failed to create symbols directory: {}",
                config.output.symbols_dir.display()
            )
        })?;
        std::fs::create_dir_all(&config.output.tests_dir).with_context(|| {
            format!(
                "Failed to create tests directory: {}",
                config.output.tests_dir.display()
            )
        })?;

        for suite in &suites {
            let case_count = suite.cases().count();
            let symbols_path = symbols::write_suite(suite, &config.output.symbols_dir, self.debug)?;
            let tests_path = c_tests::write_suite(suite, &config.output.tests_dir)?;
            info!(
                suite = suite.name,
                cases = case_count,
                symbols = %symbols_path.display(),
                tests = %tests_path.display(),
                "generated suite"
            );
        }

        println!("{APP_NAME}: generated {} suite(s)", suites.len());
        Ok(())
    }
}
