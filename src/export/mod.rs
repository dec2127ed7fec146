//! Renderers for the generated artifacts.
//!
//! Both renderers are deterministic string builders: the same catalog in
//! yields byte-identical files out, so regeneration never churns version
//! control.

pub mod symbols;

use anyhow::{Context, Result};
use std::path::Path;

/// Performs an atomic file write using the temp file + rename pattern, so
/// the target is never left half-written.
pub(crate) fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("tmp");

    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}
