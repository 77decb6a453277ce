//! Run Export
//!
//! Writes a completed run to disk as pretty-printed JSON and reloads
//! previously exported runs for re-inspection without re-simulating.

use std::fs;
use std::path::Path;

use lingua_report::SimulationExport;

use crate::error::Result;

/// Write an export document to `path`, creating parent directories.
pub fn write_export(export: &SimulationExport, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(export)?;
    fs::write(path, json)?;
    Ok(())
}

/// Reload a previously exported run.
pub fn read_export(path: impl AsRef<Path>) -> Result<SimulationExport> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
