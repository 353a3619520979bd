//! Reading lead tables and writing result rows.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use narrative_core::ResultRow;
use serde_json::Value;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Export file name for a run started at `now`
pub fn default_output_name(now: DateTime<Utc>) -> String {
    format!("lead_scripts_{}.json", now.format("%Y%m%d_%H%M"))
}

/// Where to write results: `None` means stdout.
///
/// A directory gets a timestamped file name inside it.
pub fn resolve_output_path(output: Option<&Path>, now: DateTime<Utc>) -> Option<PathBuf> {
    let output = output?;
    if output == Path::new("-") {
        return None;
    }
    if output.is_dir() {
        return Some(output.join(default_output_name(now)));
    }
    Some(output.to_path_buf())
}

/// Read a JSON table from a file, or stdin for `None` / `-`
pub fn read_table(input: Option<&Path>) -> Result<Value> {
    let raw = match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read lead table from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("Lead table is not valid JSON")
}

/// Write result rows as a pretty-printed JSON array
pub fn write_rows(rows: &[ResultRow], output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(rows)?;

    match output {
        Some(path) => fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    Ok(())
}
