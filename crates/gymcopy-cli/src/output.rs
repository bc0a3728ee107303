use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

/// Serializes `value` as two-space indented JSON.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
}

/// Writes `value` to `path`, or prints it to stdout when no path is given.
pub fn emit_json<T: Serialize>(value: &T, path: Option<&Path>, label: &str) -> Result<()> {
    let json = to_pretty_json(value)?;

    match path {
        Some(path) => {
            fs::write(path, json + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} to {:?}", label, path);
            println!("{} {} saved to {}", "✅".green(), label, path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Prints a failure line to stdout. Callers exit with status 1 afterwards.
pub fn report_failure(err: &anyhow::Error) {
    println!("{} {:#}", "❌ Error:".red(), err);
}
