//! Output writer: serialize a value as JSON to stdout or a file.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::Result;

#[cfg(test)]
mod tests;

/// Path value meaning "write to stdout".
pub const STDOUT_SENTINEL: &str = "-";

/// Serialize `data` as compact JSON and write it to `target`.
///
/// `None` (or the `-` sentinel) prints the JSON as one line to stdout.
/// A real path gets the JSON as the full file contents, with parent
/// directories created first, followed by a confirmation line reporting
/// the number of top-level elements written.
pub fn write_output(data: &Value, target: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string(data)?;

    match target {
        Some(path) if path.as_os_str() != STDOUT_SENTINEL => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &text)?;
            println!("Wrote {} to {}", count_label(data), path.display());
        }
        _ => println!("{}", text),
    }

    Ok(())
}

/// Top-level element count for the confirmation line.
///
/// Objects and arrays report their length; anything else reports the
/// placeholder `object`.
pub fn count_label(data: &Value) -> String {
    match data {
        Value::Object(map) => map.len().to_string(),
        Value::Array(items) => items.len().to_string(),
        _ => "object".to_string(),
    }
}
