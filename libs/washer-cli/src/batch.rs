//! # Batch Input
//!
//! Parsing of the JSON batch file: an array of washer objects.
//!
//! ```json
//! [
//!   { "name": "M6", "outerDiameter": 12, "innerDiameter": 6.4, "thickness": 1.6 },
//!   { "outerDiameter": "20", "innerDiameter": 0, "thickness": 2, "slice": "quarter",
//!     "segments": 64, "output": "disks/quarter.stl" }
//! ]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context};
use serde::Deserialize;
use serde_json::Value;
use washer_mesh::{RawParams, RawValue};

/// One washer entry of a batch file. Omitted fields fall back to the
/// command-line defaults.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub params: RawParams,
    #[serde(default)]
    pub segments: RawValue,
    #[serde(default)]
    pub slice: Option<String>,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Parses batch file contents. `source` only appears in error messages.
///
/// # Errors
///
/// Fails on invalid JSON, a non-array or empty document, and entries that
/// are not objects or have fields of the wrong shape.
pub fn parse_batch(text: &str, source: &Path) -> anyhow::Result<Vec<BatchItem>> {
    let document: Value = serde_json::from_str(text)
        .map_err(|_| anyhow!("Invalid JSON in {}", source.display()))?;

    let Value::Array(entries) = document else {
        bail!("Batch input must be a JSON array of washer objects.");
    };
    if entries.is_empty() {
        bail!("Batch input array is empty.");
    }

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            if !entry.is_object() {
                bail!("Batch item at index {index} must be an object.");
            }
            serde_json::from_value(entry).with_context(|| format!("Batch item at index {index}"))
        })
        .collect()
}
