//! # Permutations
//!
//! Writes the standard batch files covering common washer sizes:
//! every thickness in [`THICKNESSES_MM`], inner diameters from 2 to 10 mm,
//! and outer diameters from `inner + 2` to `2 * inner + 2`. A second file
//! repeats each entry with the inner diameter widened by each of
//! [`TOLERANCES_MM`] for printed-part clearance.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Serialize, Serializer};

pub const THICKNESSES_MM: [f64; 6] = [0.5, 1.0, 2.0, 3.0, 4.0, 5.0];
pub const INNER_DIAMETER_RANGE_MM: std::ops::RangeInclusive<u32> = 2..=10;
pub const TOLERANCES_MM: [f64; 1] = [0.2];

pub const PERMUTATIONS_FILE: &str = "batch.permutations.json";
pub const TOLERANCE_PERMUTATIONS_FILE: &str = "batch.permutations.tolerance.json";

/// One entry of a generated batch file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermutationItem {
    pub name: String,
    #[serde(serialize_with = "plain_number")]
    pub inner_diameter: f64,
    #[serde(serialize_with = "plain_number")]
    pub outer_diameter: f64,
    #[serde(serialize_with = "plain_number")]
    pub thickness: f64,
    pub output: String,
}

/// Whole millimeters serialize as integers (`2`, not `2.0`).
fn plain_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Path token for a number: the first `.` becomes `p` (`0.2` → `0p2`).
fn path_token(value: f64) -> String {
    value.to_string().replacen('.', "p", 1)
}

/// Nominal sizes, ordered by thickness, then inner, then outer diameter.
pub fn build_permutations() -> Vec<PermutationItem> {
    let mut items = Vec::new();
    for thickness in THICKNESSES_MM {
        for inner in INNER_DIAMETER_RANGE_MM {
            for outer in inner + 2..=2 * inner + 2 {
                let name = format!("washer_thickness_{thickness}_inner_{inner}_outer_{outer}");
                items.push(PermutationItem {
                    output: format!("nominal/{name}.stl"),
                    name,
                    inner_diameter: f64::from(inner),
                    outer_diameter: f64::from(outer),
                    thickness,
                });
            }
        }
    }
    items
}

/// Each base item once per tolerance, with the inner diameter widened.
pub fn build_tolerance_permutations(base: &[PermutationItem]) -> Vec<PermutationItem> {
    base.iter()
        .flat_map(|item| {
            TOLERANCES_MM.iter().map(move |&tolerance| {
                let token = path_token(tolerance);
                let name = format!("{}_tolerance_{token}", item.name);
                PermutationItem {
                    output: format!("tolerance_{token}/{name}.stl"),
                    name,
                    inner_diameter: item.inner_diameter + tolerance,
                    ..item.clone()
                }
            })
        })
        .collect()
}

/// Files written by [`write_permutation_files`].
#[derive(Debug, Clone)]
pub struct PermutationReport {
    pub base_path: PathBuf,
    pub base_count: usize,
    pub tolerance_path: PathBuf,
    pub tolerance_count: usize,
}

impl fmt::Display for PermutationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Wrote {} permutations to {}",
            self.base_count,
            self.base_path.display()
        )?;
        write!(
            f,
            "Wrote {} tolerance permutations to {}",
            self.tolerance_count,
            self.tolerance_path.display()
        )
    }
}

/// Writes both batch files into `out_dir`, creating it if needed.
///
/// # Errors
///
/// Fails if the directory or either file cannot be written.
pub fn write_permutation_files(out_dir: &Path) -> anyhow::Result<PermutationReport> {
    let base = build_permutations();
    let tolerance = build_tolerance_permutations(&base);

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let base_path = out_dir.join(PERMUTATIONS_FILE);
    write_json(&base_path, &base)?;
    let tolerance_path = out_dir.join(TOLERANCE_PERMUTATIONS_FILE);
    write_json(&tolerance_path, &tolerance)?;

    Ok(PermutationReport {
        base_path,
        base_count: base.len(),
        tolerance_path,
        tolerance_count: tolerance.len(),
    })
}

fn write_json(path: &Path, items: &[PermutationItem]) -> anyhow::Result<()> {
    let mut text = serde_json::to_string_pretty(items)?;
    text.push('\n');
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), count = items.len(), "wrote batch file");
    Ok(())
}
