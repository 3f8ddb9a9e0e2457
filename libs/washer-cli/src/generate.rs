//! # Generate
//!
//! Single and batch STL generation.
//!
//! A batch is built completely before anything is written: every item is
//! validated, meshed and serialized (in parallel), and the first failing
//! index aborts the run with no files created.

use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use config::constants::STL_EXTENSION;
use rayon::prelude::*;
use washer_mesh::{build_washer_stl, MeshMeta, RawOptions, RawParams, RawValue, WasherStl};

use crate::batch::{parse_batch, BatchItem};
use crate::slug::slugify;

// =============================================================================
// JOBS
// =============================================================================

/// A single washer to generate.
#[derive(Debug, Clone)]
pub struct SingleJob {
    pub params: RawParams,
    pub options: RawOptions,
    pub name: String,
    pub output: PathBuf,
}

/// A batch file to generate into an output directory.
#[derive(Debug, Clone)]
pub struct BatchJob {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub defaults: BatchDefaults,
}

/// Command-line values used where a batch item leaves a field out.
#[derive(Debug, Clone, Default)]
pub struct BatchDefaults {
    pub segments: RawValue,
    pub slice: Option<String>,
    pub name: Option<String>,
}

// =============================================================================
// REPORTS
// =============================================================================

/// One written STL file.
#[derive(Debug, Clone)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub meta: MeshMeta,
}

/// Outcome of a single-mode run.
#[derive(Debug, Clone)]
pub struct SingleReport {
    pub file: WrittenFile,
}

impl fmt::Display for SingleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let WrittenFile { path, meta } = &self.file;
        writeln!(f, "STL generated successfully.")?;
        writeln!(f, "Path: {}", path.display())?;
        writeln!(
            f,
            "Params (mm): outer={}, inner={}, thickness={}",
            meta.outer_diameter, meta.inner_diameter, meta.thickness
        )?;
        writeln!(f, "Slice: {}", meta.slice)?;
        writeln!(f, "Segments: {}", meta.segments)?;
        write!(f, "Triangles: {}", meta.triangle_count)
    }
}

/// Outcome of a batch run.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub output_dir: PathBuf,
    pub files: Vec<WrittenFile>,
}

impl BatchReport {
    pub fn total_triangles(&self) -> usize {
        self.files.iter().map(|file| file.meta.triangle_count).sum()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.files.len();
        for (index, WrittenFile { path, meta }) in self.files.iter().enumerate() {
            writeln!(
                f,
                "[{}/{total}] {} | outer={} inner={} thickness={} | slice={} | segments={} | triangles={}",
                index + 1,
                path.display(),
                meta.outer_diameter,
                meta.inner_diameter,
                meta.thickness,
                meta.slice,
                meta.segments,
                meta.triangle_count
            )?;
        }
        writeln!(f, "Batch complete. Generated {total} file(s).")?;
        writeln!(f, "Output directory: {}", self.output_dir.display())?;
        write!(f, "Total triangles: {}", self.total_triangles())
    }
}

// =============================================================================
// SINGLE MODE
// =============================================================================

/// Builds one washer and writes it to `job.output`.
///
/// # Errors
///
/// Fails on invalid parameters or when the file cannot be written.
pub fn run_single(job: &SingleJob) -> anyhow::Result<SingleReport> {
    let washer = build_washer_stl(&job.params, &job.options, &job.name)?;
    write_stl(&job.output, &washer.stl)?;
    Ok(SingleReport {
        file: WrittenFile {
            path: job.output.clone(),
            meta: washer.meta,
        },
    })
}

// =============================================================================
// BATCH MODE
// =============================================================================

/// A batch item that has been built but not yet written.
#[derive(Debug, Clone)]
struct PlannedFile {
    path: PathBuf,
    washer: WasherStl,
}

/// Reads the batch file, builds every item, then writes them in order.
///
/// # Errors
///
/// Fails if the batch file cannot be read or parsed, if any item is
/// invalid (reporting the lowest failing index), or on write errors.
pub fn run_batch(job: &BatchJob) -> anyhow::Result<BatchReport> {
    let text = fs::read_to_string(&job.input)
        .with_context(|| format!("Failed to read {}", job.input.display()))?;
    let items = parse_batch(&text, &job.input)?;
    tracing::debug!(count = items.len(), input = %job.input.display(), "parsed batch");

    let planned = items
        .par_iter()
        .enumerate()
        .map(|(index, item)| plan_item(index, item, job))
        .collect::<Vec<_>>()
        .into_iter()
        .collect::<anyhow::Result<Vec<_>>>()?;

    fs::create_dir_all(&job.output_dir)
        .with_context(|| format!("Failed to create {}", job.output_dir.display()))?;

    let mut files = Vec::with_capacity(planned.len());
    for PlannedFile { path, washer } in planned {
        write_stl(&path, &washer.stl)?;
        files.push(WrittenFile {
            path,
            meta: washer.meta,
        });
    }

    Ok(BatchReport {
        output_dir: job.output_dir.clone(),
        files,
    })
}

/// Resolves an item's name, options and output path, then builds it.
fn plan_item(index: usize, item: &BatchItem, job: &BatchJob) -> anyhow::Result<PlannedFile> {
    let defaults = &job.defaults;
    let name = non_empty(&item.name)
        .or_else(|| non_empty(&defaults.name))
        .map_or_else(|| format!("washer_{}", index + 1), str::to_string);

    let options = RawOptions {
        segments: if item.segments.is_missing() {
            defaults.segments.clone()
        } else {
            item.segments.clone()
        },
        slice: non_empty(&item.slice)
            .or_else(|| non_empty(&defaults.slice))
            .map(str::to_string),
    };

    let file = item
        .output
        .as_deref()
        .map(relative_output)
        .filter(|output| !output.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(format!("{}.{STL_EXTENSION}", slugify(&name))));

    let washer = build_washer_stl(&item.params, &options, &name)
        .with_context(|| format!("Batch item at index {index}"))?;

    Ok(PlannedFile {
        path: job.output_dir.join(file),
        washer,
    })
}

/// Drops root and drive prefixes so an item's `output` always lands under
/// the batch output directory (`/tmp/x.stl` becomes `tmp/x.stl`).
fn relative_output(output: &Path) -> PathBuf {
    output
        .components()
        .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_)))
        .collect()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

// =============================================================================
// OUTPUT
// =============================================================================

/// Writes STL text, creating parent directories first.
fn write_stl(path: &Path, stl: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, stl).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = stl.len(), "wrote STL");
    Ok(())
}

#[cfg(test)]
mod tests;
