//! # Command Line
//!
//! `clap` definitions for the `washer` binary and their conversion into
//! jobs. Numeric flags are kept as text so that validation messages come
//! from the mesh library rather than from the argument parser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use config::constants::{
    DEFAULT_OUTPUT_DIR, DEFAULT_SERVE_HOST, DEFAULT_SERVE_PORT, DEFAULT_SINGLE_OUTPUT,
    DEFAULT_SOLID_NAME,
};
use washer_mesh::{RawOptions, RawParams, RawValue};

use crate::generate::{BatchDefaults, BatchJob, SingleJob};
use crate::serve::ServeConfig;

/// Generate washer STL files.
#[derive(Parser, Debug)]
#[command(name = "washer", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one washer, or a batch from a JSON file with --input.
    Generate(GenerateArgs),

    /// Serve the web UI from a local directory.
    Serve(ServeArgs),

    /// Write the standard batch permutation files.
    Permutations(PermutationArgs),
}

impl Command {
    /// Log filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Command::Serve(_) => "washer_cli=info,tower_http=info",
            Command::Generate(_) | Command::Permutations(_) => "warn",
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Outer diameter in mm.
    #[arg(long, value_name = "MM", required_unless_present = "input")]
    pub outer: Option<String>,

    /// Inner diameter in mm (0 for a solid disk).
    #[arg(long, value_name = "MM", required_unless_present = "input")]
    pub inner: Option<String>,

    /// Thickness in mm.
    #[arg(long, value_name = "MM", required_unless_present = "input")]
    pub thickness: Option<String>,

    /// Segments for a full revolution [default: 128].
    #[arg(long, value_name = "N")]
    pub segments: Option<String>,

    /// Slice mode: full or quarter [default: full].
    #[arg(long, value_name = "MODE")]
    pub slice: Option<String>,

    /// Output STL path for a single washer.
    #[arg(long, value_name = "PATH", conflicts_with = "input")]
    pub output: Option<PathBuf>,

    /// Solid name (single mode) or fallback item name (batch mode).
    #[arg(long, value_name = "TEXT")]
    pub name: Option<String>,

    /// JSON batch file; selects batch mode.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output directory for batch files.
    #[arg(long, value_name = "DIR", requires = "input")]
    pub output_dir: Option<PathBuf>,
}

/// What `generate` was asked to do.
#[derive(Debug)]
pub enum GenerateJob {
    Single(SingleJob),
    Batch(BatchJob),
}

impl GenerateArgs {
    pub fn into_job(self) -> GenerateJob {
        let name = self.name.filter(|name| !name.is_empty());
        let slice = self.slice.filter(|slice| !slice.is_empty());

        match self.input {
            Some(input) => GenerateJob::Batch(BatchJob {
                input,
                output_dir: self
                    .output_dir
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
                defaults: BatchDefaults {
                    segments: RawValue::from(self.segments),
                    slice,
                    name,
                },
            }),
            None => GenerateJob::Single(SingleJob {
                params: RawParams::new(self.outer, self.inner, self.thickness),
                options: RawOptions {
                    segments: RawValue::from(self.segments),
                    slice,
                },
                name: name.unwrap_or_else(|| DEFAULT_SOLID_NAME.to_string()),
                output: self
                    .output
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_SINGLE_OUTPUT)),
            }),
        }
    }
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Interface to bind.
    #[arg(long, default_value = DEFAULT_SERVE_HOST)]
    pub host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = DEFAULT_SERVE_PORT)]
    pub port: u16,

    /// Directory to serve; must contain web/index.html.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

impl From<ServeArgs> for ServeConfig {
    fn from(args: ServeArgs) -> Self {
        ServeConfig {
            host: args.host,
            port: args.port,
            root: args.root,
        }
    }
}

#[derive(Args, Debug)]
pub struct PermutationArgs {
    /// Directory that receives the batch files.
    #[arg(long, value_name = "DIR", default_value = "examples-batch")]
    pub out_dir: PathBuf,
}
