//! # Washer CLI
//!
//! Library half of the `washer` binary: argument definitions, single and
//! batch generation, the permutation writer, and the static server for the
//! web UI. `main.rs` only parses arguments, installs logging and reports
//! errors.

pub mod batch;
pub mod cli;
pub mod generate;
pub mod permutations;
pub mod serve;
pub mod slug;

use anyhow::Context;

use cli::{Cli, Command, GenerateJob};

/// Runs one parsed command, printing its report on stdout.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Generate(args) => match args.into_job() {
            GenerateJob::Single(job) => {
                let report = generate::run_single(&job)?;
                println!("{report}");
            }
            GenerateJob::Batch(job) => {
                let report = generate::run_batch(&job)?;
                println!("{report}");
            }
        },
        Command::Serve(args) => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("Failed to start async runtime")?;
            runtime.block_on(serve::serve(args.into()))?;
        }
        Command::Permutations(args) => {
            let report = permutations::write_permutation_files(&args.out_dir)?;
            println!("{report}");
        }
    }
    Ok(())
}
