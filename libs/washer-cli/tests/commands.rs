//! End-to-end command runs through the same entry point as the binary.

use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;
use washer_cli::{cli::Cli, run};

fn run_args(args: &[&str]) -> anyhow::Result<()> {
    run(Cli::try_parse_from(std::iter::once("washer").chain(args.iter().copied()))?)
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

#[test]
fn generate_single_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out/quarter.stl");

    run_args(&[
        "generate",
        "--outer",
        "20",
        "--inner",
        "0",
        "--thickness",
        "5",
        "--segments",
        "12",
        "--slice",
        "QUARTER",
        "--name",
        "quarter disk",
        "--output",
        path_arg(&output),
    ])
    .unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("solid quarter_disk\n"));
    assert_eq!(text.matches("endfacet").count(), 16);
}

#[test]
fn generate_single_rejects_bad_segments() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("bad.stl");

    let err = run_args(&[
        "generate",
        "--outer",
        "20",
        "--inner",
        "5",
        "--thickness",
        "2",
        "--segments",
        "2",
        "--output",
        path_arg(&output),
    ])
    .unwrap_err();

    assert_eq!(format!("{err:#}"), "segments must be >= 3.");
    assert!(!output.exists());
}

#[test]
fn generate_batch_then_permutations_round_trip() {
    let dir = TempDir::new().unwrap();
    let batches = dir.path().join("batches");
    run_args(&["permutations", "--out-dir", path_arg(&batches)]).unwrap();

    // Keep the run small: generate only the first three nominal entries.
    let all: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(batches.join("batch.permutations.json")).unwrap())
            .unwrap();
    let input = dir.path().join("small.json");
    fs::write(&input, serde_json::to_string(&all[..3]).unwrap()).unwrap();

    let output_dir = dir.path().join("stl");
    run_args(&[
        "generate",
        "--input",
        path_arg(&input),
        "--output-dir",
        path_arg(&output_dir),
        "--segments",
        "8",
    ])
    .unwrap();

    for outer in 4..=6 {
        let file = output_dir.join(format!(
            "nominal/washer_thickness_0.5_inner_2_outer_{outer}.stl"
        ));
        assert_eq!(
            fs::read_to_string(&file).unwrap().matches("endfacet").count(),
            64
        );
    }
}

#[test]
fn generate_batch_reports_item_index() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("batch.json");
    fs::write(
        &input,
        r#"[{"outerDiameter": 10, "innerDiameter": 2, "thickness": 1, "slice": "half"}]"#,
    )
    .unwrap();

    let err = run_args(&["generate", "--input", path_arg(&input)]).unwrap_err();

    assert_eq!(
        format!("{err:#}"),
        r#"Batch item at index 0: slice must be "full" or "quarter"."#
    );
}
