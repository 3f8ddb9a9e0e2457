//! Tests for single and batch generation.

use super::*;
use tempfile::TempDir;

fn batch_job(dir: &TempDir, json: &str) -> BatchJob {
    let input = dir.path().join("batch.json");
    fs::write(&input, json).unwrap();
    BatchJob {
        input,
        output_dir: dir.path().join("out"),
        defaults: BatchDefaults::default(),
    }
}

fn facet_count(path: &Path) -> usize {
    fs::read_to_string(path).unwrap().matches("endfacet").count()
}

// =============================================================================
// SINGLE MODE
// =============================================================================

#[test]
fn test_single_writes_nested_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("a/b/washer.stl");
    let job = SingleJob {
        params: RawParams::new("30", "10", "2"),
        options: RawOptions::default(),
        name: "washer".to_string(),
        output: output.clone(),
    };

    let report = run_single(&job).unwrap();

    assert_eq!(report.file.meta.triangle_count, 1024);
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("solid washer\n"));
    assert!(text.ends_with("\nendsolid washer"));
}

#[test]
fn test_single_report_lines() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("q.stl");
    let job = SingleJob {
        params: RawParams::new(20.0, 0.0, 5.0),
        options: RawOptions::new(12u32, Some("quarter")),
        name: "disk".to_string(),
        output: output.clone(),
    };

    let report = run_single(&job).unwrap().to_string();

    assert!(report.starts_with("STL generated successfully.\n"));
    assert!(report.contains(&format!("Path: {}", output.display())));
    assert!(report.contains("Params (mm): outer=20, inner=0, thickness=5"));
    assert!(report.contains("Slice: quarter"));
    assert!(report.contains("Segments: 12"));
    assert!(report.ends_with("Triangles: 16"));
}

#[test]
fn test_single_invalid_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("bad.stl");
    let job = SingleJob {
        params: RawParams::new(10.0, 10.0, 1.0),
        options: RawOptions::default(),
        name: "washer".to_string(),
        output: output.clone(),
    };

    let err = run_single(&job).unwrap_err();

    assert_eq!(
        format!("{err:#}"),
        "outerDiameter must be greater than innerDiameter."
    );
    assert!(!output.exists());
}

// =============================================================================
// BATCH MODE
// =============================================================================

#[test]
fn test_batch_names_files_by_slug() {
    let dir = TempDir::new().unwrap();
    let job = batch_job(
        &dir,
        r#"[
            {"name": "M6 Washer", "outerDiameter": 12, "innerDiameter": 6.4, "thickness": 1.6, "segments": 16},
            {"name": "Big Disk!", "outerDiameter": 40, "innerDiameter": 0, "thickness": 3, "segments": 8}
        ]"#,
    );

    let report = run_batch(&job).unwrap();

    assert_eq!(report.files.len(), 2);
    let first = job.output_dir.join("m6-washer.stl");
    let second = job.output_dir.join("big-disk.stl");
    assert_eq!(report.files[0].path, first);
    assert_eq!(report.files[1].path, second);
    assert_eq!(facet_count(&first), 128);
    assert_eq!(facet_count(&second), 32);
    assert!(fs::read_to_string(&first)
        .unwrap()
        .starts_with("solid M6_Washer\n"));
    assert_eq!(report.total_triangles(), 160);
}

#[test]
fn test_batch_applies_defaults() {
    let dir = TempDir::new().unwrap();
    let mut job = batch_job(
        &dir,
        r#"[
            {"outerDiameter": 20, "innerDiameter": 0, "thickness": 5},
            {"outerDiameter": 20, "innerDiameter": 0, "thickness": 5, "slice": "full", "segments": 4}
        ]"#,
    );
    job.defaults = BatchDefaults {
        segments: RawValue::from("12"),
        slice: Some("quarter".to_string()),
        name: None,
    };

    let report = run_batch(&job).unwrap();

    assert_eq!(report.files[0].path, job.output_dir.join("washer_1.stl"));
    assert_eq!(report.files[0].meta.sweep_segments, 3);
    assert_eq!(report.files[0].meta.triangle_count, 16);
    assert_eq!(report.files[1].path, job.output_dir.join("washer_2.stl"));
    assert_eq!(report.files[1].meta.triangle_count, 16);
}

#[test]
fn test_batch_global_name_fallback() {
    let dir = TempDir::new().unwrap();
    let mut job = batch_job(
        &dir,
        r#"[{"outerDiameter": 8, "innerDiameter": 2, "thickness": 1, "segments": 3}]"#,
    );
    job.defaults.name = Some("Spacer".to_string());

    let report = run_batch(&job).unwrap();

    assert_eq!(report.files[0].path, job.output_dir.join("spacer.stl"));
}

#[test]
fn test_batch_explicit_output_creates_directories() {
    let dir = TempDir::new().unwrap();
    let job = batch_job(
        &dir,
        r#"[{"outerDiameter": 8, "innerDiameter": 2, "thickness": 1, "segments": 3,
             "output": "nominal/deep/custom.stl"}]"#,
    );

    let report = run_batch(&job).unwrap();

    let expected = job.output_dir.join("nominal/deep/custom.stl");
    assert_eq!(report.files[0].path, expected);
    assert_eq!(facet_count(&expected), 24);
}

#[test]
fn test_batch_absolute_output_stays_under_output_dir() {
    let dir = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    let absolute = elsewhere.path().join("escaped.stl");
    let item = serde_json::json!([{
        "outerDiameter": 8, "innerDiameter": 2, "thickness": 1, "segments": 3,
        "output": absolute,
    }]);
    let job = batch_job(&dir, &item.to_string());

    let report = run_batch(&job).unwrap();

    let written = &report.files[0].path;
    assert!(written.starts_with(&job.output_dir), "{}", written.display());
    assert!(written.ends_with("escaped.stl"));
    assert_eq!(facet_count(written), 24);
    assert!(!absolute.exists());
}

#[test]
fn test_relative_output_strips_root() {
    assert_eq!(
        relative_output(Path::new("/tmp/deep/x.stl")),
        PathBuf::from("tmp/deep/x.stl")
    );
    assert_eq!(relative_output(Path::new("a/b.stl")), PathBuf::from("a/b.stl"));
    assert_eq!(relative_output(Path::new("/")), PathBuf::new());
}

#[test]
fn test_batch_failure_reports_lowest_index_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let job = batch_job(
        &dir,
        r#"[
            {"name": "ok", "outerDiameter": 8, "innerDiameter": 2, "thickness": 1},
            {"name": "thin", "outerDiameter": 8, "innerDiameter": 2, "thickness": 0},
            {"name": "inverted", "outerDiameter": 2, "innerDiameter": 8, "thickness": 1}
        ]"#,
    );

    let err = run_batch(&job).unwrap_err();

    assert_eq!(
        format!("{err:#}"),
        "Batch item at index 1: thickness must be > 0."
    );
    assert!(!job.output_dir.exists());
}

#[test]
fn test_batch_missing_dimension() {
    let dir = TempDir::new().unwrap();
    let job = batch_job(&dir, r#"[{"innerDiameter": 2, "thickness": 1}]"#);

    let err = run_batch(&job).unwrap_err();

    assert_eq!(
        format!("{err:#}"),
        "Batch item at index 0: outerDiameter must be a finite number."
    );
}

#[test]
fn test_batch_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let job = BatchJob {
        input: dir.path().join("absent.json"),
        output_dir: dir.path().join("out"),
        defaults: BatchDefaults::default(),
    };

    let err = run_batch(&job).unwrap_err();

    assert!(err.to_string().starts_with("Failed to read"));
}

#[test]
fn test_batch_report_lines() {
    let dir = TempDir::new().unwrap();
    let job = batch_job(
        &dir,
        r#"[{"name": "a", "outerDiameter": 8, "innerDiameter": 2, "thickness": 1, "segments": 3}]"#,
    );

    let report = run_batch(&job).unwrap().to_string();
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("[1/1] "));
    assert!(lines[0].ends_with(
        "a.stl | outer=8 inner=2 thickness=1 | slice=full | segments=3 | triangles=24"
    ));
    assert_eq!(lines[1], "Batch complete. Generated 1 file(s).");
    assert_eq!(lines[3], "Total triangles: 24");
}
