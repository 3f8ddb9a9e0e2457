//! Tests for the WASM-facing helpers.

use super::*;
use washer_mesh::Slice;

/// Confirms the internal helper produces the default washer.
#[test]
fn generate_default_washer() {
    let washer = generate_washer_internal(
        &RawParams::new(30.0, 10.0, 2.0),
        &RawOptions::default(),
        "washer",
    )
    .expect("valid washer");

    assert_eq!(washer.triangle_count(), 1024);
    assert_eq!(washer.segments(), 128);
    assert_eq!(washer.sweep_segments(), 128);
    assert_eq!(washer.slice(), "full");
    assert!(washer.stl().starts_with("solid washer\n"));
    assert!(washer.stl().ends_with("\nendsolid washer"));
}

/// Form values arrive as strings.
#[test]
fn generate_from_form_strings() {
    let washer = generate_washer_internal(
        &RawParams::new("20", "0", "5"),
        &RawOptions::new("12", Some("quarter")),
        "",
    )
    .expect("valid disk");

    assert_eq!(washer.triangle_count(), 16);
    assert_eq!(washer.meta().slice, Slice::Quarter);
    assert_eq!(washer.filename(), "washer_quarter_od20_id0_t5.stl");
}

/// Ensures invalid input surfaces the validation message.
#[test]
fn generate_rejects_invalid_input() {
    let err = generate_washer_internal(
        &RawParams::new(10.0, 10.0, 1.0),
        &RawOptions::default(),
        "washer",
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "outerDiameter must be greater than innerDiameter."
    );
}

#[test]
fn filename_keeps_fractional_dimensions() {
    let washer = generate_washer_internal(
        &RawParams::new(12.5, 6.2, 1.6),
        &RawOptions::new(16u32, None),
        "washer",
    )
    .expect("valid washer");
    assert_eq!(washer.filename(), "washer_full_od12.5_id6.2_t1.6.stl");
}

#[test]
fn meta_json_uses_camel_case() {
    let washer = generate_washer_internal(
        &RawParams::new(8.0, 4.0, 1.0),
        &RawOptions::new(8u32, Some("full")),
        "washer",
    )
    .expect("valid washer");
    let json = washer.meta_json().expect("encodable");
    assert!(json.contains("\"triangleCount\":64"));
    assert!(json.contains("\"outerRadius\":4.0"));
}
