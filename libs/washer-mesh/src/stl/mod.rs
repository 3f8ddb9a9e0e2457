//! # ASCII STL Serialization
//!
//! Writes a [`Mesh`] as a textual STL solid:
//!
//! ```text
//! solid washer
//!   facet normal 0 0 1
//!     outer loop
//!       vertex 15 0 2
//!       vertex ...
//!     endloop
//!   endfacet
//! endsolid washer
//! ```
//!
//! Numbers never use exponent notation and are rounded to eight decimals.

use std::fmt;

use config::constants::{DEFAULT_SOLID_NAME, STL_DECIMAL_PLACES, STL_ZERO_THRESHOLD};
use glam::DVec3;

use crate::mesh::Mesh;

/// A single STL number, formatted on display.
///
/// - `|value| < 1e-12` prints `0`
/// - otherwise the value is rounded to 8 decimals and printed in its
///   shortest form, without trailing zeros or a trailing decimal point
///
/// # Example
///
/// ```rust
/// use washer_mesh::stl::StlNumber;
///
/// assert_eq!(StlNumber(1.0).to_string(), "1");
/// assert_eq!(StlNumber(0.00000000001).to_string(), "0");
/// assert_eq!(StlNumber(1.23456789123).to_string(), "1.23456789");
/// assert_eq!(StlNumber(-2.5).to_string(), "-2.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StlNumber(pub f64);

impl fmt::Display for StlNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.abs() < STL_ZERO_THRESHOLD {
            return f.write_str("0");
        }
        let fixed = format!("{:.*}", STL_DECIMAL_PLACES, value);
        match fixed.parse::<f64>() {
            // Covers values that round to -0.
            Ok(rounded) if rounded == 0.0 => f.write_str("0"),
            // f64's Display is the shortest round-trip form and never uses an exponent.
            Ok(rounded) => write!(f, "{rounded}"),
            Err(_) => f.write_str(&fixed),
        }
    }
}

/// Formats one number with the STL number policy.
pub fn format_stl_number(value: f64) -> String {
    StlNumber(value).to_string()
}

/// Derives the solid name written after `solid` / `endsolid`.
///
/// Each run of whitespace becomes one underscore; an empty name falls back
/// to `washer`.
///
/// # Example
///
/// ```rust
/// use washer_mesh::stl::solid_name;
///
/// assert_eq!(solid_name("M8  flat washer"), "M8_flat_washer");
/// assert_eq!(solid_name(""), "washer");
/// ```
pub fn solid_name(name: &str) -> String {
    if name.is_empty() {
        return DEFAULT_SOLID_NAME.to_string();
    }
    let mut result = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                result.push('_');
            }
            in_whitespace = true;
        } else {
            result.push(ch);
            in_whitespace = false;
        }
    }
    result
}

/// Display adapter that renders a mesh as an ASCII STL document.
///
/// Lines are separated by `\n`; there is no trailing newline.
///
/// # Example
///
/// ```rust
/// use washer_mesh::stl::AsciiStl;
/// use washer_mesh::Mesh;
///
/// let text = AsciiStl::new("empty part", &Mesh::new()).to_string();
/// assert_eq!(text, "solid empty_part\nendsolid empty_part");
/// ```
#[derive(Debug, Clone)]
pub struct AsciiStl<'a> {
    name: String,
    mesh: &'a Mesh,
}

impl<'a> AsciiStl<'a> {
    pub fn new(name: &str, mesh: &'a Mesh) -> Self {
        Self {
            name: solid_name(name),
            mesh,
        }
    }

    /// The sanitized solid name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for AsciiStl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "solid {}", self.name)?;
        for triangle in self.mesh.triangles() {
            write!(f, "\n  facet normal {}", Triple(triangle.normal()))?;
            f.write_str("\n    outer loop")?;
            for vertex in triangle.vertices() {
                write!(f, "\n      vertex {}", Triple(*vertex))?;
            }
            f.write_str("\n    endloop")?;
            f.write_str("\n  endfacet")?;
        }
        write!(f, "\nendsolid {}", self.name)
    }
}

struct Triple(DVec3);

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        write!(f, "{} {} {}", StlNumber(v.x), StlNumber(v.y), StlNumber(v.z))
    }
}

/// Serializes `mesh` to ASCII STL text under the solid `name`.
pub fn serialize_ascii_stl(name: &str, mesh: &Mesh) -> String {
    AsciiStl::new(name, mesh).to_string()
}
