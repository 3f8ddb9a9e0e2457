//! # Washer Mesh
//!
//! Browser-safe washer mesh generation and ASCII STL export.
//! One implementation serves both the `washer` CLI and the WASM bindings.
//!
//! ## Pipeline
//!
//! ```text
//! RawParams/RawOptions → validate → build_washer_mesh → AsciiStl
//! ```
//!
//! A washer is an annulus extruded along Z from `z = 0` to `z = thickness`.
//! With an inner diameter of zero it degenerates to a solid disk. A quarter
//! slice keeps the first quadrant and closes the cut with two flat caps.
//!
//! ## Usage
//!
//! ```rust
//! use washer_mesh::{build_washer_stl, RawOptions, RawParams};
//!
//! let result = build_washer_stl(
//!     &RawParams::new(30.0, 10.0, 2.0),
//!     &RawOptions::default(),
//!     "washer",
//! )?;
//! assert!(result.stl.starts_with("solid washer\n"));
//! assert_eq!(result.meta.triangle_count, 1024);
//! # Ok::<(), washer_mesh::ValidationError>(())
//! ```

pub mod error;
pub mod mesh;
pub mod params;
pub mod stl;
pub mod washer;

pub use error::ValidationError;
pub use mesh::{Mesh, Point3, Triangle};
pub use params::{MeshOptions, RawOptions, RawParams, RawValue, Slice, WasherParams};
pub use stl::{format_stl_number, serialize_ascii_stl, AsciiStl};
pub use washer::{build_washer_mesh, MeshMeta, WasherMesh};

/// STL text of a generated washer plus its summary.
#[derive(Debug, Clone, PartialEq)]
pub struct WasherStl {
    pub stl: String,
    pub meta: MeshMeta,
}

/// Validates raw input, builds the mesh and serializes it.
///
/// Parameters are validated before options, and nothing is built unless
/// both pass.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn build_washer_stl(
    params: &RawParams,
    options: &RawOptions,
    name: &str,
) -> Result<WasherStl, ValidationError> {
    let params = WasherParams::validate(params)?;
    let options = MeshOptions::normalize(options)?;
    let WasherMesh { mesh, meta } = build_washer_mesh(&params, &options);
    Ok(WasherStl {
        stl: serialize_ascii_stl(name, &mesh),
        meta,
    })
}
