//! # Washer Handle
//!
//! WASM-friendly wrapper for a generated washer that can be handed to
//! JavaScript.

use washer_mesh::{MeshMeta, WasherStl};
use wasm_bindgen::prelude::*;

/// A generated washer: STL text plus its summary.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const washer = generate_washer(30, 10, 2, 128, "full", "washer");
///
/// const blob = new Blob([washer.stl()], { type: "model/stl" });
/// link.download = washer.filename();
///
/// console.log(washer.triangle_count, washer.sweep_segments);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct WasherHandle {
    stl: String,
    meta: MeshMeta,
    filename: String,
}

#[wasm_bindgen]
impl WasherHandle {
    /// Returns the number of triangles (STL facets).
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        u32::try_from(self.meta.triangle_count).unwrap_or(u32::MAX)
    }

    /// Returns the requested segment count for a full revolution.
    #[wasm_bindgen(getter)]
    pub fn segments(&self) -> u32 {
        self.meta.segments
    }

    /// Returns the number of angular steps actually swept.
    #[wasm_bindgen(getter)]
    pub fn sweep_segments(&self) -> u32 {
        self.meta.sweep_segments
    }

    /// Returns the slice mode, `"full"` or `"quarter"`.
    #[wasm_bindgen]
    pub fn slice(&self) -> String {
        self.meta.slice.to_string()
    }

    /// Returns the ASCII STL document.
    #[wasm_bindgen]
    pub fn stl(&self) -> String {
        self.stl.clone()
    }

    /// Returns the suggested download file name.
    #[wasm_bindgen]
    pub fn filename(&self) -> String {
        self.filename.clone()
    }

    /// Returns the full summary as a JSON object string with camelCase keys.
    ///
    /// # Errors
    /// Returns a JavaScript error if the summary cannot be encoded.
    #[wasm_bindgen]
    pub fn meta_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.meta).map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

impl WasherHandle {
    /// Creates a handle from a generated washer.
    pub fn from_stl(washer: WasherStl) -> Self {
        let filename = download_filename(&washer.meta);
        Self {
            stl: washer.stl,
            meta: washer.meta,
            filename,
        }
    }

    /// Returns the summary for host-side callers.
    pub fn meta(&self) -> &MeshMeta {
        &self.meta
    }
}

/// Download name encoding slice and dimensions, e.g.
/// `washer_full_od30_id10_t2.stl`.
pub fn download_filename(meta: &MeshMeta) -> String {
    format!(
        "washer_{}_od{}_id{}_t{}.stl",
        meta.slice, meta.outer_diameter, meta.inner_diameter, meta.thickness
    )
}
