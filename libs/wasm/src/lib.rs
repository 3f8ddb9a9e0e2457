//! WASM-facing entry points for the washer generator.
//!
//! This crate is compiled to a `cdylib` and consumed from `web/main.js` via
//! `wasm-bindgen`, so the browser runs the exact mesh builder the CLI uses.
//! Native tests interact with [`generate_washer_internal`] to avoid
//! depending on a JS host.
//!
//! ```
//! use washer_mesh::{RawOptions, RawParams};
//!
//! let washer = washer_wasm::generate_washer_internal(
//!     &RawParams::new(30.0, 10.0, 2.0),
//!     &RawOptions::default(),
//!     "washer",
//! )
//! .unwrap();
//! assert_eq!(washer.filename(), "washer_full_od30_id10_t2.stl");
//! ```

use config::constants::DEFAULT_SEGMENTS;
use washer_mesh::{build_washer_stl, RawOptions, RawParams, RawValue, ValidationError};
use wasm_bindgen::prelude::*;

mod handle;

pub use handle::{download_filename, WasherHandle};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "./pkg/washer_wasm.js";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the default segment count, used to prefill the form.
///
/// # Examples
/// ```
/// assert_eq!(washer_wasm::default_segments(), 128);
/// ```
#[wasm_bindgen]
pub fn default_segments() -> u32 {
    DEFAULT_SEGMENTS
}

/// Generates a washer from raw form values.
///
/// Each value may be a number, a numeric string, or `undefined`/`null`
/// (which selects the default for `segments` and `slice`).
///
/// # Errors
/// Returns the validation message as a JavaScript string; the page shows
/// it in its status element.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try {
/// //   const washer = generate_washer(outer.value, inner.value, thickness.value,
/// //                                  segments.value, slice.value, "washer");
/// //   download(washer.filename(), washer.stl());
/// // } catch (message) {
/// //   status.textContent = message;
/// // }
/// ```
#[wasm_bindgen]
pub fn generate_washer(
    outer_diameter: JsValue,
    inner_diameter: JsValue,
    thickness: JsValue,
    segments: JsValue,
    slice: Option<String>,
    name: Option<String>,
) -> Result<WasherHandle, JsValue> {
    let params = RawParams::new(
        raw_value(&outer_diameter),
        raw_value(&inner_diameter),
        raw_value(&thickness),
    );
    let options = RawOptions {
        segments: raw_value(&segments),
        slice: slice.filter(|value| !value.is_empty()),
    };
    generate_washer_internal(&params, &options, name.as_deref().unwrap_or_default())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper that returns Rust errors directly.
pub fn generate_washer_internal(
    params: &RawParams,
    options: &RawOptions,
    name: &str,
) -> Result<WasherHandle, ValidationError> {
    build_washer_stl(params, options, name).map(WasherHandle::from_stl)
}

fn raw_value(value: &JsValue) -> RawValue {
    if let Some(number) = value.as_f64() {
        RawValue::Number(number)
    } else if let Some(text) = value.as_string() {
        RawValue::Text(text)
    } else if let Some(flag) = value.as_bool() {
        RawValue::Bool(flag)
    } else {
        RawValue::Missing
    }
}

#[cfg(test)]
mod tests;
