//! # Configuration Constants
//!
//! Centralized values shared across the washer pipeline. Each public item
//! documents its purpose so that downstream crates can stay declarative and
//! avoid scattering literals.
//!
//! ## Categories
//!
//! - **Tessellation**: Segment defaults and limits
//! - **STL Formatting**: Numeric output policy for ASCII STL
//! - **Output**: Default names and paths used by the CLI
//! - **Web UI**: Static server defaults

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Default number of angular segments for a full revolution.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SEGMENTS;
/// assert_eq!(DEFAULT_SEGMENTS, 128);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 128;

/// Smallest accepted segment count. A circle needs at least three points to
/// enclose any area.
///
/// # Examples
/// ```
/// use config::constants::MIN_SEGMENTS;
/// assert_eq!(MIN_SEGMENTS, 3);
/// ```
pub const MIN_SEGMENTS: u32 = 3;

/// Largest accepted segment count. A mesh holds at most
/// `8 * MAX_SEGMENTS + 4` triangles.
///
/// # Examples
/// ```
/// use config::constants::{MAX_SEGMENTS, MIN_SEGMENTS};
/// assert!(MAX_SEGMENTS > MIN_SEGMENTS);
/// ```
pub const MAX_SEGMENTS: u32 = 100_000;

/// Divisor applied to the segment count for a quarter slice.
///
/// A quarter slice sweeps `segments / QUARTER_SEGMENT_DIVISOR` steps (never
/// fewer than one).
///
/// # Examples
/// ```
/// use config::constants::QUARTER_SEGMENT_DIVISOR;
/// assert_eq!(128 / QUARTER_SEGMENT_DIVISOR, 32);
/// ```
pub const QUARTER_SEGMENT_DIVISOR: u32 = 4;

// =============================================================================
// STL FORMATTING CONSTANTS
// =============================================================================

/// Magnitude below which a coordinate or normal component is written as `0`.
///
/// Keeps floating-point noise such as `sin(π)` out of the output.
///
/// # Examples
/// ```
/// use config::constants::STL_ZERO_THRESHOLD;
/// assert!((std::f64::consts::PI.sin()).abs() < STL_ZERO_THRESHOLD);
/// ```
pub const STL_ZERO_THRESHOLD: f64 = 1e-12;

/// Number of decimal places STL numbers are rounded to before printing.
///
/// # Examples
/// ```
/// use config::constants::STL_DECIMAL_PLACES;
/// assert_eq!(format!("{:.*}", STL_DECIMAL_PLACES, 1.0), "1.00000000");
/// ```
pub const STL_DECIMAL_PLACES: usize = 8;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Solid name used when the caller supplies none.
pub const DEFAULT_SOLID_NAME: &str = "washer";

/// Output file for single-mode generation.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SINGLE_OUTPUT;
/// assert!(DEFAULT_SINGLE_OUTPUT.ends_with(".stl"));
/// ```
pub const DEFAULT_SINGLE_OUTPUT: &str = "output/washer.stl";

/// Output directory for batch-mode generation.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Fallback used when a slug collapses to an empty string.
pub const DEFAULT_SLUG: &str = "washer";

/// File extension appended to derived output names.
pub const STL_EXTENSION: &str = "stl";

// =============================================================================
// WEB UI CONSTANTS
// =============================================================================

/// Interface the static server binds to by default.
pub const DEFAULT_SERVE_HOST: &str = "127.0.0.1";

/// Port the static server listens on by default.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SERVE_PORT;
/// assert!(DEFAULT_SERVE_PORT > 1024);
/// ```
pub const DEFAULT_SERVE_PORT: u16 = 5173;

/// Entry page of the web UI, relative to the served root.
pub const WEB_ENTRY_PATH: &str = "/web/index.html";
