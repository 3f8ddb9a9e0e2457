//! # Config Crate
//!
//! Centralized configuration constants for the washer STL generator.
//! Tessellation defaults, STL number formatting thresholds, and the
//! defaults used by the command-line tool and the web UI server are all
//! defined here so the native and browser builds agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SEGMENTS, MIN_SEGMENTS, STL_ZERO_THRESHOLD};
//!
//! let requested: Option<u32> = None;
//! let segments = requested.unwrap_or(DEFAULT_SEGMENTS);
//! assert!(segments >= MIN_SEGMENTS);
//!
//! let noise: f64 = 1e-13;
//! assert!(noise.abs() < STL_ZERO_THRESHOLD);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Immutable**: Everything here is a `const`

pub mod constants;
