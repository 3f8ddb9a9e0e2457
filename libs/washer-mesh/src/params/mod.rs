//! # Washer Parameters
//!
//! Raw caller input, coercion to numbers, and the validated records the
//! mesh builder consumes.
//!
//! ```text
//! RawParams  --validate-->  WasherParams
//! RawOptions --normalize--> MeshOptions
//! ```

use std::fmt;
use std::str::FromStr;

use config::constants::{DEFAULT_SEGMENTS, MAX_SEGMENTS, MIN_SEGMENTS, QUARTER_SEGMENT_DIVISOR};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// RAW INPUT
// =============================================================================

/// An unvalidated value as supplied by a form field, a CLI flag or a JSON
/// batch file.
///
/// Deserializes from any JSON scalar; `null` maps to [`RawValue::Missing`].
///
/// # Example
///
/// ```rust
/// use washer_mesh::RawValue;
///
/// assert_eq!(RawValue::from(" 12.5 ").to_number(), 12.5);
/// assert_eq!(RawValue::from("").to_number(), 0.0);
/// assert!(RawValue::from("abc").to_number().is_nan());
/// assert!(RawValue::Missing.to_number().is_nan());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Bool(bool),
    Text(String),
    #[default]
    Missing,
}

impl RawValue {
    /// Returns true if no value was supplied.
    pub fn is_missing(&self) -> bool {
        matches!(self, RawValue::Missing)
    }

    /// Coerces the value to a float.
    ///
    /// Text is trimmed; empty text is zero and unparsable text is NaN.
    /// Booleans are 1 or 0. A missing value is NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            RawValue::Number(value) => *value,
            RawValue::Bool(flag) => {
                if *flag {
                    1.0
                } else {
                    0.0
                }
            }
            RawValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
            RawValue::Missing => f64::NAN,
        }
    }

    fn to_finite(&self, field: &'static str) -> Result<f64, ValidationError> {
        let value = self.to_number();
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ValidationError::NotFinite { field })
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Missing, Into::into)
    }
}

/// Unvalidated washer dimensions.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawParams {
    #[serde(default)]
    pub outer_diameter: RawValue,
    #[serde(default)]
    pub inner_diameter: RawValue,
    #[serde(default)]
    pub thickness: RawValue,
}

impl RawParams {
    /// Builds raw params from anything convertible to [`RawValue`].
    pub fn new(
        outer_diameter: impl Into<RawValue>,
        inner_diameter: impl Into<RawValue>,
        thickness: impl Into<RawValue>,
    ) -> Self {
        Self {
            outer_diameter: outer_diameter.into(),
            inner_diameter: inner_diameter.into(),
            thickness: thickness.into(),
        }
    }
}

/// Unvalidated tessellation options. Missing values take their defaults.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawOptions {
    #[serde(default)]
    pub segments: RawValue,
    #[serde(default)]
    pub slice: Option<String>,
}

impl RawOptions {
    /// Builds raw options from optional segments and slice values.
    pub fn new(segments: impl Into<RawValue>, slice: Option<&str>) -> Self {
        Self {
            segments: segments.into(),
            slice: slice.map(str::to_string),
        }
    }
}

// =============================================================================
// VALIDATED PARAMETERS
// =============================================================================

/// Physical washer dimensions in millimeters.
///
/// Only obtainable through [`WasherParams::validate`] or
/// [`WasherParams::new`], so every instance satisfies
/// `outer_diameter > inner_diameter >= 0` and `thickness > 0`.
///
/// # Example
///
/// ```rust
/// use washer_mesh::WasherParams;
///
/// let params = WasherParams::new(30.0, 10.0, 2.0).unwrap();
/// assert_eq!(params.outer_radius(), 15.0);
/// assert!(!params.is_solid_disk());
///
/// assert!(WasherParams::new(30.0, -1.0, 2.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WasherParams {
    outer_diameter: f64,
    inner_diameter: f64,
    thickness: f64,
}

impl WasherParams {
    /// Validates plain numeric dimensions.
    pub fn new(
        outer_diameter: f64,
        inner_diameter: f64,
        thickness: f64,
    ) -> Result<Self, ValidationError> {
        Self::validate(&RawParams::new(outer_diameter, inner_diameter, thickness))
    }

    /// Coerces and validates raw dimensions.
    ///
    /// All three values are checked for finiteness before any range check.
    pub fn validate(raw: &RawParams) -> Result<Self, ValidationError> {
        let outer_diameter = raw.outer_diameter.to_finite("outerDiameter")?;
        let inner_diameter = raw.inner_diameter.to_finite("innerDiameter")?;
        let thickness = raw.thickness.to_finite("thickness")?;

        if outer_diameter <= 0.0 {
            return Err(ValidationError::OuterDiameterNotPositive);
        }
        if inner_diameter < 0.0 {
            return Err(ValidationError::InnerDiameterNegative);
        }
        if thickness <= 0.0 {
            return Err(ValidationError::ThicknessNotPositive);
        }
        if outer_diameter <= inner_diameter {
            return Err(ValidationError::OuterNotGreaterThanInner);
        }

        Ok(Self {
            outer_diameter,
            inner_diameter,
            thickness,
        })
    }

    #[inline]
    pub fn outer_diameter(&self) -> f64 {
        self.outer_diameter
    }

    #[inline]
    pub fn inner_diameter(&self) -> f64 {
        self.inner_diameter
    }

    #[inline]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    #[inline]
    pub fn outer_radius(&self) -> f64 {
        self.outer_diameter / 2.0
    }

    #[inline]
    pub fn inner_radius(&self) -> f64 {
        self.inner_diameter / 2.0
    }

    /// True when there is no hole, i.e. the washer degenerates to a disk.
    #[inline]
    pub fn is_solid_disk(&self) -> bool {
        self.inner_radius() <= 0.0
    }
}

// =============================================================================
// MESH OPTIONS
// =============================================================================

/// Angular extent of the generated solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slice {
    /// Complete revolution.
    #[default]
    Full,
    /// One quadrant (`0..π/2`) closed by two flat end caps.
    Quarter,
}

impl Slice {
    pub const ALL: [Slice; 2] = [Slice::Full, Slice::Quarter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Slice::Full => "full",
            Slice::Quarter => "quarter",
        }
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slice {
    type Err = ValidationError;

    /// Parses a slice name case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lowered = value.to_lowercase();
        Slice::ALL
            .into_iter()
            .find(|slice| slice.as_str() == lowered)
            .ok_or(ValidationError::UnknownSlice {
                value: value.to_string(),
            })
    }
}

/// Normalized tessellation options.
///
/// # Example
///
/// ```rust
/// use washer_mesh::{MeshOptions, RawOptions, RawValue, Slice};
///
/// let options = MeshOptions::normalize(&RawOptions::default()).unwrap();
/// assert_eq!(options.segments, 128);
/// assert_eq!(options.slice, Slice::Full);
///
/// let options = MeshOptions::normalize(&RawOptions::new(12.9, Some("QUARTER"))).unwrap();
/// assert_eq!(options.segments, 12);
/// assert_eq!(options.slice, Slice::Quarter);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshOptions {
    pub segments: u32,
    pub slice: Slice,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            slice: Slice::Full,
        }
    }
}

impl MeshOptions {
    /// Applies defaults, floors `segments` and parses `slice`.
    ///
    /// A non-finite `segments` is reported first, then an unknown `slice`,
    /// then a segment count outside `MIN_SEGMENTS..=MAX_SEGMENTS`.
    pub fn normalize(raw: &RawOptions) -> Result<Self, ValidationError> {
        let segments = if raw.segments.is_missing() {
            f64::from(DEFAULT_SEGMENTS)
        } else {
            raw.segments.to_finite("segments")?.floor()
        };
        let slice = match raw.slice.as_deref() {
            Some(value) => value.parse()?,
            None => Slice::Full,
        };

        if segments < f64::from(MIN_SEGMENTS) {
            return Err(ValidationError::TooFewSegments {
                minimum: MIN_SEGMENTS,
            });
        }
        if segments > f64::from(MAX_SEGMENTS) {
            return Err(ValidationError::TooManySegments {
                maximum: MAX_SEGMENTS,
            });
        }

        Ok(Self {
            // In range, so the cast is exact.
            segments: segments as u32,
            slice,
        })
    }

    /// Number of angular steps actually swept for the configured slice.
    pub fn sweep_segments(&self) -> u32 {
        match self.slice {
            Slice::Full => self.segments,
            Slice::Quarter => (self.segments / QUARTER_SEGMENT_DIVISOR).max(1),
        }
    }
}
