//! # Validation Errors
//!
//! The single error type of the washer pipeline. Every failure is detected
//! while validating inputs, before any triangle is constructed.

use thiserror::Error;

/// Errors raised while validating washer parameters or mesh options.
///
/// The `Display` text is the user-facing message; it always names the
/// offending field.
///
/// ## Example
///
/// ```rust
/// use washer_mesh::{RawParams, ValidationError, WasherParams};
///
/// let raw = RawParams::new(10.0, 10.0, 2.0);
/// let err = WasherParams::validate(&raw).unwrap_err();
/// assert_eq!(err, ValidationError::OuterNotGreaterThanInner);
/// assert_eq!(err.to_string(), "outerDiameter must be greater than innerDiameter.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value is missing, non-numeric, NaN or infinite.
    #[error("{field} must be a finite number.")]
    NotFinite { field: &'static str },

    /// Outer diameter is zero or negative.
    #[error("outerDiameter must be > 0.")]
    OuterDiameterNotPositive,

    /// Inner diameter is negative.
    #[error("innerDiameter must be >= 0.")]
    InnerDiameterNegative,

    /// Thickness is zero or negative.
    #[error("thickness must be > 0.")]
    ThicknessNotPositive,

    /// The washer would have no material between the two diameters.
    #[error("outerDiameter must be greater than innerDiameter.")]
    OuterNotGreaterThanInner,

    /// Segment count below the polygon minimum.
    #[error("segments must be >= {minimum}.")]
    TooFewSegments { minimum: u32 },

    /// Segment count above the supported maximum.
    #[error("segments must be <= {maximum}.")]
    TooManySegments { maximum: u32 },

    /// Slice mode other than `full` or `quarter`.
    #[error("slice must be \"full\" or \"quarter\".")]
    UnknownSlice { value: String },
}

impl ValidationError {
    /// Name of the field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotFinite { field } => field,
            Self::OuterDiameterNotPositive | Self::OuterNotGreaterThanInner => "outerDiameter",
            Self::InnerDiameterNegative => "innerDiameter",
            Self::ThicknessNotPositive => "thickness",
            Self::TooFewSegments { .. } | Self::TooManySegments { .. } => "segments",
            Self::UnknownSlice { .. } => "slice",
        }
    }
}
