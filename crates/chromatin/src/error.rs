#![forbid(unsafe_code)]

//! Chromatin error model and sentinel fallbacks.
//!
//! # Design Principles
//!
//! 1. **Typed errors at the edges**: the `try_*` helpers return [`Result`] so
//!    library callers can match on what went wrong.
//! 2. **Total operations in the render path**: UI code uses the
//!    sentinel-returning engines, never these errors.
//! 3. **One mapping between the two**: every error variant maps to the
//!    [`Fallback`] sentinel the total API would have produced, via
//!    [`Error::fallback`].

use std::fmt;

use chromatin_core::Element;
use chromatin_style::{ColorError, RampError};

// ── Domain-Specific Error Types ─────────────────────────────────────────

/// Hover geometry errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// An element has no layout (unmounted or hidden).
    MissingElement(Element),
}

// ── Unified Error ───────────────────────────────────────────────────────

/// Top-level error type for Chromatin.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Color parsing or blending failure.
    Color(ColorError),
    /// Luminance requested for something that is not a color.
    Luminance(ColorError),
    /// Contrast requested with a side that is not a color.
    Contrast(ColorError),
    /// Ramp creation failure.
    Ramp(RampError),
    /// Hover geometry failure.
    Geometry(GeometryError),
}

/// Standard result type for Chromatin APIs.
pub type Result<T> = std::result::Result<T, Error>;

// ── Sentinel fallbacks ──────────────────────────────────────────────────

/// The value the total API substitutes for a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fallback {
    /// The invalid-color sentinel (zero channels, zero alpha, empty strings).
    InvalidColor,
    /// The input, returned unchanged.
    Unchanged,
    /// Luminance `0`.
    ZeroLuminance,
    /// Contrast ratio `-1`.
    NotComputable,
    /// No hover polygon.
    UnsetPolygon,
}

impl Error {
    /// The sentinel the total API returns for this error.
    pub fn fallback(&self) -> Fallback {
        match self {
            Self::Color(ColorError::FactorOutOfRange(_)) => Fallback::Unchanged,
            Self::Color(_) => Fallback::InvalidColor,
            Self::Luminance(_) => Fallback::ZeroLuminance,
            Self::Contrast(_) => Fallback::NotComputable,
            Self::Ramp(RampError::InvalidBase(_)) => Fallback::InvalidColor,
            Self::Geometry(GeometryError::MissingElement(_)) => Fallback::UnsetPolygon,
        }
    }

    /// Error type label for tracing fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Color(_) => "color",
            Self::Luminance(_) => "luminance",
            Self::Contrast(_) => "contrast",
            Self::Ramp(_) => "ramp",
            Self::Geometry(_) => "geometry",
        }
    }

    /// Whether the error is an expected state rather than misuse.
    ///
    /// A missing element is routine (a flyout that is closed); everything
    /// else is a caller passing bad style input.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Geometry(GeometryError::MissingElement(_)))
    }
}

// ── Display ─────────────────────────────────────────────────────────────

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement(element) => write!(f, "{element:?} element has no layout"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(err) => write!(f, "{err}"),
            Self::Luminance(err) => write!(f, "relative luminance not computable: {err}"),
            Self::Contrast(err) => write!(f, "contrast ratio not computable: {err}"),
            Self::Ramp(err) => write!(f, "{err}"),
            Self::Geometry(err) => write!(f, "{err}"),
        }
    }
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor => write!(f, "invalid_color"),
            Self::Unchanged => write!(f, "unchanged"),
            Self::ZeroLuminance => write!(f, "zero_luminance"),
            Self::NotComputable => write!(f, "not_computable"),
            Self::UnsetPolygon => write!(f, "unset_polygon"),
        }
    }
}

// ── std::error::Error ───────────────────────────────────────────────────

impl std::error::Error for GeometryError {}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Color(err) | Self::Luminance(err) | Self::Contrast(err) => Some(err),
            Self::Ramp(err) => Some(err),
            Self::Geometry(err) => Some(err),
        }
    }
}

// ── From conversions ────────────────────────────────────────────────────

impl From<ColorError> for Error {
    fn from(err: ColorError) -> Self {
        Self::Color(err)
    }
}

impl From<RampError> for Error {
    fn from(err: RampError) -> Self {
        Self::Ramp(err)
    }
}

impl From<GeometryError> for Error {
    fn from(err: GeometryError) -> Self {
        Self::Geometry(err)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────
