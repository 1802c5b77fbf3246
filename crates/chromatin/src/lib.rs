#![forbid(unsafe_code)]

//! Chromatin public facade crate.
//!
//! Re-exports the color and hover-intent engines and offers `try_*` helpers
//! that surface failures as [`Error`] instead of sentinels, for callers
//! outside the render path.

pub mod error;

// --- Core re-exports -------------------------------------------------------

pub use chromatin_core::{
    BuildProfile, Diagnostics, EdgeTrigger, Element, HoverEdge, HoverIntent, HoverOverlay,
    HoverPolygon, IntentConfig, IntentEvent, IntentState, OverlayHandle, Point, Quadrant, Rect,
    RecordingDiagnostics, Segment, SilentDiagnostics, TracingDiagnostics, compute_hover_polygon,
    point_in_polygon,
};

// --- Style re-exports ------------------------------------------------------

pub use chromatin_style::{
    Blend, CONTRAST_NOT_COMPUTABLE, Color, ColorEngine, ColorError, ColorInput, ColorRamp,
    ParsedColor, RAMP_KEYS, RampError, RampOptions, ThemeMode, TypeScale, contrast_ratio,
    font_size_in_rem, hex_to_rgb_array, relative_luminance,
};

pub use error::{Error, Fallback, GeometryError, Result};

// --- Checked helpers -------------------------------------------------------

/// Parse a hex color.
pub fn try_color(hex: &str) -> Result<Color> {
    Ok(Color::from_hex(hex)?)
}

/// Build a ramp, reporting any per-step problems through `diagnostics`.
pub fn try_color_ramp(
    base: &str,
    options: &RampOptions,
    diagnostics: &dyn Diagnostics,
) -> Result<ColorRamp> {
    Ok(ColorRamp::from_hex(base, options, diagnostics)?)
}

/// Tint or shade a color given in any accepted form.
pub fn try_tint_or_shade<'a>(
    input: impl Into<ColorInput<'a>>,
    blend: Blend,
    factor: f64,
) -> Result<Color> {
    Ok(input.into().resolve()?.tint_or_shade(blend, factor)?)
}

/// WCAG relative luminance of a color given in any accepted form.
pub fn try_relative_luminance<'a>(input: impl Into<ColorInput<'a>>) -> Result<f64> {
    let color = input.into().resolve().map_err(Error::Luminance)?;
    Ok(relative_luminance(color))
}

/// Contrast ratio between two colors given in any accepted form.
pub fn try_contrast_ratio<'a, 'b>(
    a: impl Into<ColorInput<'a>>,
    b: impl Into<ColorInput<'b>>,
) -> Result<f64> {
    let a = a.into().resolve().map_err(Error::Contrast)?;
    let b = b.into().resolve().map_err(Error::Contrast)?;
    Ok(contrast_ratio(a, b))
}

/// Hover polygon corners, or which element is missing.
pub fn try_hover_polygon(anchor: Option<Rect>, target: Option<Rect>) -> Result<[Point; 4]> {
    let missing = if anchor.is_none() {
        Element::Anchor
    } else {
        Element::Target
    };
    compute_hover_polygon(anchor, target)
        .points()
        .copied()
        .ok_or_else(|| GeometryError::MissingElement(missing).into())
}

pub mod prelude {
    pub use crate::{
        Color, ColorEngine, ColorRamp, Element, Error, HoverEdge, HoverIntent, IntentConfig,
        IntentEvent, ParsedColor, Point, RampOptions, Rect, Result, ThemeMode,
    };

    pub use crate::{core, style};
}

pub use chromatin_core as core;
pub use chromatin_style as style;
