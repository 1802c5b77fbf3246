#![forbid(unsafe_code)]

//! Total color operations for UI code.
//!
//! A render must never fail because of a bad style value, so every method on
//! [`ColorEngine`] returns a documented sentinel instead of an error and
//! reports the problem to the engine's [`Diagnostics`] sink:
//!
//! | Operation | Sentinel on bad input |
//! |-----------|------------------------|
//! | [`hex_to_color`](ColorEngine::hex_to_color) | [`ParsedColor::Invalid`] |
//! | [`tint_or_shade`](ColorEngine::tint_or_shade) | input unchanged |
//! | [`create_color_ramp`](ColorEngine::create_color_ramp) | `Err(RampError)` |
//! | [`relative_luminance`](ColorEngine::relative_luminance) | `0.0` |
//! | [`contrast_ratio`](ColorEngine::contrast_ratio) | `-1.0` |
//!
//! The typed functions in [`crate::color`] are the non-total counterparts.

use chromatin_core::{BuildProfile, Diagnostics, TracingDiagnostics, diagnostics_for};

use crate::color::{self, Blend, ColorInput, ParsedColor};
use crate::ramp::{ColorRamp, RampError, RampOptions};
use crate::typography::TypeScale;

/// Returned by [`ColorEngine::contrast_ratio`] when a ratio cannot be computed.
pub const CONTRAST_NOT_COMPUTABLE: f64 = -1.0;

/// Color operations bound to a diagnostics sink.
#[derive(Debug, Clone, Default)]
pub struct ColorEngine<D = TracingDiagnostics> {
    diagnostics: D,
}

impl ColorEngine<TracingDiagnostics> {
    /// Engine that logs diagnostics through `tracing`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            diagnostics: TracingDiagnostics,
        }
    }
}

impl ColorEngine<Box<dyn Diagnostics>> {
    /// Engine whose diagnostics follow the build profile.
    #[must_use]
    pub fn for_profile(profile: BuildProfile) -> Self {
        Self {
            diagnostics: diagnostics_for(profile),
        }
    }
}

impl<D: Diagnostics> ColorEngine<D> {
    /// Engine reporting to a caller-supplied sink.
    #[must_use]
    pub const fn with_diagnostics(diagnostics: D) -> Self {
        Self { diagnostics }
    }

    #[must_use]
    pub const fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Parse `#rgb` / `#rrggbb`.
    pub fn hex_to_color(&self, hex: &str) -> ParsedColor {
        match color::Color::from_hex(hex) {
            Ok(color) => ParsedColor::Valid(color),
            Err(err) => {
                self.diagnostics.warn(&err.to_string());
                ParsedColor::Invalid
            }
        }
    }

    /// Tint or shade a color.
    ///
    /// An out-of-range factor returns the input unchanged (as a
    /// [`ParsedColor`], whatever form it arrived in).
    pub fn tint_or_shade<'a>(
        &self,
        input: impl Into<ColorInput<'a>>,
        blend: Blend,
        factor: f64,
    ) -> ParsedColor {
        let color = match input.into().resolve() {
            Ok(color) => color,
            Err(err) => {
                self.diagnostics.warn(&err.to_string());
                return ParsedColor::Invalid;
            }
        };
        match color.tint_or_shade(blend, factor) {
            Ok(blended) => ParsedColor::Valid(blended),
            Err(err) => {
                self.diagnostics
                    .warn(&format!("{err}; color returned unchanged"));
                ParsedColor::Valid(color)
            }
        }
    }

    /// Build a nine-step ramp around `base`.
    pub fn create_color_ramp(
        &self,
        base: &str,
        options: &RampOptions,
    ) -> Result<ColorRamp, RampError> {
        ColorRamp::from_hex(base, options, &self.diagnostics).inspect_err(|err| {
            self.diagnostics.warn(&err.to_string());
        })
    }

    /// WCAG relative luminance, `0.0` for anything that is not a color.
    pub fn relative_luminance<'a>(&self, input: impl Into<ColorInput<'a>>) -> f64 {
        match input.into().resolve() {
            Ok(color) => color::relative_luminance(color),
            Err(err) => {
                self.diagnostics
                    .warn(&format!("relative luminance of a non-color: {err}"));
                0.0
            }
        }
    }

    /// WCAG contrast ratio, or [`CONTRAST_NOT_COMPUTABLE`] if either side is
    /// not a color.
    pub fn contrast_ratio<'a, 'b>(
        &self,
        a: impl Into<ColorInput<'a>>,
        b: impl Into<ColorInput<'b>>,
    ) -> f64 {
        match (a.into().resolve(), b.into().resolve()) {
            (Ok(a), Ok(b)) => color::contrast_ratio(a, b),
            (Err(err), _) | (_, Err(err)) => {
                self.diagnostics
                    .warn(&format!("contrast ratio not computable: {err}"));
                CONTRAST_NOT_COMPUTABLE
            }
        }
    }

    /// Modular type scale; unusable ratios fall back to `1.0`.
    pub fn type_scale(&self, ratio: f64) -> TypeScale {
        TypeScale::try_new(ratio).unwrap_or_else(|| {
            self.diagnostics
                .warn(&format!("type scale ratio {ratio} must be finite and positive"));
            TypeScale::UNIFORM
        })
    }
}
