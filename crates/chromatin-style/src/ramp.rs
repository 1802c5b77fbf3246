#![forbid(unsafe_code)]

//! Nine-step tint/shade ramps derived from a single base color.
//!
//! Keys run `10, 20, ..., 90`. Key 50 is always the base color. In light
//! mode lower keys are lighter; dark mode mirrors the ramp so lower keys are
//! darker.

use std::collections::BTreeMap;
use std::fmt;

use chromatin_core::Diagnostics;

use crate::color::{Blend, Color, ColorError};

/// Ramp keys in ascending order.
pub const RAMP_KEYS: [u16; 9] = [10, 20, 30, 40, 50, 60, 70, 80, 90];

/// Key of the unmodified base color.
pub const BASE_KEY: u16 = 50;

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Ramp generation options.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RampOptions {
    /// Per-step tint increment (default: 0.1). Step `i` uses `i * tint_factor * 2`.
    pub tint_factor: f64,
    /// Per-step shade increment (default: 0.1).
    pub shade_factor: f64,
    pub mode: ThemeMode,
}

impl Default for RampOptions {
    fn default() -> Self {
        Self {
            tint_factor: 0.1,
            shade_factor: 0.1,
            mode: ThemeMode::Light,
        }
    }
}

impl RampOptions {
    #[must_use]
    pub fn with_tint_factor(mut self, factor: f64) -> Self {
        self.tint_factor = factor;
        self
    }

    #[must_use]
    pub fn with_shade_factor(mut self, factor: f64) -> Self {
        self.shade_factor = factor;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ThemeMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Ramp creation failure.
#[derive(Debug, Clone, PartialEq)]
pub enum RampError {
    /// The base color could not be parsed.
    InvalidBase(ColorError),
}

impl fmt::Display for RampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase(err) => write!(f, "color ramp creation failed: {err}"),
        }
    }
}

impl std::error::Error for RampError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidBase(err) => Some(err),
        }
    }
}

impl From<ColorError> for RampError {
    fn from(err: ColorError) -> Self {
        Self::InvalidBase(err)
    }
}

/// An immutable nine-step ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorRamp {
    colors: [Color; 9],
    mode: ThemeMode,
}

impl ColorRamp {
    /// Build a ramp around `base`.
    ///
    /// A step whose factor leaves `[0, 1]` keeps the base color and reports
    /// through `diagnostics`.
    pub fn from_color(base: Color, options: &RampOptions, diagnostics: &dyn Diagnostics) -> Self {
        let mut colors = [base; 9];
        let step = |blend: Blend, per_step: f64, i: u16| {
            let factor = f64::from(i) * per_step * 2.0;
            base.tint_or_shade(blend, factor).unwrap_or_else(|err| {
                diagnostics.warn(&format!("{err}; ramp step left at base color"));
                base
            })
        };
        for i in 1..=4u16 {
            let tinted = step(Blend::Tint, options.tint_factor, i);
            let shaded = step(Blend::Shade, options.shade_factor, i);
            let (lighter_key, darker_key) = ((5 - i) * 10, (5 + i) * 10);
            let (tint_key, shade_key) = if options.mode.is_dark() {
                (darker_key, lighter_key)
            } else {
                (lighter_key, darker_key)
            };
            colors[slot(tint_key)] = tinted;
            colors[slot(shade_key)] = shaded;
        }
        Self {
            colors,
            mode: options.mode,
        }
    }

    /// Parse `hex` and build a ramp around it.
    pub fn from_hex(
        hex: &str,
        options: &RampOptions,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Self, RampError> {
        let base = Color::from_hex(hex)?;
        Ok(Self::from_color(base, options, diagnostics))
    }

    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// The unmodified base color (key 50).
    #[must_use]
    pub const fn base(&self) -> Color {
        self.colors[4]
    }

    /// Color at `key`, one of [`RAMP_KEYS`].
    #[must_use]
    pub fn get(&self, key: u16) -> Option<Color> {
        key_index(key).map(|i| self.colors[i])
    }

    /// Hex string at `key`.
    #[must_use]
    pub fn hex(&self, key: u16) -> Option<String> {
        self.get(key).map(|c| c.to_hex())
    }

    /// `(key, color)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, Color)> + '_ {
        RAMP_KEYS.iter().copied().zip(self.colors.iter().copied())
    }

    /// Key to hex mapping, the shape style objects consume.
    #[must_use]
    pub fn to_hex_map(&self) -> BTreeMap<u16, String> {
        self.iter().map(|(key, color)| (key, color.to_hex())).collect()
    }
}

fn key_index(key: u16) -> Option<usize> {
    (key % 10 == 0 && (10..=90).contains(&key)).then(|| usize::from(key / 10 - 1))
}

fn slot(key: u16) -> usize {
    usize::from(key / 10 - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromatin_core::{RecordingDiagnostics, SilentDiagnostics};

    const GREEN: &str = "#23704a";

    fn expected_light() -> BTreeMap<u16, String> {
        [
            (10, "#d3e2da"),
            (20, "#a7c5b6"),
            (30, "#7ba992"),
            (40, "#4f8c6e"),
            (50, "#23704a"),
            (60, "#1c593b"),
            (70, "#15432c"),
            (80, "#0d2c1d"),
            (90, "#06160e"),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.to_owned()))
        .collect()
    }

    #[test]
    fn light_ramp_matches_reference_table() {
        let ramp = ColorRamp::from_hex(GREEN, &RampOptions::default(), &SilentDiagnostics).unwrap();
        assert_eq!(ramp.to_hex_map(), expected_light());
        assert_eq!(ramp.base().to_hex(), GREEN);
    }

    #[test]
    fn dark_ramp_mirrors_light() {
        let light = ColorRamp::from_hex(GREEN, &RampOptions::default(), &SilentDiagnostics).unwrap();
        let dark = ColorRamp::from_hex(
            GREEN,
            &RampOptions::default().with_mode(ThemeMode::Dark),
            &SilentDiagnostics,
        )
        .unwrap();
        for key in RAMP_KEYS {
            assert_eq!(dark.get(key), light.get(100 - key), "key {key}");
        }
        assert_eq!(dark.mode(), ThemeMode::Dark);
    }

    #[test]
    fn invalid_base_is_an_error_not_a_ramp() {
        let err = ColorRamp::from_hex("#12", &RampOptions::default(), &SilentDiagnostics);
        assert_eq!(
            err,
            Err(RampError::InvalidBase(ColorError::InvalidHex("#12".to_owned())))
        );
    }

    #[test]
    fn oversized_factor_keeps_base_and_warns() {
        let recorder = RecordingDiagnostics::new();
        let options = RampOptions::default().with_tint_factor(0.2);
        let ramp = ColorRamp::from_hex(GREEN, &options, &recorder).unwrap();
        // Steps 3 and 4 would need factors 1.2 and 1.6.
        assert_eq!(ramp.hex(20).as_deref(), Some(GREEN));
        assert_eq!(ramp.hex(10).as_deref(), Some(GREEN));
        assert_ne!(ramp.hex(30).as_deref(), Some(GREEN));
        assert_eq!(recorder.len(), 2);
    }

    #[test]
    fn lookup_rejects_unknown_keys() {
        let ramp = ColorRamp::from_color(Color::WHITE, &RampOptions::default(), &SilentDiagnostics);
        assert_eq!(ramp.get(0), None);
        assert_eq!(ramp.get(55), None);
        assert_eq!(ramp.get(100), None);
        assert_eq!(ramp.get(50), Some(Color::WHITE));
    }

    #[test]
    fn iter_is_ascending() {
        let ramp = ColorRamp::from_color(Color::BLACK, &RampOptions::default(), &SilentDiagnostics);
        let keys: Vec<u16> = ramp.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, RAMP_KEYS.to_vec());
    }
}
