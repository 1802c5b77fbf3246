#![forbid(unsafe_code)]

//! Color values, hex parsing, tint/shade blending, and WCAG contrast.
//!
//! [`Color`] is always a real color. Parsing that can fail either returns a
//! [`Result`] or, on the total API used by UI code, a [`ParsedColor`] whose
//! `Invalid` variant stands in for "zero channels, zero alpha, empty strings".
//! Validity is part of the type; nothing inspects values at runtime to guess
//! whether they are colors.

use std::fmt;

/// WCAG 2.1 AA minimum contrast for normal text.
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;
/// WCAG 2.1 AA minimum contrast for large text (18pt, or 14pt bold).
pub const WCAG_AA_LARGE_TEXT: f64 = 3.0;
/// WCAG 2.1 AAA minimum contrast for normal text.
pub const WCAG_AAA_NORMAL_TEXT: f64 = 7.0;
/// WCAG 2.1 AAA minimum contrast for large text.
pub const WCAG_AAA_LARGE_TEXT: f64 = 4.5;

// ── Errors ──────────────────────────────────────────────────────────────

/// Why a color operation could not produce a value.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Input did not match `#rgb` or `#rrggbb`.
    InvalidHex(String),
    /// Tint/shade factor outside `[0, 1]`.
    FactorOutOfRange(f64),
    /// An operation received the invalid-color sentinel.
    NotAColor,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHex(input) => {
                write!(f, "invalid hex color `{input}`: expected #rgb or #rrggbb")
            }
            Self::FactorOutOfRange(factor) => {
                write!(f, "tint/shade factor {factor} is outside [0, 1]")
            }
            Self::NotAColor => write!(f, "value is not a valid color"),
        }
    }
}

impl std::error::Error for ColorError {}

// ── Color ───────────────────────────────────────────────────────────────

/// An sRGB color with straight alpha.
///
/// Hex, `rgb()`, and `rgba()` representations are derived on demand, so they
/// can never disagree with the channels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Color with explicit alpha, clamped to `[0, 1]`.
    #[must_use]
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self::rgb(r, g, b).with_alpha(alpha)
    }

    /// Replace the alpha channel. NaN keeps the current value.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        if !alpha.is_nan() {
            self.alpha = alpha.clamp(0.0, 1.0);
        }
        self
    }

    /// Parse `#rgb` or `#rrggbb` (case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(hex.to_owned());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        let [r, g, b] = parse_hex_digits(digits).ok_or_else(invalid)?;
        Ok(Self::rgb(r, g, b))
    }

    /// `[r, g, b]` channel array.
    #[must_use]
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgb(r, g, b)`.
    #[must_use]
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// `rgba(r, g, b, a)` using `alpha` when given, else the color's own.
    ///
    /// The alpha is clamped to `[0, 1]`.
    #[must_use]
    pub fn to_rgba_string(&self, alpha: Option<f64>) -> String {
        let a = alpha
            .filter(|a| !a.is_nan())
            .unwrap_or(self.alpha)
            .clamp(0.0, 1.0);
        format!("rgba({}, {}, {}, {a})", self.r, self.g, self.b)
    }

    /// Blend towards white (`Tint`) or black (`Shade`) by `factor`.
    ///
    /// Channels are truncated, not rounded. Alpha is preserved.
    pub fn tint_or_shade(&self, blend: Blend, factor: f64) -> Result<Self, ColorError> {
        if !(0.0..=1.0).contains(&factor) {
            return Err(ColorError::FactorOutOfRange(factor));
        }
        let apply = |v: u8| -> u8 {
            let v = f64::from(v);
            let blended = match blend {
                Blend::Tint => v + (255.0 - v) * factor,
                Blend::Shade => v * (1.0 - factor),
            };
            blended as u8
        };
        Ok(Self {
            r: apply(self.r),
            g: apply(self.g),
            b: apply(self.b),
            alpha: self.alpha,
        })
    }

    /// Shorthand for [`tint_or_shade`](Self::tint_or_shade) with `Blend::Tint`.
    pub fn tint(&self, factor: f64) -> Result<Self, ColorError> {
        self.tint_or_shade(Blend::Tint, factor)
    }

    /// Shorthand for [`tint_or_shade`](Self::tint_or_shade) with `Blend::Shade`.
    pub fn shade(&self, factor: f64) -> Result<Self, ColorError> {
        self.tint_or_shade(Blend::Shade, factor)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Direction of a tint/shade blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Blend {
    /// Towards white.
    Tint,
    /// Towards black.
    Shade,
}

fn parse_hex_digits(digits: &str) -> Option<[u8; 3]> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        3 => {
            let nibble = |i: usize| byte(&digits[i..=i]).map(|n| n * 17);
            Some([nibble(0)?, nibble(1)?, nibble(2)?])
        }
        6 => Some([byte(&digits[0..2])?, byte(&digits[2..4])?, byte(&digits[4..6])?]),
        _ => None,
    }
}

/// Channel array for a hex string with or without the leading `#`.
///
/// Anything unparsable yields `[0, 0, 0]`.
#[must_use]
pub fn hex_to_rgb_array(hex: &str) -> [u8; 3] {
    parse_hex_digits(hex.strip_prefix('#').unwrap_or(hex)).unwrap_or([0, 0, 0])
}

// ── Tagged parse results ────────────────────────────────────────────────

/// Outcome of a total color operation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ParsedColor {
    Valid(Color),
    /// Sentinel for unusable input.
    #[default]
    Invalid,
}

impl ParsedColor {
    /// Channels and alpha of the invalid sentinel.
    pub const INVALID_COLOR: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        alpha: 0.0,
    };

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[must_use]
    pub const fn ok(&self) -> Option<Color> {
        match self {
            Self::Valid(color) => Some(*color),
            Self::Invalid => None,
        }
    }

    /// The color, or the all-zero sentinel.
    #[must_use]
    pub const fn color(&self) -> Color {
        match self {
            Self::Valid(color) => *color,
            Self::Invalid => Self::INVALID_COLOR,
        }
    }

    /// Hex string, empty when invalid.
    #[must_use]
    pub fn hex(&self) -> String {
        self.ok().map(|c| c.to_hex()).unwrap_or_default()
    }

    /// `rgb()` string, empty when invalid.
    #[must_use]
    pub fn rgb_string(&self) -> String {
        self.ok().map(|c| c.to_rgb_string()).unwrap_or_default()
    }

    /// `rgba()` string, empty when invalid.
    #[must_use]
    pub fn rgba_string(&self, alpha: Option<f64>) -> String {
        self.ok().map(|c| c.to_rgba_string(alpha)).unwrap_or_default()
    }
}

impl From<Color> for ParsedColor {
    fn from(color: Color) -> Self {
        Self::Valid(color)
    }
}

impl<E> From<Result<Color, E>> for ParsedColor {
    fn from(result: Result<Color, E>) -> Self {
        result.map_or(Self::Invalid, Self::Valid)
    }
}

/// Anything a total color operation accepts: a hex string, a color, or a
/// previous parse result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorInput<'a> {
    Hex(&'a str),
    Color(Color),
    Parsed(ParsedColor),
}

impl ColorInput<'_> {
    /// Resolve to a concrete color.
    pub fn resolve(&self) -> Result<Color, ColorError> {
        match self {
            Self::Hex(hex) => Color::from_hex(hex),
            Self::Color(color) => Ok(*color),
            Self::Parsed(parsed) => parsed.ok().ok_or(ColorError::NotAColor),
        }
    }
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(hex: &'a str) -> Self {
        Self::Hex(hex)
    }
}

impl<'a> From<&'a String> for ColorInput<'a> {
    fn from(hex: &'a String) -> Self {
        Self::Hex(hex.as_str())
    }
}

impl From<Color> for ColorInput<'_> {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<ParsedColor> for ColorInput<'_> {
    fn from(parsed: ParsedColor) -> Self {
        Self::Parsed(parsed)
    }
}

// ── WCAG ────────────────────────────────────────────────────────────────

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in `[0, 1]`.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let r = srgb_to_linear(f64::from(color.r) / 255.0);
    let g = srgb_to_linear(f64::from(color.g) / 255.0);
    let b = srgb_to_linear(f64::from(color.b) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG contrast ratio in `[1, 21]`. Symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let lighter = la.max(lb);
    let darker = la.min(lb);
    (lighter + 0.05) / (darker + 0.05)
}

#[must_use]
pub fn meets_wcag_aa(fg: Color, bg: Color) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AA_NORMAL_TEXT
}

#[must_use]
pub fn meets_wcag_aa_large_text(fg: Color, bg: Color) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AA_LARGE_TEXT
}

#[must_use]
pub fn meets_wcag_aaa(fg: Color, bg: Color) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AAA_NORMAL_TEXT
}

/// Candidate with the highest contrast against `bg`; earliest wins ties.
#[must_use]
pub fn best_text_color(bg: Color, candidates: &[Color]) -> Option<Color> {
    let (first, rest) = candidates.split_first()?;
    let mut best = *first;
    let mut best_ratio = contrast_ratio(best, bg);
    for &candidate in rest {
        let ratio = contrast_ratio(candidate, bg);
        if ratio > best_ratio {
            best = candidate;
            best_ratio = ratio;
        }
    }
    Some(best)
}
