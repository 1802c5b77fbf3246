#![forbid(unsafe_code)]

//! Color and type-scale primitives for Chromatin.
//!
//! # Role in Chromatin
//! `chromatin-style` is the shared vocabulary for colors. Component styles
//! ask it for ramps, contrast checks, and font sizes, and receive
//! deterministic values they can drop straight into style objects.
//!
//! # This crate provides
//! - [`Color`] and the tagged [`ParsedColor`] for hex parsing.
//! - [`ColorRamp`] for nine-step tint/shade ramps with light/dark modes.
//! - WCAG relative luminance and contrast utilities.
//! - [`ColorEngine`] for total, sentinel-returning operations with injected
//!   diagnostics.
//! - [`TypeScale`] for modular font sizes.

/// Color types, hex parsing, blending, and WCAG utilities.
pub mod color;
/// Sentinel-returning operations bound to a diagnostics sink.
pub mod engine;
/// Nine-step tint/shade ramps.
pub mod ramp;
/// Modular type scale.
pub mod typography;

pub use color::{
    Blend,
    Color,
    ColorError,
    ColorInput,
    ParsedColor,
    // WCAG constants
    WCAG_AA_LARGE_TEXT,
    WCAG_AA_NORMAL_TEXT,
    WCAG_AAA_LARGE_TEXT,
    WCAG_AAA_NORMAL_TEXT,
    // WCAG contrast utilities
    best_text_color,
    contrast_ratio,
    hex_to_rgb_array,
    meets_wcag_aa,
    meets_wcag_aa_large_text,
    meets_wcag_aaa,
    relative_luminance,
};
pub use engine::{CONTRAST_NOT_COMPUTABLE, ColorEngine};
pub use ramp::{BASE_KEY, ColorRamp, RAMP_KEYS, RampError, RampOptions, ThemeMode};
pub use typography::{TypeScale, font_size_in_rem};
