#![forbid(unsafe_code)]

//! Modular type scale.
//!
//! Font sizes are `ratio^step` rem, so step 0 is the body size and each step
//! up or down multiplies or divides by the ratio.

/// Minor third (1.2).
pub const MINOR_THIRD: f64 = 1.2;
/// Major third (1.25).
pub const MAJOR_THIRD: f64 = 1.25;
/// Perfect fourth (1.333).
pub const PERFECT_FOURTH: f64 = 1.333;

/// Font size for `step` on a scale with `ratio`, as a `rem` string with three
/// decimals.
#[must_use]
pub fn font_size_in_rem(ratio: f64, step: i32) -> String {
    format!("{:.3}rem", ratio.powi(step))
}

/// A type scale with a fixed ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeScale {
    ratio: f64,
}

impl Default for TypeScale {
    fn default() -> Self {
        Self {
            ratio: PERFECT_FOURTH,
        }
    }
}

impl TypeScale {
    /// Every step has the same size.
    pub const UNIFORM: Self = Self { ratio: 1.0 };

    /// Scale with `ratio`, or `None` unless it is finite and positive.
    #[must_use]
    pub fn try_new(ratio: f64) -> Option<Self> {
        (ratio.is_finite() && ratio > 0.0).then_some(Self { ratio })
    }

    #[must_use]
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Size multiplier for `step`.
    #[must_use]
    pub fn size(&self, step: i32) -> f64 {
        self.ratio.powi(step)
    }

    /// Size for `step` as a `rem` string.
    #[must_use]
    pub fn rem(&self, step: i32) -> String {
        font_size_in_rem(self.ratio, step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_zero_is_one_rem() {
        assert_eq!(font_size_in_rem(1.333, 0), "1.000rem");
        assert_eq!(font_size_in_rem(MINOR_THIRD, 0), "1.000rem");
    }

    #[test]
    fn steps_multiply_by_ratio() {
        assert_eq!(font_size_in_rem(1.333, 1), "1.333rem");
        assert_eq!(font_size_in_rem(1.333, 2), "1.777rem");
        assert_eq!(font_size_in_rem(MAJOR_THIRD, -1), "0.800rem");
    }

    #[test]
    fn scale_rejects_degenerate_ratios() {
        assert!(TypeScale::try_new(0.0).is_none());
        assert!(TypeScale::try_new(-1.2).is_none());
        assert!(TypeScale::try_new(f64::INFINITY).is_none());
        assert_eq!(TypeScale::try_new(1.2).map(|s| s.ratio()), Some(1.2));
    }

    #[test]
    fn default_scale_is_perfect_fourth() {
        let scale = TypeScale::default();
        assert_eq!(scale.rem(0), "1.000rem");
        assert_eq!(scale.rem(1), "1.333rem");
        assert!((scale.size(-1) - 1.0 / 1.333).abs() < 1e-12);
        assert_eq!(TypeScale::UNIFORM.rem(5), "1.000rem");
    }
}
