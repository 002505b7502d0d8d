#![forbid(unsafe_code)]

//! WCAG 2.x relative luminance and contrast ratio.
//!
//! The transfer function and channel weights follow the WCAG definition
//! exactly; the thresholds below are compared against the unrounded ratio.

use crate::color::Rgb;

/// Minimum ratio for normal-size text at level AA.
pub const WCAG_AA_NORMAL: f64 = 4.5;
/// Minimum ratio for large text at level AA.
pub const WCAG_AA_LARGE: f64 = 3.0;
/// Minimum ratio for normal-size text at level AAA.
pub const WCAG_AAA_NORMAL: f64 = 7.0;

/// Relative luminance of pure black.
pub const BLACK_LUMINANCE: f64 = 0.0;
/// Relative luminance of pure white.
pub const WHITE_LUMINANCE: f64 = 1.0;

/// Decode a normalized sRGB channel (`0.0..=1.0`) to linear light.
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in `[0, 1]`.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = srgb_to_linear(f64::from(color.r) / 255.0);
    let g = srgb_to_linear(f64::from(color.g) / 255.0);
    let b = srgb_to_linear(f64::from(color.b) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two luminances, in `[1, 21]`.
///
/// Argument order does not matter.
#[must_use]
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two colors.
#[must_use]
pub fn color_contrast(a: Rgb, b: Rgb) -> f64 {
    contrast_ratio(relative_luminance(a), relative_luminance(b))
}

/// Whether `ratio` reaches `target`.
#[inline]
#[must_use]
pub fn meets_target(ratio: f64, target: f64) -> bool {
    ratio >= target
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn black_and_white_luminance() {
        assert!((relative_luminance(Rgb::BLACK) - BLACK_LUMINANCE).abs() < EPS);
        assert!((relative_luminance(Rgb::WHITE) - WHITE_LUMINANCE).abs() < EPS);
    }

    #[test]
    fn linear_segment_below_threshold() {
        assert!((srgb_to_linear(0.04045) - 0.04045 / 12.92).abs() < EPS);
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn green_dominates_luminance() {
        let r = relative_luminance(Rgb::new(255, 0, 0));
        let g = relative_luminance(Rgb::new(0, 255, 0));
        let b = relative_luminance(Rgb::new(0, 0, 255));
        assert!((r - 0.2126).abs() < EPS);
        assert!((g - 0.7152).abs() < EPS);
        assert!((b - 0.0722).abs() < EPS);
    }

    #[test]
    fn mid_gray_luminance() {
        let l = relative_luminance(Rgb::new(128, 128, 128));
        assert!((l - 0.215_860_500_113_899).abs() < 1e-12, "{l}");
    }

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(BLACK_LUMINANCE, WHITE_LUMINANCE);
        assert!((ratio - 21.0).abs() < EPS);
        assert!((color_contrast(Rgb::WHITE, Rgb::BLACK) - 21.0).abs() < EPS);
    }

    #[test]
    fn equal_luminance_is_one() {
        for l in [0.0, 0.18, 0.5, 1.0] {
            assert_eq!(contrast_ratio(l, l), 1.0);
        }
    }

    #[test]
    fn ratio_is_symmetric() {
        assert_eq!(contrast_ratio(0.2, 0.7), contrast_ratio(0.7, 0.2));
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert!(meets_target(4.5, WCAG_AA_NORMAL));
        assert!(!meets_target(4.499_999, WCAG_AA_NORMAL));
        assert!(meets_target(3.0, WCAG_AA_LARGE));
        assert!(!meets_target(6.99, WCAG_AAA_NORMAL));
    }
}
