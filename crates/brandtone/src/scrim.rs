#![forbid(unsafe_code)]

//! Text color and scrim selection for arbitrary brand backgrounds.
//!
//! Given a background color spec, [`ScrimSelector`] picks black or white text,
//! whichever contrasts more, and when neither reaches the target it searches a
//! fixed ladder of overlay opacities for the weakest scrim that does.
//!
//! # Example
//! ```
//! use brandtone::{TextColor, pick_accessible_text};
//!
//! let decision = pick_accessible_text(Some("#1e3a8a"));
//! assert_eq!(decision.text_color, TextColor::White);
//! assert!(decision.scrim.is_none());
//! assert_eq!(decision.bg_fallback, "#1e3a8a");
//! ```
//!
//! Under the AA target one of black or white always passes, so scrims only
//! appear with stricter targets:
//! ```
//! use brandtone::ScrimSelector;
//!
//! let decision = ScrimSelector::aaa().pick(Some("#808080"));
//! assert_eq!(decision.scrim_css().as_deref(), Some("rgba(255,255,255,0.24)"));
//! ```

use core::fmt;

use crate::color::{NEUTRAL_FALLBACK, Rgb, parse_hex};
use crate::contrast::{
    BLACK_LUMINANCE, WCAG_AA_NORMAL, WCAG_AAA_NORMAL, WHITE_LUMINANCE, contrast_ratio,
    meets_target, relative_luminance,
};

/// Overlay opacities tried in order when bare text fails the target.
pub const SCRIM_OPACITY_LADDER: [f64; 4] = [0.24, 0.32, 0.40, 0.48];

/// Background string reported when the caller's spec is unusable.
pub const NEUTRAL_FALLBACK_HEX: &str = "#f5f5f5";

/// Text color chosen for a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    /// `#000000`.
    Black,
    /// `#ffffff`.
    White,
}

impl TextColor {
    /// Hex literal for CSS.
    #[must_use]
    pub const fn as_hex(self) -> &'static str {
        match self {
            Self::Black => "#000000",
            Self::White => "#ffffff",
        }
    }

    /// The text color as RGB.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Black => Rgb::BLACK,
            Self::White => Rgb::WHITE,
        }
    }

    /// Relative luminance of the text color.
    #[must_use]
    pub const fn luminance(self) -> f64 {
        match self {
            Self::Black => BLACK_LUMINANCE,
            Self::White => WHITE_LUMINANCE,
        }
    }

    /// The scrim color that pushes the background away from this text color.
    #[must_use]
    pub const fn scrim_color(self) -> Rgb {
        match self {
            Self::Black => Rgb::WHITE,
            Self::White => Rgb::BLACK,
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_hex())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TextColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_hex())
    }
}

/// A translucent overlay painted between the background and the text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scrim {
    /// Overlay color.
    pub color: Rgb,
    /// Overlay opacity, one of [`SCRIM_OPACITY_LADDER`].
    pub opacity: f64,
}

impl Scrim {
    /// The background as it looks with this scrim composited on top.
    #[must_use]
    pub fn composite(self, background: Rgb) -> Rgb {
        self.color.blend_over(background, self.opacity)
    }

    /// CSS `rgba(...)` literal.
    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

/// Renders `rgba(r,g,b,a)` with no spaces and the shortest opacity form.
impl fmt::Display for Scrim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.color.r, self.color.g, self.color.b, self.opacity
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Scrim {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Rendering directive for text on a background.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TextDecision {
    /// Text color to paint.
    pub text_color: TextColor,
    /// Overlay to paint over the background, if bare text falls short.
    pub scrim: Option<Scrim>,
    /// Background to paint: the caller's spec verbatim when it parsed,
    /// otherwise [`NEUTRAL_FALLBACK_HEX`].
    pub bg_fallback: String,
    /// Contrast achieved between the text and the (scrimmed) background.
    pub contrast: f64,
    /// False only when the whole ladder was exhausted without reaching
    /// the target and the strongest scrim was returned anyway.
    pub meets_target: bool,
}

impl TextDecision {
    /// Text color as a hex literal.
    #[must_use]
    pub const fn text_hex(&self) -> &'static str {
        self.text_color.as_hex()
    }

    /// Scrim as a CSS literal, if any.
    #[must_use]
    pub fn scrim_css(&self) -> Option<String> {
        self.scrim.map(Scrim::to_css)
    }
}

/// Picks text colors and scrims against a fixed contrast target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrimSelector {
    target: f64,
}

impl Default for ScrimSelector {
    fn default() -> Self {
        Self::new(WCAG_AA_NORMAL)
    }
}

impl ScrimSelector {
    /// Selector aiming for `target` (e.g. [`WCAG_AA_NORMAL`]).
    #[must_use]
    pub const fn new(target: f64) -> Self {
        Self { target }
    }

    /// Selector aiming for AAA normal text (7:1).
    #[must_use]
    pub const fn aaa() -> Self {
        Self::new(WCAG_AAA_NORMAL)
    }

    /// The contrast target.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.target
    }

    /// Decide text color, scrim, and background for `spec`.
    ///
    /// Never fails: a missing or malformed spec is replaced by the neutral
    /// fallback color.
    #[must_use]
    pub fn pick(&self, spec: Option<&str>) -> TextDecision {
        let (background, bg_fallback) = match spec.map(|raw| (raw, parse_hex(Some(raw)))) {
            Some((raw, Ok(rgb))) => (rgb, raw.to_owned()),
            Some((_, Err(_err))) => {
                crate::debug!(spec = ?spec, error = %_err, "using neutral fallback background");
                (NEUTRAL_FALLBACK, NEUTRAL_FALLBACK_HEX.to_owned())
            }
            None => {
                crate::debug!("no background spec; using neutral fallback background");
                (NEUTRAL_FALLBACK, NEUTRAL_FALLBACK_HEX.to_owned())
            }
        };

        let (text_color, contrast) = best_text_color(background);
        if meets_target(contrast, self.target) {
            return TextDecision {
                text_color,
                scrim: None,
                bg_fallback,
                contrast,
                meets_target: true,
            };
        }

        let (scrim, contrast, met) = self.search_ladder(background, text_color);
        if met {
            crate::debug!(
                scrim = %scrim,
                contrast,
                min_ratio = self.target,
                "scrim reaches contrast target"
            );
        } else {
            crate::warn!(
                background = %background,
                scrim = %scrim,
                contrast,
                min_ratio = self.target,
                "no scrim opacity reaches contrast target; using strongest"
            );
        }

        TextDecision {
            text_color,
            scrim: Some(scrim),
            bg_fallback,
            contrast,
            meets_target: met,
        }
    }

    /// First ladder opacity reaching the target, or the last one.
    fn search_ladder(&self, background: Rgb, text: TextColor) -> (Scrim, f64, bool) {
        let color = text.scrim_color();
        let mut last = (
            Scrim {
                color,
                opacity: SCRIM_OPACITY_LADDER[SCRIM_OPACITY_LADDER.len() - 1],
            },
            0.0,
        );
        for opacity in SCRIM_OPACITY_LADDER {
            let scrim = Scrim { color, opacity };
            let blended = relative_luminance(scrim.composite(background));
            let ratio = contrast_ratio(blended, text.luminance());
            crate::trace!(opacity, ratio, "scrim candidate");
            if meets_target(ratio, self.target) {
                return (scrim, ratio, true);
            }
            last = (scrim, ratio);
        }
        (last.0, last.1, false)
    }
}

/// Black or white, whichever contrasts more with `background` (ties go to
/// black), together with that contrast.
#[must_use]
pub fn best_text_color(background: Rgb) -> (TextColor, f64) {
    let lum = relative_luminance(background);
    let on_black = contrast_ratio(lum, BLACK_LUMINANCE);
    let on_white = contrast_ratio(lum, WHITE_LUMINANCE);
    if on_black >= on_white {
        (TextColor::Black, on_black)
    } else {
        (TextColor::White, on_white)
    }
}

/// Decide text color and scrim for `spec` against WCAG AA (4.5:1).
#[must_use]
pub fn pick_accessible_text(spec: Option<&str>) -> TextDecision {
    ScrimSelector::default().pick(spec)
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn fallback_is_logged() {
        let _ = pick_accessible_text(Some("#zzz"));
        assert!(logs_contain("using neutral fallback background"));
    }

    #[test]
    #[traced_test]
    fn best_effort_scrim_is_logged() {
        let _ = ScrimSelector::new(12.0).pick(Some("#808080"));
        assert!(logs_contain("using strongest"));
    }
}
