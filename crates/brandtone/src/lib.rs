#![forbid(unsafe_code)]

//! Accessible text color and scrim selection for brand theme colors.
//!
//! Brand cards are painted on whatever color a brand configured. This crate
//! decides which text color keeps that legible and, when plain black or white
//! is not enough, how strong a translucent scrim to lay over the background.
//!
//! All functions are pure and total: malformed input degrades to a neutral
//! fallback instead of failing.

pub mod color;
pub mod contrast;
pub mod logging;
pub mod scrim;

pub use color::{ColorParseError, NEUTRAL_FALLBACK, Rgb, parse_hex};
pub use contrast::{
    WCAG_AA_LARGE, WCAG_AA_NORMAL, WCAG_AAA_NORMAL, color_contrast, contrast_ratio,
    relative_luminance,
};
pub use scrim::{
    NEUTRAL_FALLBACK_HEX, SCRIM_OPACITY_LADDER, Scrim, ScrimSelector, TextColor, TextDecision,
    pick_accessible_text,
};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};
