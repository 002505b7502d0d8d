#![forbid(unsafe_code)]

//! Color values, hex parsing, and source-over blending.

use core::fmt;
use core::str::FromStr;

/// Neutral background used when a color spec is missing or malformed.
pub const NEUTRAL_FALLBACK: Rgb = Rgb::new(245, 245, 245);

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Composite `self` at `alpha` over an opaque `base` (source-over).
    ///
    /// Each channel is `round(self * alpha + base * (1 - alpha))`. `alpha` is
    /// clamped to `[0, 1]`.
    #[must_use]
    pub fn blend_over(self, base: Rgb, alpha: f64) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |top: u8, bottom: u8| -> u8 {
            let v = f64::from(top) * alpha + f64::from(bottom) * (1.0 - alpha);
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(self.r, base.r), mix(self.g, base.g), mix(self.b, base.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(Some(s))
    }
}

/// Why a hex color spec was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorParseError {
    /// No spec, or nothing left after trimming.
    Empty,
    /// Digit count other than 3 or 6.
    InvalidLength,
    /// A character outside `[0-9a-fA-F]`.
    InvalidHex,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Empty => "empty color string",
            Self::InvalidLength => "invalid hex length (expected 3 or 6 digits)",
            Self::InvalidHex => "invalid hex digits",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ColorParseError {}

/// Parse a `#RGB` or `#RRGGBB` color spec.
///
/// Surrounding whitespace and one leading `#` are ignored; digits are
/// case-insensitive. The short form doubles each digit, so `#abc` parses
/// as `#aabbcc`.
pub fn parse_hex(spec: Option<&str>) -> Result<Rgb, ColorParseError> {
    let spec = spec.ok_or(ColorParseError::Empty)?.trim();
    let digits = spec.strip_prefix('#').unwrap_or(spec).trim();
    if digits.is_empty() {
        return Err(ColorParseError::Empty);
    }

    let bytes = digits.as_bytes();
    match bytes.len() {
        3 => {
            let r = nibble(bytes[0])?;
            let g = nibble(bytes[1])?;
            let b = nibble(bytes[2])?;
            Ok(Rgb::new(r * 17, g * 17, b * 17))
        }
        6 => {
            let pair = |hi: u8, lo: u8| -> Result<u8, ColorParseError> {
                Ok(nibble(hi)? << 4 | nibble(lo)?)
            };
            Ok(Rgb::new(
                pair(bytes[0], bytes[1])?,
                pair(bytes[2], bytes[3])?,
                pair(bytes[4], bytes[5])?,
            ))
        }
        _ => Err(ColorParseError::InvalidLength),
    }
}

fn nibble(c: u8) -> Result<u8, ColorParseError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ColorParseError::InvalidHex),
    }
}
