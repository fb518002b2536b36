//! Color specifications and parsing for palette tables
//!
//! Supports the two spec forms used by the flag palettes:
//! - Hex strings: `#RGB`, `#RRGGBB` (case-insensitive, `#` optional)
//! - Component arrays: 3 values (RGB, 0-255) or 4 values (CMYK, 0-100)

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for color specification failures.
///
/// Palette tables are static data, so these indicate a programming error in
/// a table rather than bad user input.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ColorFormatError {
    /// Hex string is not 3 or 6 digits after stripping `#`
    #[error("invalid color '{0}': must be 3 or 6 hex digits")]
    InvalidHexLength(String),
    /// Hex string contains a non-hex character
    #[error("invalid hex character '{1}' in color '{0}'")]
    InvalidHexDigit(String, char),
    /// Component array is not 3 (RGB) or 4 (CMYK) values
    #[error("invalid component count {0}: expected 3 (RGB) or 4 (CMYK)")]
    InvalidComponentCount(usize),
}

/// A raw color specification as written in a palette table.
///
/// Deserializes from either a JSON string (`"#FF0018"`) or a JSON array
/// (`[0, 0, 0, 0]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Hex string, with or without leading `#`
    Hex(String),
    /// Literal components: 3 = RGB, 4 = CMYK
    Components(Vec<f64>),
}

impl ColorSpec {
    /// Convenience constructor for hex specs.
    pub fn hex(s: impl Into<String>) -> Self {
        Self::Hex(s.into())
    }

    /// Convenience constructor for component-array specs.
    pub fn components(values: impl Into<Vec<f64>>) -> Self {
        Self::Components(values.into())
    }
}

/// The color space a resolved value lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorSpace {
    Rgb,
    Cmyk,
}

/// A normalized color value with its space decided by component count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColorValue {
    /// Red, green, blue in 0-255
    Rgb([f64; 3]),
    /// Cyan, magenta, yellow, black in 0-100
    Cmyk([f64; 4]),
}

impl ColorValue {
    /// The space this value is expressed in.
    pub fn space(&self) -> ColorSpace {
        match self {
            ColorValue::Rgb(_) => ColorSpace::Rgb,
            ColorValue::Cmyk(_) => ColorSpace::Cmyk,
        }
    }

    /// Converts to CMYK using the naive device formula.
    ///
    /// CMYK values pass through unchanged.
    pub fn to_cmyk(self) -> Self {
        match self {
            ColorValue::Cmyk(_) => self,
            ColorValue::Rgb([r, g, b]) => {
                let r = r / 255.0;
                let g = g / 255.0;
                let b = b / 255.0;
                let k = 1.0 - r.max(g).max(b);
                if k >= 1.0 {
                    return ColorValue::Cmyk([0.0, 0.0, 0.0, 100.0]);
                }
                let c = (1.0 - r - k) / (1.0 - k);
                let m = (1.0 - g - k) / (1.0 - k);
                let y = (1.0 - b - k) / (1.0 - k);
                ColorValue::Cmyk([c * 100.0, m * 100.0, y * 100.0, k * 100.0])
            }
        }
    }

    /// Converts to RGB using the naive device formula.
    ///
    /// RGB values pass through unchanged.
    pub fn to_rgb(self) -> Self {
        match self {
            ColorValue::Rgb(_) => self,
            ColorValue::Cmyk([c, m, y, k]) => {
                let c = c / 100.0;
                let m = m / 100.0;
                let y = y / 100.0;
                let k = k / 100.0;
                ColorValue::Rgb([
                    255.0 * (1.0 - c) * (1.0 - k),
                    255.0 * (1.0 - m) * (1.0 - k),
                    255.0 * (1.0 - y) * (1.0 - k),
                ])
            }
        }
    }

    /// RGB channels rounded to bytes, converting from CMYK when needed.
    pub fn to_rgb8(self) -> [u8; 3] {
        let ColorValue::Rgb([r, g, b]) = self.to_rgb() else {
            unreachable!("to_rgb always yields Rgb");
        };
        [
            r.round().clamp(0.0, 255.0) as u8,
            g.round().clamp(0.0, 255.0) as u8,
            b.round().clamp(0.0, 255.0) as u8,
        ]
    }
}

/// Parse a color specification into a normalized value.
///
/// Hex strings resolve to RGB; component arrays pass through unchanged, with
/// the space chosen purely by component count (3 = RGB, 4 = CMYK).
///
/// # Examples
///
/// ```
/// use flagpress::color::{parse_color, ColorSpec, ColorValue};
///
/// let white = parse_color(&ColorSpec::hex("#fff")).unwrap();
/// assert_eq!(white, ColorValue::Rgb([255.0, 255.0, 255.0]));
/// assert_eq!(white, parse_color(&ColorSpec::hex("FFFFFF")).unwrap());
///
/// let paper = parse_color(&ColorSpec::components([0.0, 0.0, 0.0, 0.0])).unwrap();
/// assert_eq!(paper, ColorValue::Cmyk([0.0, 0.0, 0.0, 0.0]));
///
/// assert!(parse_color(&ColorSpec::hex("12")).is_err());
/// ```
///
/// # Errors
///
/// Returns [`ColorFormatError`] for a hex string that is not 3 or 6 hex
/// digits, or a component array that is not 3 or 4 values long.
pub fn parse_color(spec: &ColorSpec) -> Result<ColorValue, ColorFormatError> {
    match spec {
        ColorSpec::Hex(s) => parse_hex(s),
        ColorSpec::Components(values) => match values.len() {
            3 => Ok(ColorValue::Rgb([values[0], values[1], values[2]])),
            4 => Ok(ColorValue::Cmyk([values[0], values[1], values[2], values[3]])),
            n => Err(ColorFormatError::InvalidComponentCount(n)),
        },
    }
}

fn parse_hex(s: &str) -> Result<ColorValue, ColorFormatError> {
    let hex = s.strip_prefix('#').unwrap_or(s);

    // #RGB shorthand: each digit doubles
    let expanded: String;
    let hex = if hex.len() == 3 {
        expanded = hex.chars().flat_map(|c| [c, c]).collect();
        expanded.as_str()
    } else {
        hex
    };

    if hex.len() != 6 {
        return Err(ColorFormatError::InvalidHexLength(s.to_string()));
    }
    if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorFormatError::InvalidHexDigit(s.to_string(), bad));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map(f64::from)
            .map_err(|_| ColorFormatError::InvalidHexLength(s.to_string()))
    };

    Ok(ColorValue::Rgb([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
}
