//! Encoding mode selection.

use std::fmt;
use std::str::FromStr;

use super::layout::{Layout, RED_WHITE_BLACK, RED_WHITE_BLACK_4, SEVEN_COLOR};

/// Packed pixel format expected by a display controller.
///
/// The string forms (`"7c"`, `"rwb"`, `"rwb4"`) are the display type names
/// used in configuration.
///
/// | Mode | Colors | Bits/pixel | Planes | Bytes |
/// |------|--------|------------|--------|-------|
/// | [`SevenColor`](Self::SevenColor) | 7 | 4 | 1 | `w * h / 2` |
/// | [`RedWhiteBlack`](Self::RedWhiteBlack) | 3 | 1 | 2 (BW, Red) | `2 * w * h / 8` |
/// | [`RedWhiteBlack4`](Self::RedWhiteBlack4) | 3 | 4 | 1 | `w * h / 2` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncodingMode {
    /// Seven colors, one code per nibble, two pixels per byte.
    #[cfg_attr(feature = "serde", serde(rename = "7c"))]
    SevenColor,
    /// Black/white/red as two 1-bit planes, BW plane first.
    #[cfg_attr(feature = "serde", serde(rename = "rwb"))]
    RedWhiteBlack,
    /// Black/white/red in 4-bit fields, two pixels per byte.
    #[cfg_attr(feature = "serde", serde(rename = "rwb4"))]
    RedWhiteBlack4,
}

impl EncodingMode {
    /// All supported modes.
    pub const ALL: [EncodingMode; 3] = [
        EncodingMode::SevenColor,
        EncodingMode::RedWhiteBlack,
        EncodingMode::RedWhiteBlack4,
    ];

    pub(crate) fn layout(self) -> &'static Layout {
        match self {
            EncodingMode::SevenColor => &SEVEN_COLOR,
            EncodingMode::RedWhiteBlack => &RED_WHITE_BLACK,
            EncodingMode::RedWhiteBlack4 => &RED_WHITE_BLACK_4,
        }
    }

    /// Type name used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            EncodingMode::SevenColor => "7c",
            EncodingMode::RedWhiteBlack => "rwb",
            EncodingMode::RedWhiteBlack4 => "rwb4",
        }
    }

    /// Number of palette colors the mode requires.
    #[inline]
    pub fn color_count(self) -> usize {
        self.layout().colors
    }

    /// Bits one pixel occupies in each plane.
    #[inline]
    pub fn bits_per_pixel(self) -> u32 {
        self.layout().bits_per_pixel
    }

    /// Pixels packed into one byte. Image width must be a multiple of this.
    #[inline]
    pub fn pixels_per_byte(self) -> usize {
        self.layout().pixels_per_byte()
    }

    /// Number of output planes.
    #[inline]
    pub fn plane_count(self) -> usize {
        self.layout().planes.len()
    }

    /// Byte length of one plane, or `None` on overflow.
    ///
    /// Assumes `width` is a multiple of [`pixels_per_byte()`](Self::pixels_per_byte).
    pub fn plane_len(self, width: usize, height: usize) -> Option<usize> {
        width
            .checked_mul(height)
            .map(|pixels| pixels / self.pixels_per_byte())
    }

    /// Total byte length of all planes, or `None` on overflow.
    ///
    /// ```
    /// use epd_pack::EncodingMode;
    ///
    /// assert_eq!(EncodingMode::SevenColor.packed_len(600, 448), Some(134_400));
    /// assert_eq!(EncodingMode::RedWhiteBlack.packed_len(400, 300), Some(30_000));
    /// ```
    pub fn packed_len(self, width: usize, height: usize) -> Option<usize> {
        self.plane_len(width, height)?
            .checked_mul(self.plane_count())
    }
}

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown encoding name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown encoding mode: {0}")]
pub struct ParseModeError(pub String);

impl FromStr for EncodingMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EncodingMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}
