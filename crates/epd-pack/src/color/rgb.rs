//! 8-bit RGB color type
//!
//! Palette entries and image pixels are compared byte-for-byte, so the
//! color type stays in integer form and never goes through floating point.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// An 8-bit RGB color.
///
/// Used for palette entries and for pixels read out of RGBA rows (alpha is
/// dropped on the way in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from channel values.
    ///
    /// # Example
    /// ```
    /// use epd_pack::Rgb;
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(red.packed(), 0xFF0000);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Read the RGB part of an RGBA pixel. The alpha byte is ignored.
    ///
    /// # Panics
    ///
    /// Panics if `pixel` is shorter than 3 bytes.
    #[inline]
    pub fn from_rgba(pixel: &[u8]) -> Self {
        Self::new(pixel[0], pixel[1], pixel[2])
    }

    /// Convert to an RGBA pixel with full opacity.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// The 24-bit packed value `r << 16 | g << 8 | b` used as the palette
    /// lookup key.
    #[inline]
    pub const fn packed(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.packed())
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive,
    /// with surrounding whitespace trimmed.
    ///
    /// ```
    /// use epd_pack::Rgb;
    ///
    /// let orange: Rgb = "#FF8000".parse().unwrap();
    /// assert_eq!(orange, Rgb::new(255, 128, 0));
    ///
    /// let red: Rgb = "f00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        let digits = s
            .bytes()
            .map(hex_digit)
            .collect::<Result<Vec<u8>, _>>()?;
        match digits[..] {
            // 0xF * 17 == 0xFF
            [r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::new(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

fn hex_digit(b: u8) -> Result<u8, ParseColorError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(ParseColorError::InvalidHex(b as char)),
    }
}
