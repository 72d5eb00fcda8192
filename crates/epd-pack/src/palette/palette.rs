//! Palette struct with exact-match color lookup.
//!
//! A display controller only understands a handful of color codes, and the
//! image handed to the packer has already been remapped to the display's
//! colors. The palette therefore answers one question: which index has
//! exactly this RGB value?

use std::collections::HashMap;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgb;

/// An ordered list of display colors with a reverse lookup table.
///
/// The position of a color in the palette is its color code. The meaning
/// of each position (index 0 = black, and so on) is a convention between
/// the caller and the display; the palette does not interpret it.
///
/// Lookup is by exact equality of the 24-bit packed RGB value. There is no
/// tolerance and no nearest-color fallback.
///
/// # Example
///
/// ```
/// use epd_pack::{Palette, Rgb};
///
/// let palette = Palette::new(&[
///     Rgb::new(0, 0, 0),
///     Rgb::new(255, 255, 255),
///     Rgb::new(255, 0, 0),
/// ]).unwrap();
///
/// assert_eq!(palette.classify(Rgb::new(255, 0, 0)), Some(2));
/// assert_eq!(palette.classify(Rgb::new(254, 0, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
    lookup: HashMap<u32, usize>,
}

impl Palette {
    /// Create a palette from an ordered list of colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::DuplicateColor`] if two entries share the same
    /// RGB value, since a pixel of that color could not be assigned a single
    /// code.
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        let mut lookup = HashMap::with_capacity(colors.len());
        for (i, color) in colors.iter().enumerate() {
            if lookup.insert(color.packed(), i).is_some() {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self {
            colors: colors.to_vec(),
            lookup,
        })
    }

    /// Create a palette that must contain exactly `expected` colors.
    ///
    /// The length is checked before duplicates, so a palette of the wrong
    /// size always reports [`PaletteError::WrongLength`].
    pub fn with_len(colors: &[Rgb], expected: usize) -> Result<Self, PaletteError> {
        if colors.len() != expected {
            return Err(PaletteError::WrongLength {
                expected,
                actual: colors.len(),
            });
        }
        Self::new(colors)
    }

    /// Create a palette from hex color strings such as `"#FF0000"` or `"#F00"`.
    ///
    /// ```
    /// use epd_pack::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000000", "#FFFFFF", "#FF0000"]).unwrap();
    /// assert_eq!(palette.len(), 3);
    /// ```
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        let colors = colors
            .iter()
            .map(|s| Rgb::from_str(s.as_ref()).map_err(PaletteError::ParseColor))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&colors)
    }

    /// Create a palette from the RGBA rows of a palette image.
    ///
    /// Palette images are one pixel wide and one row per color: row `i`
    /// holds color `i`. Only the first pixel of each row is read, and its
    /// alpha byte is ignored.
    ///
    /// ```
    /// use epd_pack::{Palette, Rgb};
    ///
    /// let rows = vec![vec![0u8, 0, 0, 255], vec![255, 255, 255, 255]];
    /// let palette = Palette::from_rgba_rows(&rows).unwrap();
    /// assert_eq!(palette.color(1), Rgb::new(255, 255, 255));
    /// ```
    pub fn from_rgba_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, PaletteError> {
        let colors = rows
            .iter()
            .enumerate()
            .map(|(row, bytes)| {
                let bytes = bytes.as_ref();
                if bytes.len() < 4 {
                    Err(PaletteError::ShortRow {
                        row,
                        len: bytes.len(),
                    })
                } else {
                    Ok(Rgb::from_rgba(bytes))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&colors)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no colors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Check that the palette has exactly `expected` colors.
    pub fn check_len(&self, expected: usize) -> Result<(), PaletteError> {
        if self.len() == expected {
            Ok(())
        } else {
            Err(PaletteError::WrongLength {
                expected,
                actual: self.len(),
            })
        }
    }

    /// Get the color for a color code.
    ///
    /// # Panics
    ///
    /// Panics if `code` is out of range.
    #[inline]
    pub fn color(&self, code: usize) -> Rgb {
        self.colors[code]
    }

    /// All colors in code order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Find the color code of an exactly matching palette entry.
    #[inline]
    pub fn classify(&self, color: Rgb) -> Option<usize> {
        self.lookup.get(&color.packed()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ParseColorError;

    fn rwb() -> [Rgb; 3] {
        [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(255, 0, 0),
        ]
    }

    #[test]
    fn test_palette_basic_construction() {
        let palette = Palette::new(&rwb()).unwrap();
        assert_eq!(palette.len(), 3);
        assert!(!palette.is_empty());
        assert_eq!(palette.colors(), &rwb());
    }

    #[test]
    fn test_classify_exact_match_only() {
        let palette = Palette::new(&rwb()).unwrap();
        assert_eq!(palette.classify(Rgb::new(0, 0, 0)), Some(0));
        assert_eq!(palette.classify(Rgb::new(255, 255, 255)), Some(1));
        assert_eq!(palette.classify(Rgb::new(255, 0, 0)), Some(2));
        // One LSB off is not a match
        assert_eq!(palette.classify(Rgb::new(1, 0, 0)), None);
        assert_eq!(palette.classify(Rgb::new(255, 255, 254)), None);
    }

    #[test]
    fn test_palette_duplicate_rejected() {
        let colors = [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(255, 0, 0),
        ];
        let result = Palette::new(&colors);
        assert_eq!(result, Err(PaletteError::DuplicateColor { index: 2 }));
    }

    #[test]
    fn test_with_len_checks_length_first() {
        // Both too short and containing a duplicate: the length wins
        let colors = [Rgb::new(0, 0, 0), Rgb::new(0, 0, 0)];
        let result = Palette::with_len(&colors, 3);
        assert_eq!(
            result,
            Err(PaletteError::WrongLength {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_check_len() {
        let palette = Palette::new(&rwb()).unwrap();
        assert!(palette.check_len(3).is_ok());
        assert_eq!(
            palette.check_len(7),
            Err(PaletteError::WrongLength {
                expected: 7,
                actual: 3
            })
        );
    }

    #[test]
    fn test_from_hex() {
        let palette = Palette::from_hex(&["#000", "#FFFFFF", "ff0000"]).unwrap();
        assert_eq!(palette.colors(), &rwb());
    }

    #[test]
    fn test_from_hex_invalid() {
        let result = Palette::from_hex(&["#000000", "#12345"]);
        assert_eq!(
            result,
            Err(PaletteError::ParseColor(ParseColorError::InvalidLength))
        );
    }

    #[test]
    fn test_from_rgba_rows_reads_first_pixel() {
        // Extra pixels after the first one are ignored
        let rows = vec![
            vec![0u8, 0, 0, 255, 9, 9, 9, 9],
            vec![255, 255, 255, 0],
            vec![255, 0, 0, 128],
        ];
        let palette = Palette::from_rgba_rows(&rows).unwrap();
        assert_eq!(palette.colors(), &rwb());
    }

    #[test]
    fn test_from_rgba_rows_short_row() {
        let rows: Vec<&[u8]> = vec![&[0, 0, 0, 255], &[255, 255]];
        assert_eq!(
            Palette::from_rgba_rows(&rows),
            Err(PaletteError::ShortRow { row: 1, len: 2 })
        );
    }
}
