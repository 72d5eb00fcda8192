//! DecodedImage: color codes recovered from packed planes.

use crate::palette::Palette;

/// Color codes read back out of a packed buffer.
///
/// Stores one code per pixel in row-major order together with the palette
/// the buffer was decoded against, so the image can be rendered back to
/// RGBA for previews or comparison.
///
/// # Example
///
/// ```
/// use epd_pack::{unpack, EncodingMode, Palette, Rgb};
///
/// let palette = Palette::new(&[
///     Rgb::new(0, 0, 0),
///     Rgb::new(255, 255, 255),
///     Rgb::new(255, 0, 0),
/// ]).unwrap();
///
/// let decoded = unpack(EncodingMode::RedWhiteBlack4, 2, 1, &palette, &[0x34]).unwrap();
/// assert_eq!(decoded.codes(), &[1, 2]);
/// assert_eq!(decoded.to_rgba(), vec![vec![255, 255, 255, 255, 255, 0, 0, 255]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    codes: Vec<u8>,
    width: usize,
    height: usize,
    palette: Palette,
}

impl DecodedImage {
    pub(crate) fn new(codes: Vec<u8>, width: usize, height: usize, palette: Palette) -> Self {
        debug_assert_eq!(codes.len(), width * height);
        Self {
            codes,
            width,
            height,
            palette,
        }
    }

    /// Color codes, one per pixel, row-major.
    #[inline]
    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Palette the codes index into.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Code of the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn code_at(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.codes[y * self.width + x]
    }

    /// Render to RGBA rows using the palette colors, fully opaque.
    ///
    /// The result has the same shape the packer accepts, so it can be fed
    /// straight back into a conversion.
    pub fn to_rgba(&self) -> Vec<Vec<u8>> {
        if self.width == 0 {
            return vec![Vec::new(); self.height];
        }
        self.codes
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .flat_map(|&code| self.palette.color(code as usize).to_rgba())
                    .collect()
            })
            .collect()
    }
}
