//! Unified error type for the epd-pack public API.
//!
//! [`PackError`] covers every way a conversion or a decode can fail. All
//! failures are deterministic: the same input fails the same way every time.

use thiserror::Error;

use crate::color::Rgb;
use crate::palette::PaletteError;

/// Image dimensions or buffer sizes that do not fit the encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Number of pixel rows differs from the declared height
    #[error("expected {expected} rows, got {actual}")]
    RowCount {
        /// Declared height
        expected: usize,
        /// Rows supplied
        actual: usize,
    },
    /// A row's byte length is not `width * 4`
    #[error("row {row} is {actual} bytes, expected {expected}")]
    RowLength {
        /// Row index
        row: usize,
        /// `width * 4`
        expected: usize,
        /// Bytes supplied for that row
        actual: usize,
    },
    /// Width does not fill a whole number of output bytes
    #[error("width {width} is not a multiple of {pixels_per_byte}")]
    UnalignedWidth {
        /// Declared width
        width: usize,
        /// Pixels per output byte for the encoding
        pixels_per_byte: usize,
    },
    /// Packed buffer length does not match the encoding's size for the image
    #[error("packed buffer is {actual} bytes, expected {expected}")]
    BufferLength {
        /// Length implied by width, height and encoding
        expected: usize,
        /// Length supplied
        actual: usize,
    },
    /// Width times height does not fit in memory arithmetic
    #[error("image dimensions {width}x{height} are too large")]
    TooLarge {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
    },
}

/// Error type for conversions and decodes.
///
/// # Example
///
/// ```
/// use epd_pack::{img_to_rwb4, PackError, Rgb};
///
/// let palette = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
/// let rows = vec![vec![0u8; 8]];
/// let result = img_to_rwb4(2, 1, &palette, 4, &rows);
/// assert!(matches!(result, Err(PackError::InvalidPalette(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// Palette is unusable for the encoding
    #[error("invalid palette: {0}")]
    InvalidPalette(#[from] PaletteError),
    /// Image shape does not match the declared dimensions or encoding
    #[error("invalid image shape: {0}")]
    InvalidImageShape(#[from] ShapeError),
    /// A pixel's color is not in the palette
    #[error("unknown colour: x={x} y={y} c={color}")]
    UnknownColor {
        /// Pixel column
        x: usize,
        /// Pixel row
        y: usize,
        /// The pixel's RGB value
        color: Rgb,
    },
    /// A packed field does not correspond to any color code
    ///
    /// `value` holds the field of every plane, plane 0 most significant.
    #[error("undecodable field: x={x} y={y} value={value:#x}")]
    UnknownField {
        /// Pixel column
        x: usize,
        /// Pixel row
        y: usize,
        /// Combined field value
        value: usize,
    },
}
