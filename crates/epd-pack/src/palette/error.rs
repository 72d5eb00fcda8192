//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Character that is not a hex digit, including a sign
    #[error("invalid hex character: {0:?}")]
    InvalidHex(char),
}

/// Error type for palette validation.
///
/// Returned when a palette cannot be used for a given encoding: the color
/// count differs from what the encoding requires, two entries share the
/// same RGB value, or an entry could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// Palette length differs from the encoding's color count
    #[error("palette has {actual} colors, encoding requires {expected}")]
    WrongLength {
        /// Color count required by the encoding
        expected: usize,
        /// Color count supplied
        actual: usize,
    },
    /// Duplicate color found at the specified index
    #[error("duplicate color found at index {index}")]
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
    /// A palette image row is too short to hold one RGBA pixel
    #[error("palette row {row} is {len} bytes, expected at least 4")]
    ShortRow {
        /// Row index in the palette image
        row: usize,
        /// Byte length of that row
        len: usize,
    },
    /// Invalid hex color string
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
}
