//! Conversion entry points, one per display format.
//!
//! All entry points share the signature
//! `(width, height, palette, planes, rows)`. `planes` is the channel count
//! reported by the image decoder; it is accepted so every mode has the same
//! call shape, and the packing does not depend on it.

use super::error::PackError;
use crate::color::Rgb;
use crate::encoding::{pack, EncodingMode};
use crate::output::PackedImage;
use crate::palette::Palette;

/// Convert RGBA rows with a caller-supplied color list.
///
/// Resolves `palette` against the mode's color count, then packs. See
/// [`pack()`](crate::pack) for the error conditions.
///
/// ```
/// use epd_pack::{convert, EncodingMode, Rgb};
///
/// let palette = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), Rgb::new(255, 0, 0)];
/// let rows = vec![[255u8, 255, 255, 255].repeat(16); 2];
/// let packed = convert(EncodingMode::RedWhiteBlack, 16, 2, &palette, 4, &rows).unwrap();
/// assert_eq!(packed.len(), 8);
/// ```
pub fn convert<R: AsRef<[u8]>>(
    mode: EncodingMode,
    width: usize,
    height: usize,
    palette: &[Rgb],
    _planes: u32,
    rows: &[R],
) -> Result<PackedImage, PackError> {
    let palette = Palette::with_len(palette, mode.color_count())?;
    pack(mode, width, height, &palette, rows)
}

/// Seven-color displays: one nibble per pixel, `height * width / 2` bytes.
///
/// Palette order is black, white, green, blue, red, yellow, orange.
///
/// ```
/// use epd_pack::{img_to_7c, Rgb};
///
/// let palette = [
///     Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), Rgb::new(0, 255, 0),
///     Rgb::new(0, 0, 255), Rgb::new(255, 0, 0), Rgb::new(255, 255, 0),
///     Rgb::new(255, 128, 0),
/// ];
/// // green, black
/// let rows = vec![vec![0u8, 255, 0, 255, 0, 0, 0, 255]];
/// assert_eq!(img_to_7c(2, 1, &palette, 4, &rows).unwrap(), vec![0x20]);
/// ```
pub fn img_to_7c<R: AsRef<[u8]>>(
    width: usize,
    height: usize,
    palette: &[Rgb],
    planes: u32,
    rows: &[R],
) -> Result<Vec<u8>, PackError> {
    convert(EncodingMode::SevenColor, width, height, palette, planes, rows)
        .map(PackedImage::into_bytes)
}

/// Black/white/red displays with separate planes: the BW plane followed by
/// the Red plane, `2 * height * width / 8` bytes in total.
///
/// Palette order is black, white, red.
pub fn img_to_rwb<R: AsRef<[u8]>>(
    width: usize,
    height: usize,
    palette: &[Rgb],
    planes: u32,
    rows: &[R],
) -> Result<Vec<u8>, PackError> {
    convert(EncodingMode::RedWhiteBlack, width, height, palette, planes, rows)
        .map(PackedImage::into_bytes)
}

/// Black/white/red displays taking 4-bit pixels: `height * width / 2`
/// bytes, black `0b0000`, white `0b0011`, red `0b0100`.
///
/// Palette order is black, white, red.
pub fn img_to_rwb4<R: AsRef<[u8]>>(
    width: usize,
    height: usize,
    palette: &[Rgb],
    planes: u32,
    rows: &[R],
) -> Result<Vec<u8>, PackError> {
    convert(EncodingMode::RedWhiteBlack4, width, height, palette, planes, rows)
        .map(PackedImage::into_bytes)
}
