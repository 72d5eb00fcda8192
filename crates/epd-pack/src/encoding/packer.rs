//! The shared packing loop.
//!
//! Every mode is packed by the same pass: classify each pixel against the
//! palette, shift its per-plane field into an accumulator MSB first, and
//! store the accumulator once a byte's worth of pixels has gone in.

use super::mode::EncodingMode;
use crate::api::{PackError, ShapeError};
use crate::color::Rgb;
use crate::output::PackedImage;
use crate::palette::Palette;

/// Validate width alignment and total size, returning the plane length.
pub(crate) fn plane_len(
    mode: EncodingMode,
    width: usize,
    height: usize,
) -> Result<usize, ShapeError> {
    let pixels_per_byte = mode.pixels_per_byte();
    if width % pixels_per_byte != 0 {
        return Err(ShapeError::UnalignedWidth {
            width,
            pixels_per_byte,
        });
    }
    mode.packed_len(width, height)
        .and_then(|_| mode.plane_len(width, height))
        .ok_or(ShapeError::TooLarge { width, height })
}

/// Check that `rows` holds exactly `height` rows of `width` RGBA pixels.
pub(crate) fn check_rows<R: AsRef<[u8]>>(
    width: usize,
    height: usize,
    rows: &[R],
) -> Result<(), ShapeError> {
    if rows.len() != height {
        return Err(ShapeError::RowCount {
            expected: height,
            actual: rows.len(),
        });
    }
    let row_bytes = width
        .checked_mul(4)
        .ok_or(ShapeError::TooLarge { width, height })?;
    for (row, bytes) in rows.iter().enumerate() {
        let actual = bytes.as_ref().len();
        if actual != row_bytes {
            return Err(ShapeError::RowLength {
                row,
                expected: row_bytes,
                actual,
            });
        }
    }
    Ok(())
}

/// Pack RGBA rows into the planes of `mode`.
///
/// The palette must already be resolved; its length is checked against the
/// mode here. All validation runs before the output planes are allocated.
/// An unknown color aborts the pass and the partly filled planes are
/// dropped.
///
/// # Errors
///
/// - [`PackError::InvalidPalette`] if the palette length differs from
///   [`EncodingMode::color_count()`]
/// - [`PackError::InvalidImageShape`] if the row count, a row length or the
///   width alignment is wrong
/// - [`PackError::UnknownColor`] for the first pixel (row-major) whose RGB
///   is not in the palette
pub fn pack<R: AsRef<[u8]>>(
    mode: EncodingMode,
    width: usize,
    height: usize,
    palette: &Palette,
    rows: &[R],
) -> Result<PackedImage, PackError> {
    let layout = mode.layout();
    palette.check_len(layout.colors)?;
    let plane_len = plane_len(mode, width, height)?;
    check_rows(width, height, rows)?;

    let bits = layout.bits_per_pixel;
    let pixels_per_byte = layout.pixels_per_byte();
    let mut planes = vec![vec![0u8; plane_len]; layout.planes.len()];
    let mut acc = vec![0u8; layout.planes.len()];

    for (y, row) in rows.iter().enumerate() {
        acc.fill(0);
        for (x, pixel) in row.as_ref().chunks_exact(4).enumerate() {
            let color = Rgb::from_rgba(pixel);
            let code = palette
                .classify(color)
                .ok_or(PackError::UnknownColor { x, y, color })?;

            for (value, fields) in acc.iter_mut().zip(layout.planes) {
                *value = (*value << bits) | fields[code];
            }

            if x % pixels_per_byte == pixels_per_byte - 1 {
                let offset = (y * width + x) / pixels_per_byte;
                for (plane, value) in planes.iter_mut().zip(acc.iter_mut()) {
                    plane[offset] = *value;
                    *value = 0;
                }
            }
        }
    }

    Ok(PackedImage::new(mode, width, height, planes))
}
