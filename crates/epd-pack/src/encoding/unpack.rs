//! Inverse of the packing loop, for previews and verification.

use super::mode::EncodingMode;
use super::packer::plane_len;
use crate::api::{PackError, ShapeError};
use crate::output::DecodedImage;
use crate::palette::Palette;

/// Read color codes back out of a packed buffer.
///
/// `bytes` is the concatenation of all planes, exactly as produced by
/// [`PackedImage::into_bytes()`](crate::PackedImage::into_bytes).
///
/// # Errors
///
/// - [`PackError::InvalidPalette`] if the palette length differs from the
///   mode's color count
/// - [`PackError::InvalidImageShape`] if the width is unaligned or `bytes`
///   has the wrong length
/// - [`PackError::UnknownField`] if a pixel's fields match no color code,
///   e.g. both the BW and Red bits set in red/white/black planes
pub fn unpack(
    mode: EncodingMode,
    width: usize,
    height: usize,
    palette: &Palette,
    bytes: &[u8],
) -> Result<DecodedImage, PackError> {
    let layout = mode.layout();
    palette.check_len(layout.colors)?;
    let plane_len = plane_len(mode, width, height)?;
    let expected = plane_len * layout.planes.len();
    if bytes.len() != expected {
        return Err(ShapeError::BufferLength {
            expected,
            actual: bytes.len(),
        }
        .into());
    }

    let planes: Vec<&[u8]> = if plane_len == 0 {
        vec![&[][..]; layout.planes.len()]
    } else {
        bytes.chunks_exact(plane_len).collect()
    };
    let table = layout.decode_table();
    let bits = layout.bits_per_pixel as usize;
    let pixels_per_byte = layout.pixels_per_byte();
    let mask = layout.field_mask();

    let mut codes = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let offset = (y * width + x) / pixels_per_byte;
            let shift = (pixels_per_byte - 1 - x % pixels_per_byte) * bits;
            let value = layout.combine(planes.iter().map(|plane| (plane[offset] >> shift) & mask));
            let code = table[value].ok_or(PackError::UnknownField { x, y, value })?;
            codes.push(code);
        }
    }

    Ok(DecodedImage::new(codes, width, height, palette.clone()))
}
