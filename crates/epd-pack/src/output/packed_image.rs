//! PackedImage: the byte planes produced by a conversion.

use crate::encoding::EncodingMode;

/// Packed output of one conversion.
///
/// Holds one byte buffer per plane in output order. Most controllers take
/// the planes back to back, which is what [`into_bytes()`](Self::into_bytes)
/// returns; drivers that upload planes with separate commands can use
/// [`plane()`](Self::plane) instead.
///
/// # Example
///
/// ```
/// use epd_pack::{convert, EncodingMode, Rgb};
///
/// let palette = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), Rgb::new(255, 0, 0)];
/// let rows = vec![[255u8, 0, 0, 255].repeat(8)];
/// let packed = convert(EncodingMode::RedWhiteBlack, 8, 1, &palette, 4, &rows).unwrap();
///
/// assert_eq!(packed.plane_count(), 2);
/// assert_eq!(packed.plane(0), &[0x00]); // BW
/// assert_eq!(packed.plane(1), &[0xFF]); // Red
/// assert_eq!(packed.into_bytes(), vec![0x00, 0xFF]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedImage {
    mode: EncodingMode,
    width: usize,
    height: usize,
    planes: Vec<Vec<u8>>,
}

impl PackedImage {
    pub(crate) fn new(mode: EncodingMode, width: usize, height: usize, planes: Vec<Vec<u8>>) -> Self {
        debug_assert_eq!(planes.len(), mode.plane_count());
        Self {
            mode,
            width,
            height,
            planes,
        }
    }

    /// Encoding the planes were packed with.
    #[inline]
    pub fn mode(&self) -> EncodingMode {
        self.mode
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

    /// Number of planes.
    #[inline]
    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    /// Bytes of one plane.
    ///
    /// # Panics
    ///
    /// Panics if `index >= plane_count()`.
    #[inline]
    pub fn plane(&self, index: usize) -> &[u8] {
        &self.planes[index]
    }

    /// All planes in output order.
    #[inline]
    pub fn planes(&self) -> &[Vec<u8>] {
        &self.planes
    }

    /// Total byte length across planes.
    pub fn len(&self) -> usize {
        self.planes.iter().map(Vec::len).sum()
    }

    /// Returns true for a zero-sized image.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take ownership of the separate planes.
    pub fn into_planes(self) -> Vec<Vec<u8>> {
        self.planes
    }

    /// Concatenate the planes in output order.
    pub fn into_bytes(self) -> Vec<u8> {
        if self.planes.len() == 1 {
            return self.planes.into_iter().next().unwrap_or_default();
        }
        self.planes.concat()
    }
}
