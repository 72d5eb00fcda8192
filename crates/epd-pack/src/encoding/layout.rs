//! Per-mode bit layouts.
//!
//! Every encoding is described by the same three facts: how many palette
//! colors it takes, how many bits one pixel occupies in each output plane,
//! and which field value each color code writes into each plane. The packer
//! and the decoder are driven entirely by this table.

/// Bit layout of one encoding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layout {
    /// Number of palette colors the mode accepts.
    pub colors: usize,
    /// Field width of one pixel in every plane.
    pub bits_per_pixel: u32,
    /// One entry per output plane, in output order. Each entry maps a color
    /// code (the index) to the field value written for that code.
    pub planes: &'static [&'static [u8]],
}

impl Layout {
    /// Pixels sharing one output byte.
    #[inline]
    pub const fn pixels_per_byte(&self) -> usize {
        8 / self.bits_per_pixel as usize
    }

    /// Mask selecting one pixel field.
    #[inline]
    pub const fn field_mask(&self) -> u8 {
        ((1u16 << self.bits_per_pixel) - 1) as u8
    }

    /// Combine the per-plane fields of one pixel into a single key, plane 0
    /// in the most significant position.
    #[inline]
    pub fn combine(&self, fields: impl IntoIterator<Item = u8>) -> usize {
        fields
            .into_iter()
            .fold(0usize, |key, f| (key << self.bits_per_pixel) | f as usize)
    }

    /// Reverse table from combined field key to color code.
    pub fn decode_table(&self) -> Vec<Option<u8>> {
        let key_bits = self.bits_per_pixel as usize * self.planes.len();
        let mut table = vec![None; 1 << key_bits];
        for code in 0..self.colors {
            let key = self.combine(self.planes.iter().map(|plane| plane[code]));
            table[key] = Some(code as u8);
        }
        table
    }
}

/// Black, white, green, blue, red, yellow, orange. The code is written
/// as-is into a nibble.
pub(crate) const SEVEN_COLOR: Layout = Layout {
    colors: 7,
    bits_per_pixel: 4,
    planes: &[&[0, 1, 2, 3, 4, 5, 6]],
};

/// Black, white, red as two 1-bit planes: BW (1 = white) then Red (1 = red).
pub(crate) const RED_WHITE_BLACK: Layout = Layout {
    colors: 3,
    bits_per_pixel: 1,
    planes: &[&[0, 1, 0], &[0, 0, 1]],
};

/// Black, white, red in the controller's 4-bit pixel format.
pub(crate) const RED_WHITE_BLACK_4: Layout = Layout {
    colors: 3,
    bits_per_pixel: 4,
    planes: &[&[0b0000, 0b0011, 0b0100]],
};
