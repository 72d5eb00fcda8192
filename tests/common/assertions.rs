//! Assertion helpers for tests.

use epd_pack::{unpack, EncodingMode, Palette};
use pretty_assertions::assert_eq;

/// Assert a buffer has the size of one full frame
pub fn assert_frame_len(bytes: &[u8], mode: EncodingMode, width: usize, height: usize) {
    let expected = mode.packed_len(width, height).expect("Frame size overflow");
    assert_eq!(
        bytes.len(),
        expected,
        "Expected {} frame of {}x{} to be {} bytes",
        mode,
        width,
        height,
        expected
    );
}

/// Assert that decoding `bytes` gives back exactly the RGBA rows that were packed
pub fn assert_round_trip(
    bytes: &[u8],
    mode: EncodingMode,
    width: usize,
    height: usize,
    palette: &Palette,
    rows: &[Vec<u8>],
) {
    let decoded = unpack(mode, width, height, palette, bytes).expect("Packed frame should decode");
    assert_eq!(decoded.to_rgba().as_slice(), rows, "Decoded frame differs");
}
