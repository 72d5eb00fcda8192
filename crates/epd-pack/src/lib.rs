//! epd-pack: exact-palette bitplane packing for e-paper displays
//!
//! E-paper controllers take frame data as a few bits per pixel, each field
//! holding a display-specific color code, packed most significant bits
//! first and sometimes split into one buffer per color plane. This crate
//! turns already-remapped RGBA rows into those buffers.
//!
//! # Quick Start
//!
//! ```
//! use epd_pack::{img_to_rwb, Rgb};
//!
//! let palette = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), Rgb::new(255, 0, 0)];
//!
//! // One row of 8 pixels: white, then 6 black, then red
//! let mut row = vec![255u8, 255, 255, 255];
//! row.extend([0, 0, 0, 255].repeat(6));
//! row.extend([255, 0, 0, 255]);
//!
//! let bytes = img_to_rwb(8, 1, &palette, 4, &[row]).unwrap();
//! assert_eq!(bytes, vec![0b1000_0000, 0b0000_0001]); // BW plane, Red plane
//! ```
//!
//! # Matching
//!
//! Every pixel must equal a palette color exactly (alpha is ignored). There
//! is no nearest-color search and no dithering: quantize the image to the
//! display palette before calling in. The first pixel that matches nothing
//! fails the whole call with [`PackError::UnknownColor`].
//!
//! # Formats
//!
//! | Entry point | Mode | Palette | Output |
//! |-------------|------|---------|--------|
//! | [`img_to_7c`] | [`EncodingMode::SevenColor`] | black, white, green, blue, red, yellow, orange | code per nibble, `w*h/2` bytes |
//! | [`img_to_rwb`] | [`EncodingMode::RedWhiteBlack`] | black, white, red | BW plane then Red plane, 1 bit each, `2*w*h/8` bytes |
//! | [`img_to_rwb4`] | [`EncodingMode::RedWhiteBlack4`] | black, white, red | `0b0000` / `0b0011` / `0b0100` per nibble, `w*h/2` bytes |
//!
//! ```text
//!   7c / rwb4 byte:    [ pixel x   | pixel x+1 ]
//!                        bits 7..4   bits 3..0
//!
//!   rwb plane byte:    [ x  x+1  x+2  x+3  x+4  x+5  x+6  x+7 ]
//!                        bit 7                          bit 0
//! ```
//!
//! Width must be a multiple of the pixels packed per byte (2 or 8); other
//! widths are rejected with [`PackError::InvalidImageShape`] instead of
//! dropping a partial byte.
//!
//! # Decoding
//!
//! [`unpack()`] reverses any mode into a [`DecodedImage`] of color codes,
//! which can be rendered back to RGBA for previews.

#![allow(clippy::module_inception)]

pub mod api;
pub mod color;
pub mod encoding;
pub mod output;
pub mod palette;


pub use api::{convert, img_to_7c, img_to_rwb, img_to_rwb4, PackError, ShapeError};
pub use color::Rgb;
pub use encoding::{pack, unpack, EncodingMode, ParseModeError};
pub use output::{DecodedImage, PackedImage};
pub use palette::{Palette, PaletteError, ParseColorError};
