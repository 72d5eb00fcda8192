//! Encoding modes and the packing/unpacking passes.
//!
//! Each [`EncodingMode`] is backed by a small layout table (color count,
//! bits per pixel, per-plane field values). [`pack()`] and [`unpack()`]
//! are generic over that table, so adding a display format means adding a
//! table entry, not another packing loop.

mod layout;
mod mode;
mod packer;
mod unpack;

pub use mode::{EncodingMode, ParseModeError};
pub use packer::pack;
pub use unpack::unpack;
