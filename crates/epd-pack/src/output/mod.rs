//! Output types.
//!
//! - [`PackedImage`]: the byte planes a conversion produces
//! - [`DecodedImage`]: color codes recovered from packed bytes

mod decoded_image;
mod packed_image;

pub use decoded_image::DecodedImage;
pub use packed_image::PackedImage;
