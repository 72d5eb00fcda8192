//! Color type
//!
//! [`Rgb`] is the only color representation in the crate. Matching is exact,
//! so there is no color space math here.

mod rgb;

pub use rgb::Rgb;
