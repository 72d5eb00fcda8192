//! epd-conv - frame conversion for e-paper displays
//!
//! Maps display type names to frame formats and palettes, and packs
//! palette-remapped RGBA frames into the bytes each controller expects.
//! The packing itself lives in the `epd-pack` crate.

pub mod error;
pub mod models;
pub mod services;

pub use error::{ConfigError, ConvertError};
pub use models::{AppConfig, DisplayConfig, DisplaySpec};
pub use services::Converter;
