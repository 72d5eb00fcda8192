//! Public API for the epd-pack crate.
//!
//! This module provides the per-mode conversion entry points and the
//! [`PackError`] unified error type.

mod convert;
mod error;

pub use convert::{convert, img_to_7c, img_to_rwb, img_to_rwb4};
pub use error::{PackError, ShapeError};
