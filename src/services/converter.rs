use std::sync::Arc;

use epd_pack::{pack, PackedImage, Palette};

use crate::error::ConvertError;
use crate::models::{AppConfig, DisplayConfig};

/// Converts remapped RGBA frames into the byte format of a named display type
///
/// Holds no per-call state, so one instance can be shared between threads.
pub struct Converter {
    config: Arc<AppConfig>,
}

impl Converter {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Look up a display type
    pub fn display(&self, name: &str) -> Result<&DisplayConfig, ConvertError> {
        self.config
            .get_display(name)
            .ok_or_else(|| ConvertError::UnknownDisplay(name.to_string()))
    }

    /// Resolve the configured palette of a display
    pub fn palette_for(&self, display: &DisplayConfig) -> Result<Palette, ConvertError> {
        let name = display.palette_name();
        let colors = self
            .config
            .get_palette(name)
            .ok_or_else(|| ConvertError::UnknownPalette(name.to_string()))?;

        let palette = Palette::from_hex(colors).map_err(|source| ConvertError::Palette {
            name: name.to_string(),
            source,
        })?;
        palette
            .check_len(display.spec.encoding.color_count())
            .map_err(|source| ConvertError::Palette {
                name: name.to_string(),
                source,
            })?;
        Ok(palette)
    }

    /// Convert a frame for a display type using its configured palette
    ///
    /// `planes` is the channel count reported by the image decoder and is
    /// passed through unused.
    pub fn convert<R: AsRef<[u8]>>(
        &self,
        display_name: &str,
        planes: u32,
        rows: &[R],
    ) -> Result<PackedImage, ConvertError> {
        let display = self.display(display_name)?;
        let palette = self.palette_for(display)?;
        self.convert_with_palette(display_name, &palette, planes, rows)
    }

    /// Convert a frame for a display type with a caller-supplied palette,
    /// e.g. one read from a palette image with [`Palette::from_rgba_rows`]
    pub fn convert_with_palette<R: AsRef<[u8]>>(
        &self,
        display_name: &str,
        palette: &Palette,
        _planes: u32,
        rows: &[R],
    ) -> Result<PackedImage, ConvertError> {
        let spec = self.display(display_name)?.spec;

        match pack(spec.encoding, spec.width, spec.height, palette, rows) {
            Ok(packed) => {
                tracing::debug!(
                    display = display_name,
                    encoding = %spec.encoding,
                    width = spec.width,
                    height = spec.height,
                    bytes = packed.len(),
                    "Frame converted"
                );
                Ok(packed)
            }
            Err(e) => {
                tracing::warn!(display = display_name, %e, "Frame conversion failed");
                Err(e.into())
            }
        }
    }

    /// Convert a frame and return the planes back to back
    pub fn convert_bytes<R: AsRef<[u8]>>(
        &self,
        display_name: &str,
        planes: u32,
        rows: &[R],
    ) -> Result<Vec<u8>, ConvertError> {
        self.convert(display_name, planes, rows)
            .map(PackedImage::into_bytes)
    }

    /// Get the config
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
