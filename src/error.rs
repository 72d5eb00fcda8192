use epd_pack::{PackError, PaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Unknown display type: {0}")]
    UnknownDisplay(String),

    #[error("Palette not found: {0}")]
    UnknownPalette(String),

    #[error("Invalid palette {name}: {source}")]
    Palette {
        name: String,
        #[source]
        source: PaletteError,
    },

    #[error("Conversion error: {0}")]
    Pack(#[from] PackError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid palette {name}: {source}")]
    Palette {
        name: String,
        #[source]
        source: PaletteError,
    },

    #[error("Display {display} uses missing palette {palette}")]
    MissingPalette { display: String, palette: String },

    #[error("Display {display} needs {expected} colors, palette {palette} has {actual}")]
    PaletteLength {
        display: String,
        palette: String,
        expected: usize,
        actual: usize,
    },
}
