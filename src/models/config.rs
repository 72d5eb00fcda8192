use epd_pack::{EncodingMode, Palette};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::display_spec::DisplaySpec;
use crate::error::ConfigError;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Named palettes as hex color lists, in color-code order
    #[serde(default)]
    pub palettes: HashMap<String, Vec<String>>,

    /// Display type name to frame format mappings
    #[serde(default)]
    pub displays: HashMap<String, DisplayConfig>,
}

/// Configuration for a display type
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    #[serde(flatten)]
    pub spec: DisplaySpec,

    /// Palette name (defaults to the encoding's palette, see
    /// [`DisplayConfig::default_palette`])
    #[serde(default)]
    pub palette: Option<String>,
}

impl DisplayConfig {
    pub fn new(spec: DisplaySpec) -> Self {
        Self {
            spec,
            palette: None,
        }
    }

    /// Palette used by displays of `encoding` that don't name one
    ///
    /// Both red/white/black formats share the "rwb" colors.
    pub fn default_palette(encoding: EncodingMode) -> &'static str {
        match encoding {
            EncodingMode::SevenColor => "7c",
            EncodingMode::RedWhiteBlack | EncodingMode::RedWhiteBlack4 => "rwb",
        }
    }

    /// Name of the palette this display uses
    pub fn palette_name(&self) -> &str {
        self.palette
            .as_deref()
            .unwrap_or_else(|| Self::default_palette(self.spec.encoding))
    }
}

impl AppConfig {
    /// Parse a YAML document and merge it over the defaults
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let loaded: Self = serde_yaml::from_str(content)?;
        let config = Self::default().merged(loaded);
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load the file named by `CONFIG_FILE`, falling back to defaults
    pub fn from_env() -> Self {
        let path = std::env::var_os("CONFIG_FILE");
        Self::from_path_or_default(path.as_deref().map(Path::new))
    }

    /// Load `path` if given; use the defaults when it is absent, missing or
    /// invalid
    pub fn from_path_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::info!("No config file given, using built-in displays");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    displays = config.displays.len(),
                    palettes = config.palettes.len(),
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Entries in `other` replace same-named entries in `self`
    pub fn merged(mut self, other: Self) -> Self {
        self.palettes.extend(other.palettes);
        self.displays.extend(other.displays);
        self
    }

    /// Check that every palette parses and every display has a usable palette
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut palettes = HashMap::with_capacity(self.palettes.len());
        for (name, colors) in &self.palettes {
            let palette = Palette::from_hex(colors).map_err(|source| ConfigError::Palette {
                name: name.clone(),
                source,
            })?;
            palettes.insert(name.as_str(), palette);
        }

        for (display, config) in &self.displays {
            let name = config.palette_name();
            let palette = palettes
                .get(name)
                .ok_or_else(|| ConfigError::MissingPalette {
                    display: display.clone(),
                    palette: name.to_string(),
                })?;
            let expected = config.spec.encoding.color_count();
            if palette.len() != expected {
                return Err(ConfigError::PaletteLength {
                    display: display.clone(),
                    palette: name.to_string(),
                    expected,
                    actual: palette.len(),
                });
            }
        }

        Ok(())
    }

    /// Get the configuration for a display type
    pub fn get_display(&self, name: &str) -> Option<&DisplayConfig> {
        self.displays.get(name)
    }

    /// Get a palette's hex colors by name
    pub fn get_palette(&self, name: &str) -> Option<&[String]> {
        self.palettes.get(name).map(Vec::as_slice)
    }
}

fn hex_list(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| c.to_string()).collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut palettes = HashMap::new();
        // Black, white, green, blue, red, yellow, orange
        palettes.insert(
            "7c".to_string(),
            hex_list(&[
                "#000000", "#FFFFFF", "#00FF00", "#0000FF", "#FF0000", "#FFFF00", "#FF8000",
            ]),
        );
        // Black, white, red
        palettes.insert(
            "rwb".to_string(),
            hex_list(&["#000000", "#FFFFFF", "#FF0000"]),
        );

        let displays = DisplaySpec::KNOWN
            .iter()
            .map(|&(name, spec)| (name.to_string(), DisplayConfig::new(spec)))
            .collect();

        Self { palettes, displays }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.displays.len(), 4);
        assert!(config.palettes.contains_key("7c"));
        assert!(config.palettes.contains_key("rwb"));

        let rwb4 = config.get_display("epd_7in5_rwb4_640x384").unwrap();
        assert_eq!(rwb4.spec, DisplaySpec::EPD_7IN5_RWB4);
        assert_eq!(rwb4.palette_name(), "rwb");

        let seven = config.get_display("epd_5in65_7c_600x448").unwrap();
        assert_eq!(seven.palette_name(), "7c");
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r##"
palettes:
  bwr-muted: ["#101010", "#F0F0F0", "#C00000"]
displays:
  epd_2in9_rwb_128x296:
    width: 128
    height: 296
    encoding: rwb
    palette: bwr-muted
"##;

        let config = AppConfig::from_yaml_str(yaml).unwrap();

        // Defaults are kept alongside the new entries
        assert_eq!(config.displays.len(), 5);
        assert!(config.palettes.contains_key("rwb"));

        let display = config.get_display("epd_2in9_rwb_128x296").unwrap();
        assert_eq!(display.spec.width, 128);
        assert_eq!(display.spec.height, 296);
        assert_eq!(display.spec.encoding, EncodingMode::RedWhiteBlack);
        assert_eq!(display.palette_name(), "bwr-muted");
    }

    #[test]
    fn test_override_builtin_palette() {
        let yaml = r##"
palettes:
  rwb: ["#000000", "#FFFFFF", "#E00000"]
"##;
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.get_palette("rwb").unwrap()[2], "#E00000");
    }

    #[test]
    fn test_rwb4_display_defaults_to_rwb_palette() {
        let yaml = r#"
displays:
  custom_rwb4:
    width: 16
    height: 2
    encoding: rwb4
  epd_7in5_rwb4_640x384:
    width: 640
    height: 384
    encoding: rwb4
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.get_display("custom_rwb4").unwrap().palette_name(), "rwb");
        assert_eq!(
            config
                .get_display("epd_7in5_rwb4_640x384")
                .unwrap()
                .palette_name(),
            "rwb"
        );
    }

    #[test]
    fn test_default_palette_per_encoding() {
        assert_eq!(DisplayConfig::default_palette(EncodingMode::SevenColor), "7c");
        assert_eq!(DisplayConfig::default_palette(EncodingMode::RedWhiteBlack), "rwb");
        assert_eq!(DisplayConfig::default_palette(EncodingMode::RedWhiteBlack4), "rwb");
    }

    #[test]
    fn test_validate_missing_palette() {
        let yaml = r#"
displays:
  custom:
    width: 16
    height: 16
    encoding: 7c
    palette: nonexistent
"#;
        let result = AppConfig::from_yaml_str(yaml);
        assert!(matches!(result, Err(ConfigError::MissingPalette { .. })));
    }

    #[test]
    fn test_validate_palette_length() {
        let yaml = r#"
displays:
  custom:
    width: 16
    height: 16
    encoding: 7c
    palette: rwb
"#;
        let result = AppConfig::from_yaml_str(yaml);
        assert!(matches!(
            result,
            Err(ConfigError::PaletteLength {
                expected: 7,
                actual: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_validate_bad_hex() {
        let yaml = r##"
palettes:
  broken: ["#000000", "#XYZ"]
"##;
        let result = AppConfig::from_yaml_str(yaml);
        assert!(matches!(result, Err(ConfigError::Palette { .. })));
    }

    #[test]
    fn test_unknown_encoding_is_yaml_error() {
        let yaml = r#"
displays:
  custom:
    width: 16
    height: 16
    encoding: grey16
"#;
        let result = AppConfig::from_yaml_str(yaml);
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }
}
