use epd_pack::EncodingMode;
use serde::Deserialize;

/// Frame geometry and pixel format of a display controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DisplaySpec {
    pub width: usize,
    pub height: usize,
    pub encoding: EncodingMode,
}

impl DisplaySpec {
    /// 5.65" seven-color panel: 600x448
    pub const EPD_5IN65_7C: Self = Self {
        width: 600,
        height: 448,
        encoding: EncodingMode::SevenColor,
    };

    /// 4.2" black/white/red panel: 400x300
    pub const EPD_4IN2_RWB: Self = Self {
        width: 400,
        height: 300,
        encoding: EncodingMode::RedWhiteBlack,
    };

    /// 2.13" black/white/red panel: 122x250, frame padded to 128 columns
    pub const EPD_2IN13_RWB: Self = Self {
        width: 128,
        height: 250,
        encoding: EncodingMode::RedWhiteBlack,
    };

    /// 7.5" black/white/red panel with 4-bit pixels: 640x384
    pub const EPD_7IN5_RWB4: Self = Self {
        width: 640,
        height: 384,
        encoding: EncodingMode::RedWhiteBlack4,
    };

    /// Display type names reported by devices, with their specs
    pub const KNOWN: [(&'static str, Self); 4] = [
        ("epd_5in65_7c_600x448", Self::EPD_5IN65_7C),
        ("epd_4in2_rwb_400x300", Self::EPD_4IN2_RWB),
        ("epd_2in13_rwb_122x250", Self::EPD_2IN13_RWB),
        ("epd_7in5_rwb4_640x384", Self::EPD_7IN5_RWB4),
    ];

    /// Look up a built-in display by type name
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::KNOWN
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, spec)| *spec)
    }

    /// Size of one full frame in bytes
    pub fn frame_len(&self) -> Option<usize> {
        self.encoding.packed_len(self.width, self.height)
    }
}
