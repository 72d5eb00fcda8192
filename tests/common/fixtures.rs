//! Test fixtures and constants.

use epd_pack::Rgb;

/// Display type names from the built-in table
pub mod displays {
    pub const SEVEN_COLOR: &str = "epd_5in65_7c_600x448";
    pub const RWB_4IN2: &str = "epd_4in2_rwb_400x300";
    pub const RWB_2IN13: &str = "epd_2in13_rwb_122x250";
    pub const RWB4_7IN5: &str = "epd_7in5_rwb4_640x384";
}

/// Colors of the built-in palettes
pub mod colors {
    use epd_pack::Rgb;

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const ORANGE: Rgb = Rgb::new(255, 128, 0);

    pub const SEVEN: [Rgb; 7] = [BLACK, WHITE, GREEN, BLUE, RED, YELLOW, ORANGE];
    pub const RWB: [Rgb; 3] = [BLACK, WHITE, RED];
}

/// A frame filled with one color
pub fn solid_frame(width: usize, height: usize, color: Rgb) -> Vec<Vec<u8>> {
    vec![color.to_rgba().repeat(width); height]
}

/// A frame of vertical stripes cycling through `palette`, `stripe` pixels wide
pub fn striped_frame(width: usize, height: usize, palette: &[Rgb], stripe: usize) -> Vec<Vec<u8>> {
    let row: Vec<u8> = (0..width)
        .flat_map(|x| palette[(x / stripe) % palette.len()].to_rgba())
        .collect();
    vec![row; height]
}

/// Rows of a one-pixel-wide palette image, one row per color
pub fn palette_image_rows(palette: &[Rgb]) -> Vec<Vec<u8>> {
    palette.iter().map(|c| c.to_rgba().to_vec()).collect()
}
