use image::RgbaImage;

use super::{
    grid::{CellGlyph, GlyphGrid},
    ramp::Ramp,
};

/// Maps a resampled pixel buffer onto a glyph grid, one cell per pixel.
pub struct GlyphMapper {
    ramp: Ramp,
}

impl GlyphMapper {
    pub fn new(ramp: Ramp) -> Self {
        Self { ramp }
    }

    /// The source RGB rides along in each cell so color rasterization does
    /// not need the pixel buffer a second time.
    pub fn map_pixels(&self, pixels: &RgbaImage) -> GlyphGrid {
        let mut cells = Vec::with_capacity((pixels.width() * pixels.height()) as usize);
        for pixel in pixels.pixels() {
            let [r, g, b, _] = pixel.0;
            cells.push(CellGlyph { ch: self.ramp.char_for(r, g, b), fg: [r, g, b] });
        }

        GlyphGrid::new(pixels.width() as u16, pixels.height() as u16, cells)
    }
}
