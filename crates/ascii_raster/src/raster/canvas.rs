use image::{Rgba, RgbaImage};

use super::{font::GlyphFont, ColorMode};
use crate::ascii::grid::GlyphGrid;

/// Pixel footprint of one glyph cell on the output canvas.
pub const CELL_WIDTH: u32 = 10;
pub const CELL_HEIGHT: u32 = 18;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const INK: [u8; 3] = [0, 0, 0];

/// Draws a glyph grid onto a white canvas, one monospace cell per glyph.
pub struct GlyphCanvas {
    font: GlyphFont,
    mode: ColorMode,
}

impl GlyphCanvas {
    pub fn new(font: GlyphFont, mode: ColorMode) -> Self {
        Self { font, mode }
    }

    pub fn rasterize(&self, grid: &GlyphGrid) -> RgbaImage {
        let width = u32::from(grid.width) * CELL_WIDTH;
        let height = u32::from(grid.height) * CELL_HEIGHT;
        let mut canvas = RgbaImage::from_pixel(width, height, BACKGROUND);

        for row in 0..grid.height {
            for column in 0..grid.width {
                let cell = grid.cell(column, row);
                if cell.ch == ' ' {
                    continue;
                }

                let fg = match self.mode {
                    ColorMode::Monochrome => INK,
                    ColorMode::Source => cell.fg,
                };
                let origin = (u32::from(column) * CELL_WIDTH, u32::from(row) * CELL_HEIGHT);
                self.font.draw_glyph(cell.ch, CELL_HEIGHT as f32, origin, |x, y, coverage| {
                    if x < width && y < height {
                        blend(canvas.get_pixel_mut(x, y), fg, coverage);
                    }
                });
            }
        }

        canvas
    }
}

fn blend(pixel: &mut Rgba<u8>, fg: [u8; 3], coverage: f32) {
    let coverage = coverage.clamp(0.0, 1.0);
    for channel in 0..3 {
        let bg = f32::from(pixel.0[channel]);
        pixel.0[channel] = (bg + (f32::from(fg[channel]) - bg) * coverage).round() as u8;
    }
}
