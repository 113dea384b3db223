use ab_glyph::{point, Font, FontRef, PxScale, ScaleFont};

use crate::AsciiError;

static FONT_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSansMono.ttf");

/// Monospace glyph source backed by the vendored DejaVu Sans Mono face.
pub struct GlyphFont {
    face: FontRef<'static>,
}

impl GlyphFont {
    pub fn builtin() -> Result<Self, AsciiError> {
        let face = FontRef::try_from_slice(FONT_BYTES)?;
        Ok(Self { face })
    }

    /// Rasterize one glyph with the top of its em box at `origin`, feeding
    /// coverage samples in canvas coordinates to `put`.
    pub(crate) fn draw_glyph(
        &self,
        ch: char,
        height: f32,
        origin: (u32, u32),
        mut put: impl FnMut(u32, u32, f32),
    ) {
        let scale = PxScale::from(height);
        let ascent = self.face.as_scaled(scale).ascent();
        let position = point(origin.0 as f32, origin.1 as f32 + ascent);
        let glyph = self.face.glyph_id(ch).with_scale_and_position(scale, position);

        let outline = match self.face.outline_glyph(glyph) {
            Some(outline) => outline,
            // Whitespace and unknown characters have no outline to draw.
            None => return,
        };

        let bounds = outline.px_bounds();
        outline.draw(|x, y, coverage| {
            let px = bounds.min.x as i32 + x as i32;
            let py = bounds.min.y as i32 + y as i32;
            if px >= 0 && py >= 0 {
                put(px as u32, py as u32, coverage);
            }
        });
    }
}
