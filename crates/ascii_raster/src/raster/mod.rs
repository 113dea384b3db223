pub mod canvas;
pub mod font;

/// How glyphs take color when drawn onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    /// Black glyphs on the white background.
    Monochrome,
    /// Each glyph keeps its source pixel's RGB.
    Source,
}
