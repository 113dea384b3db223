/// Perceptual brightness of a pixel, ITU-R BT.709 weights, in [0, 255].
pub fn luma(r: u8, g: u8, b: u8) -> f32 {
    0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32
}

/// Ordered run of glyphs from densest ink to lightest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ramp {
    chars: Vec<char>,
}

impl Ramp {
    pub fn new(chars: impl Into<String>) -> Self {
        let chars: Vec<char> = chars.into().chars().collect();
        assert!(chars.len() >= 2, "ramp must contain at least two characters");
        Self { chars }
    }

    /// Ten glyphs covering the full brightness range, `'@'` to `' '`.
    pub fn standard() -> Self {
        Self::new("@%#*+=-:. ")
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Glyph whose brightness band contains this pixel's luminance.
    ///
    /// The band index truncates, so only a pure-white pixel reaches the
    /// final glyph.
    pub fn char_for(&self, r: u8, g: u8, b: u8) -> char {
        let max_index = self.chars.len() - 1;
        let index = (luma(r, g, b) / 255.0 * max_index as f32).floor() as usize;
        self.chars[index.min(max_index)]
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self::standard()
    }
}
