#[derive(Clone, Debug)]
pub struct CellGlyph {
    pub ch: char,
    /// Resampled source pixel encoded as RGB bytes.
    pub fg: [u8; 3],
}

/// Rectangular glyph grid in row-major order.
#[derive(Clone, Debug)]
pub struct GlyphGrid {
    pub width: u16,
    pub height: u16,
    pub cells: Vec<CellGlyph>,
}

impl GlyphGrid {
    pub fn new(width: u16, height: u16, cells: Vec<CellGlyph>) -> Self {
        assert_eq!(usize::from(width) * usize::from(height), cells.len());
        Self { width, height, cells }
    }

    pub fn cell(&self, column: u16, row: u16) -> &CellGlyph {
        assert!(column < self.width && row < self.height);
        &self.cells[usize::from(row) * usize::from(self.width) + usize::from(column)]
    }

    /// Text rendition of the grid, one string per row.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        let width = usize::from(self.width);
        self.cells.chunks(width).map(|row| row.iter().map(|cell| cell.ch).collect::<String>())
    }
}
