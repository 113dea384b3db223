#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetGeometry {
    pub columns: u16,
    pub rows: u16,
}

#[derive(Clone, Copy, Debug)]
pub enum LayoutPolicy {
    FixedColumns(u16),
}

impl LayoutPolicy {
    /// Derive the glyph grid size for a source image.
    ///
    /// `cell_aspect` compensates for monospace cells being roughly twice as
    /// tall as wide. The row count truncates rather than rounds, and the
    /// grid never collapses below one row or column.
    pub fn derive(
        &self,
        source_width: u32,
        source_height: u32,
        cell_aspect: f32,
    ) -> Option<TargetGeometry> {
        if source_width == 0 || source_height == 0 {
            return None;
        }

        let image_ratio = source_height as f32 / source_width as f32;

        match *self {
            LayoutPolicy::FixedColumns(columns) => {
                let columns = columns.max(1);
                let rows = ((image_ratio * columns as f32 * cell_aspect).floor() as u16).max(1);
                Some(TargetGeometry { columns, rows })
            },
        }
    }
}
