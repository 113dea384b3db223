mod ascii;
mod image_pipeline;
mod raster;

use std::path::Path;

use image::{imageops::FilterType, DynamicImage, GenericImageView};
use log::debug;

pub use ascii::{
    grid::{CellGlyph, GlyphGrid},
    mapping::GlyphMapper,
    ramp::{luma, Ramp},
};
pub use image_pipeline::resize::{LayoutPolicy, TargetGeometry};
pub use raster::{
    canvas::{GlyphCanvas, CELL_HEIGHT, CELL_WIDTH},
    font::GlyphFont,
    ColorMode,
};

#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),
    #[error("unsupported layout dimensions")]
    InvalidLayout,
    #[error("invalid builtin font: {0}")]
    Font(#[from] ab_glyph::InvalidFont),
}

#[derive(Clone, Debug)]
pub struct AsciiOptions {
    pub ramp: Ramp,
    /// Cell aspect ratio (width / height) assumed when deriving grid size.
    pub cell_aspect: f32,
}

impl Default for AsciiOptions {
    fn default() -> Self {
        Self { ramp: Ramp::standard(), cell_aspect: 0.5 }
    }
}

#[derive(Clone, Debug)]
pub struct RenderOutput {
    pub grid: GlyphGrid,
    pub geometry: TargetGeometry,
}

#[derive(Default)]
pub struct AsciiRenderer;

impl AsciiRenderer {
    pub fn render_path<P: AsRef<Path>>(
        &self,
        path: P,
        layout: LayoutPolicy,
        options: AsciiOptions,
    ) -> Result<RenderOutput, AsciiError> {
        let image = image::open(path)?;
        self.render_image(image, layout, options)
    }

    pub fn render_image(
        &self,
        image: DynamicImage,
        layout: LayoutPolicy,
        options: AsciiOptions,
    ) -> Result<RenderOutput, AsciiError> {
        let (width, height) = image.dimensions();
        let geometry =
            layout.derive(width, height, options.cell_aspect).ok_or(AsciiError::InvalidLayout)?;
        debug!(
            "mapping {width}x{height} source onto a {}x{} glyph grid",
            geometry.columns, geometry.rows
        );

        let resized = image
            .resize_exact(geometry.columns.into(), geometry.rows.into(), FilterType::CatmullRom)
            .to_rgba8();

        let mapper = GlyphMapper::new(options.ramp);
        let grid = mapper.map_pixels(&resized);

        Ok(RenderOutput { grid, geometry })
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    fn solid(width: u32, height: u32, color: [u8; 4]) -> DynamicImage {
        DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(width, height, Rgba(color)))
    }

    #[test]
    fn black_image_maps_to_the_darkest_glyph_everywhere() {
        let output = AsciiRenderer::default()
            .render_image(
                solid(2, 2, [0, 0, 0, 255]),
                LayoutPolicy::FixedColumns(150),
                AsciiOptions::default(),
            )
            .unwrap();

        assert_eq!(output.geometry, TargetGeometry { columns: 150, rows: 75 });
        assert!(output.grid.cells.iter().all(|cell| cell.ch == '@'));
    }

    #[test]
    fn zero_sized_source_is_rejected() {
        let err = AsciiRenderer::default()
            .render_image(
                DynamicImage::new_rgba8(0, 4),
                LayoutPolicy::FixedColumns(150),
                AsciiOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, AsciiError::InvalidLayout));
    }

    #[test]
    fn missing_file_surfaces_the_decoder_error() {
        let err = AsciiRenderer::default()
            .render_path(
                "definitely/not/a/real/file.png",
                LayoutPolicy::FixedColumns(150),
                AsciiOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, AsciiError::Image(_)));
    }

    #[test]
    fn rendered_canvas_round_trips_through_png() {
        let output = AsciiRenderer::default()
            .render_image(
                solid(2, 2, [0, 0, 0, 255]),
                LayoutPolicy::FixedColumns(150),
                AsciiOptions::default(),
            )
            .unwrap();

        let font = GlyphFont::builtin().unwrap();
        let canvas = GlyphCanvas::new(font, ColorMode::Monochrome).rasterize(&output.grid);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ascii.png");
        canvas.save(&path).unwrap();
        // A second run overwrites the first output in place.
        canvas.save(&path).unwrap();

        let reloaded = image::open(&path).unwrap();
        assert_eq!(reloaded.dimensions(), (150 * CELL_WIDTH, 75 * CELL_HEIGHT));
    }
}
