use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use ascii_raster::{AsciiOptions, AsciiRenderer, ColorMode, GlyphCanvas, GlyphFont, LayoutPolicy};
use clap::Parser;

const OUTPUT_NAME: &str = "ascii.png";
const MIN_COLUMNS: u16 = 150;
const MAX_COLUMNS: u16 = 500;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render an image as ASCII art glyphs drawn into a PNG")]
struct Cli {
    /// Input image path
    input: PathBuf,
    /// Color each glyph with its source pixel instead of black
    #[arg(short, long)]
    color: bool,
    /// Target column count (150-500)
    #[arg(short, long, default_value = "500", allow_hyphen_values = true)]
    width: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let columns = parse_width(&cli.width)?;
    let input = resolve_input(&cli.input, read_path_from_stdin)?;

    let renderer = AsciiRenderer::default();
    let output = renderer
        .render_path(&input, LayoutPolicy::FixedColumns(columns), AsciiOptions::default())
        .with_context(|| format!("failed to render {}", input.display()))?;

    let mode = if cli.color { ColorMode::Source } else { ColorMode::Monochrome };
    let font = GlyphFont::builtin().context("failed to load the builtin font")?;
    let canvas = GlyphCanvas::new(font, mode).rasterize(&output.grid);
    canvas.save(OUTPUT_NAME).with_context(|| format!("failed to write {OUTPUT_NAME}"))?;

    println!("Saved ASCII art to {OUTPUT_NAME}");
    Ok(())
}

/// Validate the column count outside clap's value parser so a bad value
/// reports through the normal error path and exits with status 1 rather
/// than a usage error.
fn parse_width(raw: &str) -> Result<u16> {
    let columns = match raw.trim().parse::<i32>() {
        Ok(columns) if columns > 0 => columns,
        Ok(_) | Err(_) => bail!("Width must be a positive number, got '{raw}'"),
    };
    if !(i32::from(MIN_COLUMNS)..=i32::from(MAX_COLUMNS)).contains(&columns) {
        bail!("Width must be between {MIN_COLUMNS} and {MAX_COLUMNS} characters");
    }
    Ok(columns as u16)
}

/// Return a path known to name an existing file, asking once on stdin when
/// the supplied candidate does not. The line reader is injected so tests
/// can feed a canned answer.
fn resolve_input<F>(candidate: &Path, read_line: F) -> Result<PathBuf>
where
    F: FnOnce() -> io::Result<String>,
{
    if candidate.is_file() {
        return Ok(candidate.to_path_buf());
    }

    println!("Please drag and drop your image file into the terminal, or paste its full path:");
    let line = read_line().context("failed to read a path from stdin")?;
    let path = PathBuf::from(strip_path_decorations(&line));
    if path.is_file() {
        Ok(path)
    } else {
        bail!("Image file not found at '{}'", path.display());
    }
}

/// Drag-and-dropped paths arrive wrapped in quotes and padding.
fn strip_path_decorations(line: &str) -> &str {
    line.trim().trim_matches(|c| c == '"' || c == '\'').trim()
}

fn read_path_from_stdin() -> io::Result<String> {
    print!("Image path: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use super::*;

    #[test]
    fn width_bounds_are_inclusive() {
        assert_eq!(parse_width("150").unwrap(), 150);
        assert_eq!(parse_width("500").unwrap(), 500);
    }

    #[test]
    fn out_of_range_widths_are_rejected() {
        for raw in ["149", "501"] {
            let err = parse_width(raw).unwrap_err();
            assert!(err.to_string().contains("between 150 and 500"), "{raw}: {err}");
        }
    }

    #[test]
    fn non_positive_and_non_numeric_widths_are_rejected() {
        for raw in ["abc", "-10", "0", ""] {
            let err = parse_width(raw).unwrap_err();
            assert!(err.to_string().contains("positive number"), "{raw}: {err}");
        }
    }

    #[test]
    fn existing_candidate_is_returned_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.png");
        File::create(&path).unwrap();

        let resolved = resolve_input(&path, || panic!("prompt must not run")).unwrap();
        assert_eq!(resolved, path);
    }

    #[test]
    fn prompted_path_is_stripped_of_quotes_and_padding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dropped image.png");
        File::create(&path).unwrap();

        let answer = format!("  '{}'  \n", path.display());
        let resolved = resolve_input(Path::new("missing.png"), move || Ok(answer)).unwrap();
        assert_eq!(resolved, path);
    }

    #[test]
    fn empty_prompt_line_reports_a_missing_file() {
        let err = resolve_input(Path::new("missing.png"), || Ok(String::from("\n"))).unwrap_err();
        assert!(err.to_string().contains("Image file not found"));
    }

    #[test]
    fn directories_do_not_satisfy_the_resolver() {
        let dir = tempfile::tempdir().unwrap();
        let answer = format!("{}\n", dir.path().display());
        let err = resolve_input(dir.path(), move || Ok(answer)).unwrap_err();
        assert!(err.to_string().contains("Image file not found"));
    }
}
