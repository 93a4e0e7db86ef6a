use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use syncords_core::config::{executable_dir, SynCordsConfig};
use syncords_core::session::Session;
use tracing::warn;

use crate::summary::print_record_summary;

#[derive(Args)]
pub struct RecordArgs {
    /// Input image (GeoTIFF, WebP, PNG, JPEG)
    pub file: PathBuf,

    /// Text file with one `px, py` pair per line
    pub pixels: PathBuf,

    /// Directory for the coordinate file (default: `cords` next to the executable)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

pub fn run(args: &RecordArgs, config: &SynCordsConfig) -> Result<()> {
    let content = std::fs::read_to_string(&args.pixels)
        .with_context(|| format!("Failed to read {}", args.pixels.display()))?;
    let pixels = parse_pixel_list(&content)?;

    let mut session = Session::new(config.clone());
    session
        .load(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let mut skipped = 0;
    for &(px, py) in &pixels {
        if session.record_pixel(px, py).is_none() {
            warn!(px, py, "Pixel outside raster, skipped");
            skipped += 1;
        }
    }

    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => session.output_dir(&executable_dir()?),
    };
    let path = session
        .save(&output_dir)
        .with_context(|| format!("Failed to save coordinates in {}", output_dir.display()))?;

    print_record_summary(&session, skipped, &path);
    Ok(())
}

/// Parse `px, py` lines. Blank lines and `#` comments are ignored; the two
/// numbers may be separated by a comma, whitespace, or both.
pub fn parse_pixel_list(content: &str) -> Result<Vec<(i64, i64)>> {
    let mut pixels = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();
        let [x, y] = fields.as_slice() else {
            anyhow::bail!("Line {}: expected `px, py`, got {line:?}", lineno + 1);
        };
        let px = x
            .parse::<i64>()
            .with_context(|| format!("Line {}: invalid pixel column {x:?}", lineno + 1))?;
        let py = y
            .parse::<i64>()
            .with_context(|| format!("Line {}: invalid pixel row {y:?}", lineno + 1))?;
        pixels.push((px, py));
    }
    Ok(pixels)
}
