use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use syncords_core::config::SynCordsConfig;
use syncords_core::points::format_coordinate;
use syncords_core::session::Session;

#[derive(Args)]
pub struct LocateArgs {
    /// Input image (GeoTIFF, WebP, PNG, JPEG)
    pub file: PathBuf,

    /// Pixel column
    #[arg(allow_negative_numbers = true)]
    pub px: i64,

    /// Pixel row
    #[arg(allow_negative_numbers = true)]
    pub py: i64,
}

pub fn run(args: &LocateArgs, config: &SynCordsConfig) -> Result<()> {
    let mut session = Session::new(config.clone());
    let image = session
        .load(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let (w, h) = (image.width(), image.height());

    match session.locate_pixel(args.px, args.py) {
        Some(world) => {
            println!("{}, {}", format_coordinate(world.x), format_coordinate(world.y));
            Ok(())
        }
        None => anyhow::bail!(
            "Pixel ({}, {}) is outside the {w}x{h} raster",
            args.px,
            args.py
        ),
    }
}
