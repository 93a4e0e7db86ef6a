use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use syncords_core::config::SynCordsConfig;
use syncords_core::io::load_raster;

use crate::summary::print_image_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image (GeoTIFF, WebP, PNG, JPEG)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs, config: &SynCordsConfig) -> Result<()> {
    let image = load_raster(&args.file, &config.fixed_scale)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    print_image_summary(&image);
    Ok(())
}
