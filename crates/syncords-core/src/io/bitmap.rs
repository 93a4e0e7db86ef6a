use std::path::Path;

use ndarray::Array2;

use crate::error::{Result, SynCordsError};
use crate::raster::Raster;

/// Decode any bitmap the `image` crate understands (WebP, PNG, JPEG...) and
/// reduce it to 8-bit grayscale samples.
pub fn read_bitmap(path: &Path) -> Result<Raster> {
    let img = image::open(path)?;
    let gray = img.to_luma8();
    let (w, h) = gray.dimensions();
    let (w, h) = (w as usize, h as usize);
    if w == 0 || h == 0 {
        return Err(SynCordsError::InvalidDimensions { width: w, height: h });
    }

    let samples: Vec<f32> = gray.into_raw().into_iter().map(f32::from).collect();
    let data = Array2::from_shape_vec((h, w), samples)
        .map_err(|e| SynCordsError::UnsupportedRaster(e.to_string()))?;
    Ok(Raster::new(data))
}
