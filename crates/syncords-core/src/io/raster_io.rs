use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::FixedScaleConfig;
use crate::consts::TIFF_EXTENSIONS;
use crate::error::Result;
use crate::io::bitmap::read_bitmap;
use crate::io::geotiff::read_geotiff;
use crate::raster::Raster;
use crate::transform::{AffineTransform, FixedScaleTransform, GeoTransform};

/// Which reader and transform variant a file goes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterKind {
    GeoTiff,
    Bitmap,
}

impl RasterKind {
    /// Chosen by extension: `.tif`/`.tiff` are GeoTIFFs, everything else is
    /// handed to the bitmap decoder.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some(e) if TIFF_EXTENSIONS.contains(&e) => RasterKind::GeoTiff,
            _ => RasterKind::Bitmap,
        }
    }
}

impl fmt::Display for RasterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterKind::GeoTiff => write!(f, "GeoTIFF"),
            RasterKind::Bitmap => write!(f, "Bitmap"),
        }
    }
}

/// A raster together with the transform that goes with it.
#[derive(Clone, Debug)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub kind: RasterKind,
    pub raster: Raster,
    pub transform: GeoTransform,
}

impl LoadedImage {
    pub fn width(&self) -> usize {
        self.raster.width()
    }

    pub fn height(&self) -> usize {
        self.raster.height()
    }
}

/// Load a raster and pick its transform variant from the file type.
pub fn load_raster(path: &Path, fixed_scale: &FixedScaleConfig) -> Result<LoadedImage> {
    let kind = RasterKind::from_path(path);
    let (raster, transform) = match kind {
        RasterKind::GeoTiff => {
            let (raster, affine) = read_geotiff(path)?;
            let affine = affine.unwrap_or_else(|| {
                warn!(path = %path.display(), "No georeferencing found, using identity transform");
                AffineTransform::identity()
            });
            (raster, GeoTransform::Affine(affine))
        }
        RasterKind::Bitmap => {
            let raster = read_bitmap(path)?;
            let t = FixedScaleTransform::new(fixed_scale, raster.width(), raster.height());
            (raster, GeoTransform::FixedScale(t))
        }
    };

    info!(
        path = %path.display(),
        kind = %kind,
        width = raster.width(),
        height = raster.height(),
        "Raster loaded"
    );

    Ok(LoadedImage {
        path: path.to_path_buf(),
        kind,
        raster,
        transform,
    })
}
