use std::fmt;

use crate::config::FixedScaleConfig;

/// A world-space coordinate pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

impl WorldPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for WorldPoint {
    /// Two-decimal form used for on-screen feedback.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Six-coefficient affine map from pixel to world:
/// `x = a*px + b*py + c`, `y = d*px + e*py + f`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl AffineTransform {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0)
    }

    /// Build from GeoTIFF `ModelPixelScale` + `ModelTiepoint` values.
    ///
    /// Only the first tiepoint is used. Raster `(i, j)` maps to model `(x, y)`
    /// and rows run downward, hence the negated y scale.
    pub fn from_tiepoint(pixel_scale: &[f64], tiepoint: &[f64]) -> Option<Self> {
        if pixel_scale.len() < 2 || tiepoint.len() < 6 {
            return None;
        }
        let (sx, sy) = (pixel_scale[0], pixel_scale[1]);
        let (i, j, x, y) = (tiepoint[0], tiepoint[1], tiepoint[3], tiepoint[4]);
        Some(Self::new(sx, 0.0, x - i * sx, 0.0, -sy, y + j * sy))
    }

    /// Build from a GeoTIFF `ModelTransformation` 4x4 row-major matrix.
    pub fn from_model_transformation(m: &[f64]) -> Option<Self> {
        if m.len() < 16 {
            return None;
        }
        Some(Self::new(m[0], m[1], m[3], m[4], m[5], m[7]))
    }

    /// Plain affine apply, no axis flip.
    pub fn apply(&self, px: f64, py: f64) -> (f64, f64) {
        (
            self.a * px + self.b * py + self.c,
            self.d * px + self.e * py + self.f,
        )
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Isotropic scale around the raster center, for map images without geodata.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedScaleTransform {
    pub scale: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub flip_y: bool,
}

impl FixedScaleTransform {
    pub fn new(config: &FixedScaleConfig, width: usize, height: usize) -> Self {
        Self {
            scale: config.scale(),
            center_x: width as f64 / 2.0,
            center_y: height as f64 / 2.0,
            flip_y: config.flip_y,
        }
    }
}

/// The pixel-to-world mapping active for a loaded raster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeoTransform {
    /// Embedded georeferencing. World y is always negated so that north is up
    /// when rows run top-down.
    Affine(AffineTransform),
    /// Fixed map scale with the origin at the raster center.
    FixedScale(FixedScaleTransform),
}

impl GeoTransform {
    /// Map a raster pixel to world coordinates.
    ///
    /// Callers are expected to bounds-check the pixel first; this function
    /// accepts any value.
    pub fn pixel_to_world(&self, px: i64, py: i64) -> WorldPoint {
        let (px, py) = (px as f64, py as f64);
        match self {
            GeoTransform::Affine(t) => {
                let (x, y) = t.apply(px, py);
                WorldPoint::new(x, -y)
            }
            GeoTransform::FixedScale(t) => {
                let x = (px - t.center_x) * t.scale;
                let y = (py - t.center_y) * t.scale;
                WorldPoint::new(x, if t.flip_y { -y } else { y })
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            GeoTransform::Affine(_) => "Affine",
            GeoTransform::FixedScale(_) => "Fixed scale",
        }
    }
}

impl fmt::Display for GeoTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoTransform::Affine(t) => write!(
                f,
                "Affine (a={}, b={}, c={}, d={}, e={}, f={})",
                t.a, t.b, t.c, t.d, t.e, t.f
            ),
            GeoTransform::FixedScale(t) => write!(
                f,
                "Fixed scale ({} per px, center {}x{}, flip y: {})",
                t.scale, t.center_x, t.center_y, t.flip_y
            ),
        }
    }
}
