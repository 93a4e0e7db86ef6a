use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::config::SynCordsConfig;
use crate::error::Result;
use crate::io::cords_writer::{save_points, save_points_at};
use crate::io::{load_raster, LoadedImage};
use crate::points::{PointLog, RecordedPoint};
use crate::transform::WorldPoint;
use crate::viewport::{DataPoint, Viewport};

/// Result of a click that landed on the raster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickOutcome {
    /// Position of the new point in the log.
    pub index: usize,
    pub pixel: (i64, i64),
    pub world: WorldPoint,
}

/// All mutable viewer state: the loaded raster and its transform, the
/// viewport over it, and the point log.
///
/// Owned by whatever drives the event loop and handed to each handler by
/// `&mut`; nothing here is shared across threads.
pub struct Session {
    config: SynCordsConfig,
    image: Option<LoadedImage>,
    viewport: Viewport,
    points: PointLog,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SynCordsConfig::default())
    }
}

impl Session {
    pub fn new(config: SynCordsConfig) -> Self {
        let viewport = Viewport::new(config.viewport.clone());
        Self {
            config,
            image: None,
            viewport,
            points: PointLog::new(),
        }
    }

    pub fn config(&self) -> &SynCordsConfig {
        &self.config
    }

    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn points(&self) -> &PointLog {
        &self.points
    }

    /// Load a file and make it the current image.
    ///
    /// On error the previous image, viewport and points are left untouched.
    pub fn load(&mut self, path: &Path) -> Result<&LoadedImage> {
        let image = load_raster(path, &self.config.fixed_scale)?;
        Ok(self.install(image))
    }

    /// Replace the current image, reset the view to full extent and apply the
    /// reload policy to the point log.
    pub fn install(&mut self, image: LoadedImage) -> &LoadedImage {
        self.viewport.reset(image.width(), image.height());
        if self.config.clear_points_on_load && !self.points.is_empty() {
            info!(dropped = self.points.len(), "Clearing recorded points on reload");
            self.points.clear();
        }
        self.image.insert(image)
    }

    /// Raster pixel and world coordinate under `pos`, if it lies on the raster.
    pub fn locate(&self, pos: DataPoint) -> Option<((i64, i64), WorldPoint)> {
        let (px, py) = pos.to_pixel()?;
        self.locate_pixel(px, py).map(|world| ((px, py), world))
    }

    /// World coordinate of a raster pixel. `None` without an image or when
    /// the pixel is out of bounds; the transform only runs for valid pixels.
    pub fn locate_pixel(&self, px: i64, py: i64) -> Option<WorldPoint> {
        let image = self.image.as_ref()?;
        if !image.raster.contains(px, py) {
            return None;
        }
        Some(image.transform.pixel_to_world(px, py))
    }

    /// Hover preview. Never touches the point log.
    pub fn hover(&self, pos: DataPoint) -> Option<WorldPoint> {
        self.locate(pos).map(|(_, world)| world)
    }

    /// Primary click at a data-space position.
    pub fn click(&mut self, pos: DataPoint) -> Option<ClickOutcome> {
        let (px, py) = pos.to_pixel()?;
        self.record_pixel(px, py)
    }

    /// Record the point for a raster pixel, if it is in bounds.
    pub fn record_pixel(&mut self, px: i64, py: i64) -> Option<ClickOutcome> {
        let world = self.locate_pixel(px, py)?;
        let index = self.points.push(RecordedPoint {
            world,
            pixel: (px, py),
        });
        debug!(px, py, x = world.x, y = world.y, "Point recorded");
        Some(ClickOutcome {
            index,
            pixel: (px, py),
            world,
        })
    }

    pub fn zoom(&mut self, step: f64) -> Option<f64> {
        self.viewport.zoom(step)
    }

    pub fn begin_pan(&mut self, cursor: DataPoint) {
        self.viewport.begin_pan(cursor);
    }

    pub fn pan_to(&mut self, cursor: DataPoint) -> Option<(f64, f64)> {
        self.viewport.pan_to(cursor)
    }

    pub fn end_pan(&mut self) {
        self.viewport.end_pan();
    }

    /// Back to the full-extent view of the current image.
    pub fn reset_view(&mut self) {
        if let Some(image) = &self.image {
            self.viewport.reset(image.width(), image.height());
        }
    }

    /// Output directory for `exe_dir` under the current config.
    pub fn output_dir(&self, exe_dir: &Path) -> PathBuf {
        self.config.resolve_output_dir(exe_dir)
    }

    /// Write the point log to a new timestamped file in `dir`.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        save_points(&self.points, dir)
    }

    pub fn save_at(&self, dir: &Path, timestamp: NaiveDateTime) -> Result<PathBuf> {
        save_points_at(&self.points, dir, timestamp)
    }
}
