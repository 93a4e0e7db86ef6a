use tracing::debug;

use crate::config::ViewportConfig;

/// A position in raster data space (pixel units, y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Integer raster pixel containing this position, or `None` for NaN/inf.
    pub fn to_pixel(self) -> Option<(i64, i64)> {
        if self.x.is_finite() && self.y.is_finite() {
            Some((self.x.floor() as i64, self.y.floor() as i64))
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum PanState {
    #[default]
    Idle,
    Panning { last: DataPoint },
}

/// Visible window over the raster.
///
/// Limits are free-form: nothing clamps them to the raster, so the view can
/// be zoomed or dragged arbitrarily far away.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    /// `(left, right)` in raster pixels.
    pub x_limits: (f64, f64),
    /// `(top, bottom)` in raster pixels.
    pub y_limits: (f64, f64),
    settings: ViewportConfig,
    pan: PanState,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

impl Viewport {
    /// A unit view, used until a raster is loaded.
    pub fn new(settings: ViewportConfig) -> Self {
        Self {
            x_limits: (0.0, 1.0),
            y_limits: (0.0, 1.0),
            settings,
            pan: PanState::Idle,
        }
    }

    /// Full-extent view over a `width` x `height` raster.
    pub fn full_extent(settings: ViewportConfig, width: usize, height: usize) -> Self {
        let mut vp = Self::new(settings);
        vp.reset(width, height);
        vp
    }

    /// Show the whole raster and drop any drag in progress.
    pub fn reset(&mut self, width: usize, height: usize) {
        self.x_limits = (0.0, width as f64);
        self.y_limits = (0.0, height as f64);
        self.pan = PanState::Idle;
    }

    pub fn settings(&self) -> &ViewportConfig {
        &self.settings
    }

    pub fn center(&self) -> DataPoint {
        DataPoint::new(
            (self.x_limits.0 + self.x_limits.1) / 2.0,
            (self.y_limits.0 + self.y_limits.1) / 2.0,
        )
    }

    pub fn x_span(&self) -> f64 {
        self.x_limits.1 - self.x_limits.0
    }

    pub fn y_span(&self) -> f64 {
        self.y_limits.1 - self.y_limits.0
    }

    /// Apply one scroll step. Positive steps scale extents by the scroll-up
    /// factor, negative ones by the scroll-down factor, zero does nothing.
    ///
    /// Returns the factor applied, if any.
    pub fn zoom(&mut self, step: f64) -> Option<f64> {
        let factor = if step > 0.0 {
            self.settings.scroll_up_factor
        } else if step < 0.0 {
            self.settings.scroll_down_factor
        } else {
            return None;
        };
        self.scale_extents(factor);
        Some(factor)
    }

    /// Scale both axes around the current view center by the same factor.
    pub fn scale_extents(&mut self, factor: f64) {
        let c = self.center();
        let scale = |(lo, hi): (f64, f64), mid: f64| {
            (mid + (lo - mid) * factor, mid + (hi - mid) * factor)
        };
        self.x_limits = scale(self.x_limits, c.x);
        self.y_limits = scale(self.y_limits, c.y);
        debug!(factor, x = ?self.x_limits, y = ?self.y_limits, "viewport zoomed");
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x_limits = (self.x_limits.0 + dx, self.x_limits.1 + dx);
        self.y_limits = (self.y_limits.0 + dy, self.y_limits.1 + dy);
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.pan, PanState::Panning { .. })
    }

    /// Capture the cursor at the start of a drag.
    pub fn begin_pan(&mut self, cursor: DataPoint) {
        self.pan = PanState::Panning { last: cursor };
    }

    /// Incremental pan: shift limits by the damped cursor delta since the
    /// previous call, then remember `cursor`. Ignored when no drag is active.
    ///
    /// Returns the applied `(dx, dy)`.
    pub fn pan_to(&mut self, cursor: DataPoint) -> Option<(f64, f64)> {
        let PanState::Panning { last } = self.pan else {
            return None;
        };
        let damp = self.settings.pan_dampening;
        let dx = (cursor.x - last.x) * damp;
        let dy = (cursor.y - last.y) * damp;
        self.translate(dx, dy);
        self.pan = PanState::Panning { last: cursor };
        Some((dx, dy))
    }

    pub fn end_pan(&mut self) {
        self.pan = PanState::Idle;
    }
}
