use ndarray::{Array2, Axis};
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// A single-band intensity grid.
/// Samples keep their native scale; display code stretches them.
#[derive(Clone, Debug)]
pub struct Raster {
    /// Sample data, row-major, shape = (height, width)
    pub data: Array2<f32>,
}

impl Raster {
    pub fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// True when `(px, py)` addresses a sample of this raster.
    pub fn contains(&self, px: i64, py: i64) -> bool {
        px >= 0 && py >= 0 && (px as usize) < self.width() && (py as usize) < self.height()
    }

    /// Finite minimum and maximum sample, or `None` if every sample is NaN/inf.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        self.data
            .iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Stretch samples linearly to 0..=255, row-major.
    ///
    /// Mirrors an auto-scaled gray colormap: the minimum maps to black and the
    /// maximum to white. A constant raster renders mid-gray, non-finite
    /// samples render black.
    pub fn to_gray8(&self) -> Vec<u8> {
        let (lo, hi) = self.value_range().unwrap_or((0.0, 0.0));
        let span = hi - lo;
        let stretch = move |v: f32| -> u8 {
            if !v.is_finite() {
                0
            } else if span <= f32::EPSILON {
                128
            } else {
                (((v - lo) / span).clamp(0.0, 1.0) * 255.0).round() as u8
            }
        };

        let w = self.width();
        let h = self.height();
        let mut out = vec![0u8; w * h];
        if w == 0 {
            return out;
        }

        if w * h >= PARALLEL_PIXEL_THRESHOLD {
            out.par_chunks_mut(w)
                .zip(self.data.axis_iter(Axis(0)).into_par_iter())
                .for_each(|(dst, row)| {
                    for (d, &v) in dst.iter_mut().zip(row.iter()) {
                        *d = stretch(v);
                    }
                });
        } else {
            for (d, &v) in out.iter_mut().zip(self.data.iter()) {
                *d = stretch(v);
            }
        }
        out
    }
}
