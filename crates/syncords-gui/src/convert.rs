use syncords_core::raster::Raster;

/// Largest texture side uploaded to the GPU; bigger rasters are subsampled
/// for display only.
pub const MAX_TEXTURE_SIDE: usize = 8192;

/// Stretch a raster to gray and convert to an egui ColorImage.
///
/// Returns the image and the display stride (1 when not subsampled).
pub fn raster_to_color_image(raster: &Raster) -> (egui::ColorImage, usize) {
    let w = raster.width();
    let h = raster.height();
    let gray = raster.to_gray8();

    let stride = w.max(h).div_ceil(MAX_TEXTURE_SIDE).max(1);
    if stride == 1 {
        return (egui::ColorImage::from_gray([w, h], &gray), 1);
    }

    let dw = w.div_ceil(stride);
    let dh = h.div_ceil(stride);
    let mut pixels = Vec::with_capacity(dw * dh);
    for row in (0..h).step_by(stride) {
        for col in (0..w).step_by(stride) {
            pixels.push(gray[row * w + col]);
        }
    }
    (egui::ColorImage::from_gray([dw, dh], &pixels), stride)
}
