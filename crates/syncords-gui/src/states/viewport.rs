/// Texture backing the canvas.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Raster size in pixels (the texture may be subsampled).
    pub image_size: Option<[usize; 2]>,
    /// Subsampling stride applied for display (1 if none).
    pub display_stride: usize,
    /// Smooth-scroll points not yet turned into a zoom step.
    pub scroll_carry: f32,
}
