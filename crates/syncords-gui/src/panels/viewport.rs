use syncords_core::viewport::{DataPoint, Viewport};

use crate::app::SynCordsApp;

const MARKER_RADIUS: f32 = 4.0;
const MARKER_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 30, 30);

/// Screen <-> raster data mapping for the current view.
///
/// The view limits are fitted into the canvas with equal scale on both axes
/// and centered, so pixels stay square whatever the panel shape.
struct CanvasMapping {
    rect_center: egui::Pos2,
    view_center: DataPoint,
    /// Screen points per raster pixel.
    scale: f64,
}

impl CanvasMapping {
    fn new(rect: egui::Rect, vp: &Viewport) -> Option<Self> {
        let (xs, ys) = (vp.x_span(), vp.y_span());
        if !(xs > 0.0 && ys > 0.0) || rect.width() <= 0.0 || rect.height() <= 0.0 {
            return None;
        }
        let scale = (rect.width() as f64 / xs).min(rect.height() as f64 / ys);
        if !scale.is_finite() {
            return None;
        }
        Some(Self {
            rect_center: rect.center(),
            view_center: vp.center(),
            scale,
        })
    }

    fn to_data(&self, pos: egui::Pos2) -> DataPoint {
        DataPoint::new(
            self.view_center.x + (pos.x - self.rect_center.x) as f64 / self.scale,
            self.view_center.y + (pos.y - self.rect_center.y) as f64 / self.scale,
        )
    }

    fn to_screen(&self, p: DataPoint) -> egui::Pos2 {
        egui::pos2(
            self.rect_center.x + ((p.x - self.view_center.x) * self.scale) as f32,
            self.rect_center.y + ((p.y - self.view_center.y) * self.scale) as f32,
        )
    }

    /// Cursor handed to the pan gesture. Negated so that the image follows
    /// the pointer instead of moving against it.
    fn grab_point(&self, pos: egui::Pos2) -> DataPoint {
        DataPoint::new(-pos.x as f64 / self.scale, -pos.y as f64 / self.scale)
    }
}

pub fn show(ctx: &egui::Context, app: &mut SynCordsApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.strong(&app.ui_state.title);
        });

        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let texture_id = app.viewport.texture.as_ref().map(|t| t.id());
        let (Some(texture_id), Some(image_size)) = (texture_id, app.viewport.image_size) else {
            show_placeholder(ui);
            return;
        };

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        handle_zoom(ui, &response, app);
        handle_pan(&response, app, rect);

        let Some(mapping) = CanvasMapping::new(rect, app.session.viewport()) else {
            return;
        };

        handle_click(&response, app, &mapping);
        handle_hover(ctx, &response, app, &mapping);

        let painter = ui.painter_at(rect);
        draw_image(&painter, texture_id, &mapping, image_size);
        draw_markers(&painter, app, &mapping);
        draw_crosshair(&painter, &response, rect);
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Smooth-scroll distance (in points) that counts as one wheel notch.
const POINTS_PER_ZOOM_STEP: f32 = 50.0;

/// Zoom steps for a batch of wheel events.
///
/// Line and page wheels give one step per event. Pixel-precise wheels
/// (trackpads) accumulate into `carry` and give one step per
/// `POINTS_PER_ZOOM_STEP`, with the remainder kept for the next frame.
fn wheel_steps(
    wheel: impl IntoIterator<Item = (egui::MouseWheelUnit, f32)>,
    carry: &mut f32,
) -> i32 {
    let mut steps = 0;
    for (unit, dy) in wheel {
        match unit {
            egui::MouseWheelUnit::Line | egui::MouseWheelUnit::Page => {
                if dy != 0.0 {
                    steps += dy.signum() as i32;
                }
            }
            egui::MouseWheelUnit::Point => {
                *carry += dy;
                while carry.abs() >= POINTS_PER_ZOOM_STEP {
                    let sign = carry.signum();
                    steps += sign as i32;
                    *carry -= sign * POINTS_PER_ZOOM_STEP;
                }
            }
        }
    }
    steps
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut SynCordsApp) {
    if !response.hovered() {
        app.viewport.scroll_carry = 0.0;
        return;
    }
    let carry = &mut app.viewport.scroll_carry;
    let steps = ui.input(|i| {
        let wheel = i.events.iter().filter_map(|e| match e {
            egui::Event::MouseWheel { unit, delta, .. } => Some((*unit, delta.y)),
            _ => None,
        });
        wheel_steps(wheel, carry)
    });
    let step = f64::from(steps.signum());
    for _ in 0..steps.unsigned_abs() {
        app.session.zoom(step);
    }
}

fn handle_pan(response: &egui::Response, app: &mut SynCordsApp, rect: egui::Rect) {
    let button = egui::PointerButton::Secondary;
    if let Some(mapping) = CanvasMapping::new(rect, app.session.viewport()) {
        if let Some(pos) = response.interact_pointer_pos() {
            if response.drag_started_by(button) {
                app.session.begin_pan(mapping.grab_point(pos));
            } else if response.dragged_by(button) {
                app.session.pan_to(mapping.grab_point(pos));
            }
        }
    }

    if response.drag_stopped_by(button) {
        app.session.end_pan();
    }
}

fn handle_click(response: &egui::Response, app: &mut SynCordsApp, mapping: &CanvasMapping) {
    if !response.clicked_by(egui::PointerButton::Primary) {
        return;
    }
    if let Some(pos) = response.interact_pointer_pos() {
        if let Some(outcome) = app.session.click(mapping.to_data(pos)) {
            tracing::debug!(index = outcome.index, world = %outcome.world, "Click recorded");
        }
    }
}

fn handle_hover(
    ctx: &egui::Context,
    response: &egui::Response,
    app: &mut SynCordsApp,
    mapping: &CanvasMapping,
) {
    let Some(pos) = response.hover_pos() else {
        return;
    };
    ctx.set_cursor_icon(if app.session.viewport().is_panning() {
        egui::CursorIcon::Grabbing
    } else {
        egui::CursorIcon::Crosshair
    });

    // Off-raster positions leave the previous readout in place.
    if let Some(world) = app.session.hover(mapping.to_data(pos)) {
        app.ui_state.title = format!("World Coordinates: {world}");
    }
}

fn draw_image(
    painter: &egui::Painter,
    texture_id: egui::TextureId,
    mapping: &CanvasMapping,
    image_size: [usize; 2],
) {
    let img_rect = egui::Rect::from_min_max(
        mapping.to_screen(DataPoint::new(0.0, 0.0)),
        mapping.to_screen(DataPoint::new(image_size[0] as f64, image_size[1] as f64)),
    );
    painter.image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

/// Markers only for points recorded on the current image.
fn draw_markers(painter: &egui::Painter, app: &SynCordsApp, mapping: &CanvasMapping) {
    let points = app.session.points().as_slice();
    let from = app.ui_state.markers_from.min(points.len());
    for point in &points[from..] {
        let (px, py) = point.pixel;
        let center = mapping.to_screen(DataPoint::new(px as f64 + 0.5, py as f64 + 0.5));
        painter.circle_filled(center, MARKER_RADIUS, MARKER_COLOR);
    }
}

fn draw_crosshair(painter: &egui::Painter, response: &egui::Response, rect: egui::Rect) {
    if let Some(pos) = response.hover_pos() {
        let stroke = egui::Stroke::new(1.0, MARKER_COLOR);
        painter.hline(rect.x_range(), pos.y, stroke);
        painter.vline(pos.x, rect.y_range(), stroke);
    }
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Load an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
