use crate::app::SynCordsApp;

pub fn show(ctx: &egui::Context, app: &mut SynCordsApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed at 4 lines and scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(ref size) = app.viewport.image_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
                if let Some(zoom) = zoom_percent(size[0], app.session.viewport().x_span()) {
                    ui.label(format!("Zoom: {zoom:.0}%"));
                    ui.separator();
                }
                if app.viewport.display_stride > 1 {
                    ui.label(format!("Preview 1:{}", app.viewport.display_stride));
                    ui.separator();
                }
            }
            ui.label(format!("Points: {}", app.session.points().len()));
            if let Some(name) = app.ui_state.last_saved_name() {
                ui.separator();
                ui.label(format!("Last saved: {name}"));
            }
            if app.session.viewport().is_panning() {
                ui.separator();
                ui.label("Panning");
            }
        });

        ui.add_space(2.0);
    });
}

/// Full-width view over the visible span, or `None` once the span has
/// collapsed or overflowed.
fn zoom_percent(image_width: usize, x_span: f64) -> Option<f64> {
    if !(x_span > 0.0) {
        return None;
    }
    let pct = image_width as f64 / x_span * 100.0;
    pct.is_finite().then_some(pct)
}
