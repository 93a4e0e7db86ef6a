use crate::app::SynCordsApp;

const RIGHT_PANEL_WIDTH: f32 = 240.0;

/// Action buttons and the list mirroring the point log.
pub fn show(ctx: &egui::Context, app: &mut SynCordsApp) {
    egui::SidePanel::right("points")
        .default_width(RIGHT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.vertical_centered_justified(|ui| {
                if ui.button("Load Image").clicked() {
                    app.open_image_dialog();
                }
                if ui.button("Save Coordinates").clicked() {
                    app.save_points();
                }
            });

            if let Some(ref path) = app.ui_state.file_path {
                ui.add_space(4.0);
                ui.small(
                    path.file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default(),
                );
            }

            ui.separator();
            ui.strong("Recorded points");
            ui.add_space(4.0);

            let points = app.session.points();
            let row_height = ui.text_style_height(&egui::TextStyle::Body);
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show_rows(ui, row_height, points.len(), |ui, range| {
                    for point in &points.as_slice()[range] {
                        ui.label(point.world.to_string());
                    }
                });
        });
}
