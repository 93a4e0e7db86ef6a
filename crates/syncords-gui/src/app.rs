use std::path::{Path, PathBuf};
use std::sync::mpsc;

use syncords_core::config::SynCordsConfig;
use syncords_core::consts::{BITMAP_EXTENSIONS, TIFF_EXTENSIONS};
use syncords_core::session::Session;
use tracing::error;

use crate::convert::raster_to_color_image;
use crate::messages::AppMessage;
use crate::panels;
use crate::states::{UIState, ViewportState, TITLE_LOADED};

pub struct SynCordsApp {
    pub msg_tx: mpsc::Sender<AppMessage>,
    pub msg_rx: mpsc::Receiver<AppMessage>,
    /// Raster, transform, viewport and points. Only touched on the UI thread.
    pub session: Session,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub exe_dir: PathBuf,
    pub show_about: bool,
    ctx: egui::Context,
}

impl SynCordsApp {
    pub fn new(ctx: &egui::Context, config: SynCordsConfig, exe_dir: PathBuf) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();

        Self {
            msg_tx,
            msg_rx,
            session: Session::new(config),
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            exe_dir,
            show_about: false,
            ctx: ctx.clone(),
        }
    }

    /// Drain messages from dialog threads.
    fn poll_messages(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            match msg {
                AppMessage::ImagePicked { path } => self.load_image(ctx, &path),
            }
        }
    }

    /// Ask for a file on a helper thread; the pick comes back as a message.
    pub fn open_image_dialog(&self) {
        let msg_tx = self.msg_tx.clone();
        let ctx = self.ctx.clone();
        std::thread::spawn(move || {
            let all = image_extensions();
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Select Map Image")
                .add_filter("Map images", &all[..])
                .add_filter("GeoTIFF", TIFF_EXTENSIONS)
                .add_filter("Bitmaps", BITMAP_EXTENSIONS)
                .pick_file()
            {
                let _ = msg_tx.send(AppMessage::ImagePicked { path });
                ctx.request_repaint();
            }
        });
    }

    /// Synchronous load. On failure everything stays as it was.
    pub fn load_image(&mut self, ctx: &egui::Context, path: &Path) {
        let previous_points = self.session.points().len();
        match self.session.load(path) {
            Ok(image) => {
                let (color_image, stride) = raster_to_color_image(&image.raster);
                let size = [image.width(), image.height()];
                let summary = format!(
                    "Opened: {} ({}x{}, {})",
                    path.display(),
                    size[0],
                    size[1],
                    image.transform.kind()
                );

                let texture = ctx.load_texture("canvas", color_image, egui::TextureOptions::NEAREST);
                self.viewport.texture = Some(texture);
                self.viewport.image_size = Some(size);
                self.viewport.display_stride = stride;

                let kept = self.session.points().len();
                if kept < previous_points {
                    self.ui_state.add_log(format!("Cleared {previous_points} recorded points"));
                }
                self.ui_state.markers_from = kept;
                self.ui_state.file_path = Some(path.to_path_buf());
                self.ui_state.title = TITLE_LOADED.to_string();
                self.ui_state.add_log(summary);
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Load failed");
                self.ui_state
                    .report_error(format!("Could not load {}: {e}", path.display()));
            }
        }
    }

    /// Write all recorded points to a new timestamped file.
    pub fn save_points(&mut self) {
        let dir = self.session.output_dir(&self.exe_dir);
        match self.session.save(&dir) {
            Ok(path) => {
                self.ui_state.add_log(format!(
                    "Saved {} points: {}",
                    self.session.points().len(),
                    path.display()
                ));
                self.ui_state.last_saved = Some(path);
            }
            Err(e) => {
                error!(dir = %dir.display(), error = %e, "Save failed");
                self.ui_state
                    .report_error(format!("Could not save coordinates: {e}"));
            }
        }
    }
}

fn image_extensions() -> Vec<&'static str> {
    TIFF_EXTENSIONS
        .iter()
        .chain(BITMAP_EXTENSIONS)
        .copied()
        .collect()
}

impl eframe::App for SynCordsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_messages(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::points::show(ctx, self);
        panels::viewport::show(ctx, self);

        if let Some(message) = self.ui_state.error_popup.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.ui_state.error_popup = None;
                    }
                });
        }

        if self.show_about {
            egui::Window::new("About SynCords")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("SynCords");
                        ui.label("Map coordinate logger");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
