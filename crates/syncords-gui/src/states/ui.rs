use std::path::PathBuf;

const TITLE_NO_IMAGE: &str = "Load an Image to Begin";
pub const TITLE_LOADED: &str = "Hover to See Coordinates";

/// Overall UI state.
pub struct UIState {
    pub file_path: Option<PathBuf>,

    /// Line shown above the canvas (hover readout).
    pub title: String,

    /// Index of the first point recorded on the current image. Earlier points
    /// stay in the list but get no marker.
    pub markers_from: usize,

    /// Log messages.
    pub log_messages: Vec<String>,

    /// Error waiting to be acknowledged in a dialog.
    pub error_popup: Option<String>,

    pub last_saved: Option<PathBuf>,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            file_path: None,
            title: TITLE_NO_IMAGE.to_string(),
            markers_from: 0,
            log_messages: Vec::new(),
            error_popup: None,
            last_saved: None,
        }
    }
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    /// File name of the most recent coordinate file, for the status bar.
    pub fn last_saved_name(&self) -> Option<String> {
        self.last_saved
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }

    /// Log an error and raise it in a dialog.
    pub fn report_error(&mut self, msg: String) {
        self.add_log(format!("ERROR: {msg}"));
        self.error_popup = Some(msg);
    }
}
