use std::path::PathBuf;

/// Sent from helper threads (native dialogs) back to the UI thread.
pub enum AppMessage {
    /// The user picked a file to load.
    ImagePicked { path: PathBuf },
}
