use std::fs::{File, OpenOptions, TryLockError};
use std::io::{self, Write};
use std::path::Path;

use syncords_core::config::executable_dir;
use tracing::{error, warn};

const LOCK_FILE_NAME: &str = "syncords-gui.lock";
const ERROR_LOG_NAME: &str = "syncords-error.log";

/// Held for the lifetime of the window. The lock is an OS advisory lock on a
/// file in the temp directory, so it is released when the process exits,
/// however it exits. The file itself stays behind and is reused.
pub struct InstanceGuard {
    _file: File,
}

impl InstanceGuard {
    /// `Ok(None)` when another running instance holds the lock.
    pub fn acquire() -> io::Result<Option<Self>> {
        Self::acquire_at(&std::env::temp_dir().join(LOCK_FILE_NAME))
    }

    pub fn acquire_at(path: &Path) -> io::Result<Option<Self>> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)?;
        match file.try_lock() {
            Ok(()) => Ok(Some(Self { _file: file })),
            Err(TryLockError::WouldBlock) => {
                warn!(lock = %path.display(), "Instance lock held by another process");
                Ok(None)
            }
            Err(TryLockError::Error(e)) => Err(e),
        }
    }
}

/// Tell the user why no window appeared.
pub fn report_already_running() {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title("SynCords")
        .set_description("SynCords is already running.")
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

/// Log a startup failure to a file next to the executable and show it in a
/// native dialog. Both steps are best effort.
pub fn report_fatal(err: &anyhow::Error) {
    let message = format!("{err:#}");
    error!(error = %message, "Fatal startup error");

    let log_path = executable_dir()
        .unwrap_or_else(|_| std::env::temp_dir())
        .join(ERROR_LOG_NAME);
    let written = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .and_then(|mut f| {
            writeln!(
                f,
                "[{}] {message}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
            )
        });
    if let Err(e) = written {
        warn!(path = %log_path.display(), error = %e, "Could not write error log");
    }

    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("SynCords failed to start")
        .set_description(format!("{message}\n\nDetails: {}", log_path.display()))
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
