use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::info;

use crate::consts::{OUTPUT_FILE_PREFIX, TIMESTAMP_FORMAT};
use crate::error::Result;
use crate::points::PointLog;

/// `cords_<YYYY-MM-DD_HH-MM-SS>.txt`
pub fn output_file_name(timestamp: &NaiveDateTime) -> String {
    format!(
        "{OUTPUT_FILE_PREFIX}{}.txt",
        timestamp.format(TIMESTAMP_FORMAT)
    )
}

/// Save the log into `dir` using the current local time.
pub fn save_points(points: &PointLog, dir: &Path) -> Result<PathBuf> {
    save_points_at(points, dir, Local::now().naive_local())
}

/// Save the log into `dir` under the name derived from `timestamp`.
///
/// The content goes to a temporary file in `dir` first and is only renamed
/// into place once fully written, so a failure never leaves a partial
/// `cords_*.txt` behind. An existing file with the same name is never
/// replaced; the save fails instead.
pub fn save_points_at(points: &PointLog, dir: &Path, timestamp: NaiveDateTime) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(output_file_name(&timestamp));

    let mut tmp = tempfile::Builder::new()
        .prefix(".cords-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    tmp.write_all(points.to_text().as_bytes())?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist_noclobber(&path)?;

    info!(path = %path.display(), count = points.len(), "Coordinates saved");
    Ok(path)
}
