use chrono::NaiveDate;

use syncords_core::io::cords_writer::{output_file_name, save_points_at};
use syncords_core::points::{format_coordinate, PointLog, RecordedPoint};
use syncords_core::transform::WorldPoint;

fn point(x: f64, y: f64) -> RecordedPoint {
    RecordedPoint {
        world: WorldPoint::new(x, y),
        pixel: (0, 0),
    }
}

fn sample_log() -> PointLog {
    let mut log = PointLog::new();
    log.push(point(1.5, -2.25));
    log.push(point(3.0, 4.0));
    log
}

fn timestamp() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(7, 8, 9)
        .unwrap()
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn test_format_coordinate_keeps_fraction() {
    assert_eq!(format_coordinate(3.0), "3.0");
    assert_eq!(format_coordinate(-2.25), "-2.25");
    assert_eq!(format_coordinate(-0.0), "-0.0");
    assert_eq!(format_coordinate(0.1), "0.1");
    assert_eq!(format_coordinate(500010.0), "500010.0");
}

#[test]
fn test_to_text_exact_content() {
    assert_eq!(sample_log().to_text(), "1.5, -2.25\n3.0, 4.0\n");
}

#[test]
fn test_push_returns_index_in_click_order() {
    let mut log = PointLog::new();
    assert_eq!(log.push(point(1.0, 1.0)), 0);
    assert_eq!(log.push(point(2.0, 2.0)), 1);
    let xs: Vec<f64> = log.iter().map(|p| p.world.x).collect();
    assert_eq!(xs, vec![1.0, 2.0]);
}

// ---------------------------------------------------------------------------
// Saving
// ---------------------------------------------------------------------------

#[test]
fn test_output_file_name_format() {
    assert_eq!(output_file_name(&timestamp()), "cords_2024-03-05_07-08-09.txt");
}

#[test]
fn test_save_writes_exact_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_points_at(&sample_log(), dir.path(), timestamp()).unwrap();

    assert_eq!(path, dir.path().join("cords_2024-03-05_07-08-09.txt"));
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "1.5, -2.25\n3.0, 4.0\n");
}

#[test]
fn test_save_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("cords");
    let path = save_points_at(&sample_log(), &out, timestamp()).unwrap();
    assert!(out.is_dir());
    assert!(path.starts_with(&out));
}

#[test]
fn test_save_leaves_no_temporary_files() {
    let dir = tempfile::tempdir().unwrap();
    save_points_at(&sample_log(), dir.path(), timestamp()).unwrap();
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_save_empty_log_writes_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_points_at(&PointLog::new(), dir.path(), timestamp()).unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "");
}

#[test]
fn test_save_same_second_does_not_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let first = save_points_at(&sample_log(), dir.path(), timestamp()).unwrap();

    let mut other = PointLog::new();
    other.push(point(9.0, 9.0));
    assert!(save_points_at(&other, dir.path(), timestamp()).is_err());

    assert_eq!(
        std::fs::read_to_string(&first).unwrap(),
        "1.5, -2.25\n3.0, 4.0\n"
    );
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_save_into_unwritable_location_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where a directory is expected.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"").unwrap();
    let out = blocker.join("cords");

    let log = sample_log();
    assert!(save_points_at(&log, &out, timestamp()).is_err());
    assert_eq!(log.len(), 2);

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("blocker")]);
}
