use std::path::{Path, PathBuf};

use approx::assert_abs_diff_eq;

use syncords_core::config::{FixedScaleConfig, SynCordsConfig, ViewportConfig};
use syncords_core::error::SynCordsError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_default_config_values() {
    let c = SynCordsConfig::default();
    assert!(!c.clear_points_on_load);
    assert!(c.output_dir.is_none());
    assert!(!c.fixed_scale.flip_y);
    assert_abs_diff_eq!(c.fixed_scale.map_size, 8000.0);
    assert_abs_diff_eq!(c.fixed_scale.reference_dim, 1493.0);
    assert_abs_diff_eq!(c.viewport.scroll_up_factor, 1.2);
    assert_abs_diff_eq!(c.viewport.scroll_down_factor, 0.8);
    assert_abs_diff_eq!(c.viewport.pan_dampening, 0.5);
}

#[test]
fn test_fixed_scale_ratio() {
    let c = FixedScaleConfig {
        map_size: 3000.0,
        reference_dim: 1500.0,
        flip_y: true,
    };
    assert_abs_diff_eq!(c.scale(), 2.0);
}

// ---------------------------------------------------------------------------
// TOML
// ---------------------------------------------------------------------------

#[test]
fn test_empty_toml_is_default() {
    let c = SynCordsConfig::from_toml_str("").unwrap();
    assert_eq!(c, SynCordsConfig::default());
}

#[test]
fn test_partial_toml_fills_defaults() {
    let c = SynCordsConfig::from_toml_str(
        r#"
        clear_points_on_load = true

        [fixed_scale]
        flip_y = true
        "#,
    )
    .unwrap();
    assert!(c.clear_points_on_load);
    assert!(c.fixed_scale.flip_y);
    assert_abs_diff_eq!(c.fixed_scale.map_size, 8000.0);
    assert_eq!(c.viewport, ViewportConfig::default());
}

#[test]
fn test_toml_roundtrip() {
    let c = SynCordsConfig {
        clear_points_on_load: true,
        output_dir: Some(PathBuf::from("exports")),
        fixed_scale: FixedScaleConfig {
            map_size: 4096.0,
            reference_dim: 2048.0,
            flip_y: true,
        },
        viewport: ViewportConfig {
            scroll_up_factor: 1.5,
            scroll_down_factor: 0.5,
            pan_dampening: 1.0,
        },
    };
    let text = toml::to_string_pretty(&c).unwrap();
    assert_eq!(SynCordsConfig::from_toml_str(&text).unwrap(), c);
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = SynCordsConfig::from_toml_str("clear_points_on_load = \"maybe\"").unwrap_err();
    assert!(matches!(err, SynCordsError::Config(_)), "got {err}");
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("syncords.toml");
    std::fs::write(&path, "[viewport]\npan_dampening = 0.25\n").unwrap();
    let c = SynCordsConfig::load(&path).unwrap();
    assert_abs_diff_eq!(c.viewport.pan_dampening, 0.25);
}

// ---------------------------------------------------------------------------
// Output directory
// ---------------------------------------------------------------------------

#[test]
fn test_output_dir_defaults_next_to_executable() {
    let c = SynCordsConfig::default();
    assert_eq!(
        c.resolve_output_dir(Path::new("/apps/syncords")),
        PathBuf::from("/apps/syncords/cords")
    );
}

#[test]
fn test_relative_output_dir_is_under_executable() {
    let c = SynCordsConfig {
        output_dir: Some(PathBuf::from("exports")),
        ..Default::default()
    };
    assert_eq!(
        c.resolve_output_dir(Path::new("/apps/syncords")),
        PathBuf::from("/apps/syncords/exports")
    );
}

#[test]
fn test_absolute_output_dir_is_used_as_is() {
    let abs = std::env::temp_dir().join("syncords-out");
    let c = SynCordsConfig {
        output_dir: Some(abs.clone()),
        ..Default::default()
    };
    assert_eq!(c.resolve_output_dir(Path::new("/apps/syncords")), abs);
}
