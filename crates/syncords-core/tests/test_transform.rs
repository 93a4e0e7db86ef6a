use approx::assert_abs_diff_eq;

use syncords_core::config::FixedScaleConfig;
use syncords_core::transform::{AffineTransform, FixedScaleTransform, GeoTransform, WorldPoint};

const EPS: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Affine variant
// ---------------------------------------------------------------------------

#[test]
fn test_affine_matches_hand_computed_values() {
    let t = GeoTransform::Affine(AffineTransform::new(2.0, 0.5, 100.0, -0.25, -3.0, 50.0));
    let w = t.pixel_to_world(7, 11);

    // a*px + b*py + c, -(d*px + e*py + f)
    assert_abs_diff_eq!(w.x, 2.0 * 7.0 + 0.5 * 11.0 + 100.0, epsilon = EPS);
    assert_abs_diff_eq!(w.y, -(-0.25 * 7.0 + -3.0 * 11.0 + 50.0), epsilon = EPS);
    assert_abs_diff_eq!(w.x, 119.5, epsilon = EPS);
    assert_abs_diff_eq!(w.y, -15.25, epsilon = EPS);
}

#[test]
fn test_identity_affine_flips_y() {
    let t = GeoTransform::Affine(AffineTransform::identity());
    assert_eq!(t.pixel_to_world(10, 20), WorldPoint::new(10.0, -20.0));
}

#[test]
fn test_affine_apply_has_no_flip() {
    let t = AffineTransform::new(1.0, 0.0, 5.0, 0.0, 1.0, 7.0);
    assert_eq!(t.apply(1.0, 2.0), (6.0, 9.0));
}

#[test]
fn test_affine_from_tiepoint_at_origin() {
    let t = AffineTransform::from_tiepoint(
        &[10.0, 10.0, 0.0],
        &[0.0, 0.0, 0.0, 500_000.0, 4_000_000.0, 0.0],
    )
    .unwrap();
    assert_eq!(t, AffineTransform::new(10.0, 0.0, 500_000.0, 0.0, -10.0, 4_000_000.0));

    let w = GeoTransform::Affine(t).pixel_to_world(1, 2);
    assert_abs_diff_eq!(w.x, 500_010.0, epsilon = EPS);
    assert_abs_diff_eq!(w.y, -3_999_980.0, epsilon = EPS);
}

#[test]
fn test_affine_from_tiepoint_with_pixel_offset() {
    let t = AffineTransform::from_tiepoint(&[1.0, 2.0], &[2.0, 3.0, 0.0, 100.0, 200.0, 0.0]).unwrap();
    // The tiepoint pixel must land on the tiepoint model coordinate.
    let (x, y) = t.apply(2.0, 3.0);
    assert_abs_diff_eq!(x, 100.0, epsilon = EPS);
    assert_abs_diff_eq!(y, 200.0, epsilon = EPS);
    assert_abs_diff_eq!(t.c, 98.0, epsilon = EPS);
    assert_abs_diff_eq!(t.f, 206.0, epsilon = EPS);
}

#[test]
fn test_affine_from_short_tags_is_none() {
    assert!(AffineTransform::from_tiepoint(&[1.0], &[0.0; 6]).is_none());
    assert!(AffineTransform::from_tiepoint(&[1.0, 1.0], &[0.0; 5]).is_none());
    assert!(AffineTransform::from_model_transformation(&[0.0; 15]).is_none());
}

#[test]
fn test_affine_from_model_transformation() {
    #[rustfmt::skip]
    let m = [
        0.5, 0.1, 0.0, 300.0,
        0.2, -0.5, 0.0, 900.0,
        0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ];
    let t = AffineTransform::from_model_transformation(&m).unwrap();
    assert_eq!(t, AffineTransform::new(0.5, 0.1, 300.0, 0.2, -0.5, 900.0));
}

// ---------------------------------------------------------------------------
// Fixed-scale variant
// ---------------------------------------------------------------------------

fn unit_scale(flip_y: bool) -> FixedScaleConfig {
    FixedScaleConfig {
        map_size: 1493.0,
        reference_dim: 1493.0,
        flip_y,
    }
}

#[test]
fn test_fixed_scale_center_maps_to_origin() {
    let t = GeoTransform::FixedScale(FixedScaleTransform::new(&unit_scale(false), 100, 50));
    assert_eq!(t.pixel_to_world(50, 25), WorldPoint::new(0.0, 0.0));
}

#[test]
fn test_fixed_scale_without_flip_keeps_row_direction() {
    let t = GeoTransform::FixedScale(FixedScaleTransform::new(&unit_scale(false), 100, 50));
    assert_eq!(t.pixel_to_world(60, 20), WorldPoint::new(10.0, -5.0));
    assert_eq!(t.pixel_to_world(40, 30), WorldPoint::new(-10.0, 5.0));
}

#[test]
fn test_fixed_scale_with_flip_negates_y() {
    let t = GeoTransform::FixedScale(FixedScaleTransform::new(&unit_scale(true), 100, 50));
    assert_eq!(t.pixel_to_world(60, 20), WorldPoint::new(10.0, 5.0));
}

#[test]
fn test_fixed_scale_applies_map_ratio() {
    let config = FixedScaleConfig {
        map_size: 8000.0,
        reference_dim: 1493.0,
        flip_y: false,
    };
    let t = GeoTransform::FixedScale(FixedScaleTransform::new(&config, 1493, 1493));
    let w = t.pixel_to_world(1493, 0);
    assert_abs_diff_eq!(w.x, 746.5 * 8000.0 / 1493.0, epsilon = 1e-6);
    assert_abs_diff_eq!(w.y, -746.5 * 8000.0 / 1493.0, epsilon = 1e-6);
}

#[test]
fn test_fixed_scale_odd_width_uses_half_pixel_center() {
    let t = FixedScaleTransform::new(&unit_scale(false), 5, 3);
    assert_abs_diff_eq!(t.center_x, 2.5, epsilon = EPS);
    assert_abs_diff_eq!(t.center_y, 1.5, epsilon = EPS);
    let w = GeoTransform::FixedScale(t).pixel_to_world(0, 0);
    assert_eq!(w, WorldPoint::new(-2.5, -1.5));
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn test_world_point_display_two_decimals() {
    assert_eq!(WorldPoint::new(1.5, -2.25).to_string(), "(1.50, -2.25)");
    assert_eq!(WorldPoint::new(10.0, -20.0).to_string(), "(10.00, -20.00)");
}

#[test]
fn test_transform_kind_names() {
    let affine = GeoTransform::Affine(AffineTransform::identity());
    let fixed = GeoTransform::FixedScale(FixedScaleTransform::new(&unit_scale(false), 2, 2));
    assert_eq!(affine.kind(), "Affine");
    assert_eq!(fixed.kind(), "Fixed scale");
    assert!(affine.to_string().starts_with("Affine"));
}
