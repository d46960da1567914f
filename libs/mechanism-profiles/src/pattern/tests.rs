//! # Pattern Profile Tests

use super::*;
use approx::assert_abs_diff_eq;

fn slider_params() -> PatternParams {
    PatternParams::new(15.0)
}

fn assert_point_near(actual: DVec2, expected: DVec2) {
    assert!(
        actual.distance(expected) < 1e-12,
        "expected {expected:?}, got {actual:?}"
    );
}

/// Fixed arc resolution so vertex counts are predictable.
fn fixed_config() -> GenerationConfig {
    GenerationConfig {
        arc_fragments: 36,
        ..GenerationConfig::default()
    }
}

// =============================================================================
// PADDLE CONSTRUCTION
// =============================================================================

#[test]
fn test_solid_paddle_has_no_stub() {
    let segments = paddle_segments(&slider_params(), 0.0);
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].start(), DVec2::ZERO);
    assert_point_near(segments[0].end(), DVec2::new(12.75, -3.0));
    assert_point_near(segments[1].end(), DVec2::new(12.75, 3.0));
    assert_eq!(segments[2].end(), DVec2::ZERO);

    // Below the tolerance the stub would be a degenerate edge
    assert_eq!(paddle_segments(&slider_params(), 1e-9).len(), 3);
}

#[test]
fn test_clearance_paddle_segments() {
    let gap = 0.3;
    let segments = paddle_segments(&slider_params(), gap);
    assert_eq!(segments.len(), 5);

    assert_eq!(segments[0], ProfileSegment::line(DVec2::ZERO, DVec2::new(gap, 0.0)));
    assert_point_near(segments[1].end(), DVec2::new(12.75, -3.3));
    match segments[2] {
        ProfileSegment::Arc {
            center,
            radius,
            start_angle,
            sweep_angle,
        } => {
            assert_point_near(center, DVec2::new(12.75, 0.0));
            assert_abs_diff_eq!(radius, 3.3, epsilon = 1e-12);
            assert_eq!(start_angle, 270.0);
            assert_eq!(sweep_angle, 180.0);
        }
        other => panic!("expected the tip arc, got {other:?}"),
    }
    assert_point_near(segments[2].end(), DVec2::new(12.75, 3.3));
    assert_eq!(segments[3].end(), DVec2::new(-gap, 0.0));
    assert_eq!(segments[4].end(), DVec2::ZERO);

    // Consecutive segments share endpoints
    for pair in segments.windows(2) {
        assert_abs_diff_eq!(pair[0].end().distance(pair[1].start()), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_outline_is_counter_clockwise() {
    for gap in [0.0, 0.3] {
        let profile = build_pattern_profile(&slider_params(), gap, &fixed_config()).unwrap();
        assert!(profile.outline.signed_area() > 0.0);
    }
}

#[test]
fn test_outline_vertex_counts() {
    // 36 fragments per circle: the half-circle tip is 18 pieces
    let solid = build_pattern_profile(&slider_params(), 0.0, &fixed_config()).unwrap();
    assert_eq!(solid.outline.vertex_count(), 2 + 18);
    assert_eq!(solid.outline.outer[0], DVec2::ZERO);

    let clearance = build_pattern_profile(&slider_params(), 0.3, &fixed_config()).unwrap();
    assert_eq!(clearance.outline.vertex_count(), 3 + 18 + 1);
    assert_eq!(clearance.outline.outer[1], DVec2::new(0.3, 0.0));
    assert!(clearance.has_stub());
    assert!(!solid.has_stub());
}

#[test]
fn test_hub_radius() {
    let solid = build_pattern_profile(&slider_params(), 0.0, &fixed_config()).unwrap();
    let clearance = build_pattern_profile(&slider_params(), 0.3, &fixed_config()).unwrap();
    assert_abs_diff_eq!(solid.hub.radius, 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(clearance.hub.radius, 5.3, epsilon = 1e-12);
    assert_eq!(solid.hub.center, DVec2::ZERO);
    assert_eq!(solid.hub_outline.vertex_count(), 36);
}

// =============================================================================
// REPLICATION
// =============================================================================

#[test]
fn test_six_patterns_replica_angles() {
    let profile = build_pattern_profile(&slider_params(), 0.0, &fixed_config()).unwrap();
    assert_eq!(profile.replica_angles, vec![60.0, 120.0, 180.0, 240.0, 300.0]);
    assert_eq!(
        profile.paddle_angles(),
        vec![0.0, 60.0, 120.0, 180.0, 240.0, 300.0]
    );
    assert_eq!(profile.paddle_count(), 6);
    assert_eq!(profile.angular_spacing(), 60.0);
}

#[test]
fn test_replica_count_matches_pattern_count() {
    for n in 2..=12 {
        let angles = replica_angles(n);
        assert_eq!(angles.len() + 1, n as usize);
        assert!(angles.iter().all(|&a| a > 0.0 && a < 360.0));
        for pair in angles.windows(2) {
            assert_abs_diff_eq!(pair[1] - pair[0], 360.0 / n as f64, epsilon = 1e-9);
        }
    }
    assert_eq!(replica_angles(2), vec![180.0]);
}

#[test]
fn test_region_holds_every_paddle_and_hub() {
    let profile = build_pattern_profile(&slider_params(), 0.3, &fixed_config()).unwrap();
    let region = profile.region();
    assert_eq!(region.outlines.len(), 7);

    // Every paddle tip is covered, in both the region and the direct test
    for angle in profile.paddle_angles() {
        let tip = crate::geometry::rotate_point(DVec2::new(14.0, 0.0), angle);
        assert!(region.contains(tip), "tip at {angle} missing");
        assert!(profile.contains(tip), "tip at {angle} missing");
    }
    // Between two paddles and outside the hub is empty
    let between = crate::geometry::rotate_point(DVec2::new(10.0, 0.0), 30.0);
    assert!(!region.contains(between));
    assert!(!profile.contains(between));
}

#[test]
fn test_max_extent() {
    let solid = build_pattern_profile(&slider_params(), 0.0, &fixed_config()).unwrap();
    let clearance = build_pattern_profile(&slider_params(), 0.3, &fixed_config()).unwrap();
    assert_abs_diff_eq!(solid.max_extent(), 15.75, epsilon = 1e-12);
    assert_abs_diff_eq!(clearance.max_extent(), 16.05, epsilon = 1e-12);
    for point in solid.region().outlines.iter().flat_map(|o| &o.outer) {
        assert!(point.length() <= solid.max_extent() + 1e-12);
    }

    // A small tip sitting inside the hub leaves the hub as the extent
    let stubby = PatternParams {
        straight_fraction: 0.1,
        radius_fraction: 0.1,
        ..slider_params()
    };
    let profile = build_pattern_profile(&stubby, 0.0, &fixed_config()).unwrap();
    assert_abs_diff_eq!(profile.max_extent(), 5.0, epsilon = 1e-12);
}

// =============================================================================
// SOLID AND CLEARANCE
// =============================================================================

#[test]
fn test_solid_lies_within_clearance() {
    let (solid, clearance) =
        build_pattern_pair(&slider_params(), 0.3, &GenerationConfig::default()).unwrap();

    for outline in solid.region().outlines {
        let n = outline.vertex_count();
        for i in 0..n {
            let a = outline.outer[i];
            let b = outline.outer[(i + 1) % n];
            for point in [a, (a + b) / 2.0] {
                assert!(
                    clearance.contains(point),
                    "solid boundary point {point:?} outside clearance"
                );
            }
        }
    }
}

#[test]
fn test_clearance_extends_beyond_solid() {
    let (solid, clearance) =
        build_pattern_pair(&slider_params(), 0.3, &GenerationConfig::default()).unwrap();
    let beyond_tip = DVec2::new(12.75 + 3.1, 0.0);
    assert!(clearance.contains(beyond_tip));
    assert!(!solid.contains(beyond_tip));
    assert!(!clearance.contains(DVec2::new(clearance.max_extent() + 0.01, 0.0)));
}

#[test]
fn test_pair_shares_rotation_set() {
    let (solid, clearance) =
        build_pattern_pair(&slider_params(), 0.3, &GenerationConfig::default()).unwrap();
    assert_eq!(solid.gap, 0.0);
    assert_eq!(clearance.gap, 0.3);
    assert_eq!(solid.replica_angles, clearance.replica_angles);
    assert_eq!(solid.params, clearance.params);
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn test_invalid_parameters() {
    let config = GenerationConfig::default();
    let cases = [
        (
            PatternParams {
                number_of_patterns: 1,
                ..slider_params()
            },
            "number_of_patterns",
        ),
        (
            PatternParams {
                straight_fraction: 1.0,
                ..slider_params()
            },
            "straight_fraction",
        ),
        (
            PatternParams {
                radius_fraction: 0.0,
                ..slider_params()
            },
            "radius_fraction",
        ),
        (
            PatternParams {
                pattern_radius: -15.0,
                ..slider_params()
            },
            "pattern_radius",
        ),
    ];
    for (params, expected) in cases {
        match build_pattern_profile(&params, 0.0, &config) {
            Err(MechanismError::Configuration { parameter, .. }) => assert_eq!(parameter, expected),
            other => panic!("expected configuration error for {expected}, got {other:?}"),
        }
    }

    assert!(build_pattern_profile(&slider_params(), -0.1, &config).is_err());
    assert!(build_pattern_profile(&slider_params(), f64::INFINITY, &config).is_err());
    assert!(build_pattern_pair(&slider_params(), 0.0, &config).is_err());
}

#[test]
fn test_build_is_idempotent() {
    let config = GenerationConfig::default();
    assert_eq!(
        build_pattern_pair(&slider_params(), 0.3, &config).unwrap(),
        build_pattern_pair(&slider_params(), 0.3, &config).unwrap()
    );
}
