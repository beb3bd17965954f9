// Sphere layout: even distribution on the Fibonacci spiral.

use glam::DVec3;
use tagcloud_core::layout::{fibonacci_sphere, golden_angle, unit_point};

const EPS: f64 = 1e-9;

#[test]
fn golden_angle_matches_closed_form() {
    assert!((golden_angle() - 2.399_963_229_728_653).abs() < 1e-12);
}

#[test]
fn every_point_lies_on_the_scaled_sphere() {
    for n in 2..64 {
        let radius = DVec3::new(120.0, 80.0, 50.0);
        for p in fibonacci_sphere(n, radius) {
            let q = p / radius;
            let len_sq = q.x * q.x + q.y * q.y + q.z * q.z;
            assert!((len_sq - 1.0).abs() < EPS, "n={n} point {p:?} off sphere");
        }
    }
}

#[test]
fn five_items_radius_100_first_at_top_pole() {
    let pts = fibonacci_sphere(5, DVec3::splat(100.0));
    assert_eq!(pts.len(), 5);
    assert!((pts[0] - DVec3::new(0.0, 100.0, 0.0)).length() < EPS);
    // last point sits on the bottom pole
    assert!((pts[4].y + 100.0).abs() < EPS);
    assert!(pts[4].x.abs() < EPS && pts[4].z.abs() < EPS);
}

#[test]
fn y_sweeps_linearly_from_top_to_bottom() {
    let pts = fibonacci_sphere(11, DVec3::ONE);
    for (i, p) in pts.iter().enumerate() {
        let expected = 1.0 - (i as f64 / 10.0) * 2.0;
        assert!((p.y - expected).abs() < EPS, "index {i}: y={}", p.y);
    }
}

#[test]
fn no_two_points_coincide() {
    let pts = fibonacci_sphere(200, DVec3::splat(1.0));
    for i in 0..pts.len() {
        for j in (i + 1)..pts.len() {
            assert!(
                pts[i].distance(pts[j]) > 1e-3,
                "points {i} and {j} coincide"
            );
        }
    }
}

#[test]
fn layout_is_deterministic() {
    let a = fibonacci_sphere(37, DVec3::splat(250.0));
    let b = fibonacci_sphere(37, DVec3::splat(250.0));
    assert_eq!(a, b);
}

#[test]
fn zero_items_is_empty() {
    assert!(fibonacci_sphere(0, DVec3::splat(100.0)).is_empty());
}

#[test]
fn single_item_avoids_division_by_zero() {
    let p = unit_point(0, 1);
    assert!(p.is_finite());
    let pts = fibonacci_sphere(1, DVec3::splat(100.0));
    assert!((pts[0] - DVec3::new(0.0, 100.0, 0.0)).length() < EPS);
}

#[test]
fn points_are_spread_over_both_hemispheres() {
    let pts = fibonacci_sphere(50, DVec3::ONE);
    let front = pts.iter().filter(|p| p.z > 0.0).count();
    let back = pts.iter().filter(|p| p.z < 0.0).count();
    assert!(front > 15 && back > 15, "front={front} back={back}");
}
