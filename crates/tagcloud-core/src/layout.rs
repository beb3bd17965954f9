//! Even distribution of tags over a sphere.
//!
//! Points follow the Fibonacci (golden-angle) spiral: `y` sweeps linearly from
//! the top pole to the bottom pole while the azimuth advances by the golden
//! angle per point. Placement depends only on the point count.

use glam::DVec3;
use std::f64::consts::PI;

/// `π · (3 − √5)`, in radians.
#[inline]
pub fn golden_angle() -> f64 {
    PI * (3.0 - 5.0_f64.sqrt())
}

/// Unit-sphere position of point `index` out of `count`.
///
/// With a single point the sweep fraction is taken as 0, which puts it on
/// the top pole instead of dividing by zero.
pub fn unit_point(index: usize, count: usize) -> DVec3 {
    let sweep = if count > 1 {
        index as f64 / (count - 1) as f64
    } else {
        0.0
    };
    let y = 1.0 - sweep * 2.0;
    let radius_at_y = (1.0 - y * y).max(0.0).sqrt();
    let theta = golden_angle() * index as f64;
    DVec3::new(theta.cos() * radius_at_y, y, theta.sin() * radius_at_y)
}

/// Lay out `count` points on a sphere scaled per axis by `radius`.
pub fn fibonacci_sphere(count: usize, radius: DVec3) -> Vec<DVec3> {
    (0..count).map(|i| unit_point(i, count) * radius).collect()
}
