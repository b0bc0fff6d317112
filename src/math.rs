//! Points and helpers for the ST (time, distance) plane.

use cgmath::Point2;

/// A point on an ST diagram: `x` is prediction time in s,
/// `y` is longitudinal distance in m.
pub type StPoint = Point2<f64>;

/// Creates a point from a prediction time and a longitudinal distance.
pub fn st(t: f64, s: f64) -> StPoint {
    StPoint::new(t, s)
}

/// Linearly interpolates between `a` and `b` by the fraction `r`.
/// Exact at both ends: `r = 0` gives `a` and `r = 1` gives `b`.
#[inline(always)]
pub fn lerp(a: f64, b: f64, r: f64) -> f64 {
    a * (1.0 - r) + b * r
}
