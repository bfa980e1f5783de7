use super::{Point2, Vector2};

/// Computes the destination point from a center, a radius and an angle.
///
/// The angle is in radians, `0` pointing along `+x`. A negative radius
/// points the other way; NaN propagates.
#[must_use]
pub fn point_from_center(center: &Point2, radius: f64, angle: f64) -> Point2 {
    let (s, c) = angle.sin_cos();
    Point2::new(center.x + radius * c, center.y + radius * s)
}

/// Returns the arithmetic mean of three points.
#[must_use]
pub fn centroid(a: &Point2, b: &Point2, c: &Point2) -> Point2 {
    Point2::from((a.coords + b.coords + c.coords) / 3.0)
}

/// Returns the offset that moves the gravity center of `a`, `b`, `c` onto `center`.
///
/// Adding the result to each of the three points re-centers the triangle
/// they form around `center`.
#[must_use]
pub fn gravity_offset(center: &Point2, a: &Point2, b: &Point2, c: &Point2) -> Vector2 {
    center - centroid(a, b, c)
}
