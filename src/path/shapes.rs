use std::f64::consts::TAU;

use crate::math::{point_from_center, Point2, Vector2};

use super::{Path, PathBuilder};

/// Creates a full circle from a center point and a radius.
///
/// The path starts at angle `0` (`center + (radius, 0)`) and sweeps a whole
/// turn with increasing angle.
#[must_use]
pub fn circle_at(center: &Point2, radius: f64) -> Path {
    PathBuilder::new()
        .move_to(Point2::new(center.x + radius, center.y))
        .arc(*center, radius, 0.0, TAU, false)
        .build()
}

/// Creates an oblique line through `center + offset`.
///
/// The segment extends `radius` on each side of the shifted center along
/// `angle`, so both endpoints sit at the same distance from it.
#[must_use]
pub fn line_at(center: &Point2, radius: f64, angle: f64, offset: &Vector2) -> Path {
    let shifted = center + offset;

    PathBuilder::new()
        .move_to(point_from_center(&shifted, radius, angle))
        .line_to(point_from_center(&shifted, -radius, angle))
        .build()
}

/// Creates a line between two points, both shifted by `offset`.
#[must_use]
pub fn line_from(start: &Point2, end: &Point2, offset: &Vector2) -> Path {
    PathBuilder::new()
        .move_to(start + offset)
        .line_to(end + offset)
        .build()
}
