use std::f64::consts::TAU;

use tracing::debug;

use crate::error::{Result, TessellationError};
use crate::math::arc_2d::{arc_point_at, arc_subdivision_count};
use crate::math::{Point2, TOLERANCE};
use crate::path::{ArcSegment, Path, PathCommand};

/// Parameters controlling tessellation quality.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Maximum allowed deviation from the true geometry.
    pub tolerance: f64,
    /// Minimum number of segments for a full circle.
    pub min_segments: usize,
    /// Maximum number of segments for a full circle.
    pub max_segments: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            min_segments: 4,
            max_segments: 256,
        }
    }
}

impl TessellationParams {
    /// Creates validated tessellation parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not positive, `min_segments` is zero,
    /// or `min_segments` exceeds `max_segments`.
    pub fn new(tolerance: f64, min_segments: usize, max_segments: usize) -> Result<Self> {
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(TessellationError::InvalidParameters(
                "tolerance must be positive".to_owned(),
            )
            .into());
        }
        if min_segments == 0 {
            return Err(TessellationError::InvalidParameters(
                "min_segments must be at least 1".to_owned(),
            )
            .into());
        }
        if min_segments > max_segments {
            return Err(TessellationError::InvalidParameters(format!(
                "min_segments ({min_segments}) exceeds max_segments ({max_segments})"
            ))
            .into());
        }
        Ok(Self {
            tolerance,
            min_segments,
            max_segments,
        })
    }

    /// Number of chords used for `arc`, scaled to its share of a full turn.
    fn arc_segments(&self, arc: &ArcSegment, abs_sweep: f64) -> u32 {
        let share = abs_sweep / TAU;
        let scaled = |n: usize| {
            let n = f64::from(u32::try_from(n).unwrap_or(u32::MAX));
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let s = (n * share).ceil() as u32;
            s.max(1)
        };
        let lo = scaled(self.min_segments);
        let hi = scaled(self.max_segments).max(lo);
        arc_subdivision_count(arc.radius, abs_sweep, self.tolerance).clamp(lo, hi)
    }
}

/// A polyline approximation of one subpath.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
    /// Whether the last vertex connects back to the first.
    pub closed: bool,
}

/// Flattens `path` into one polyline per subpath.
///
/// Arcs are approximated by chords within `params.tolerance`. An arc that
/// does not begin at the current point is joined to it by a straight line.
#[must_use]
pub fn flatten(path: &Path, params: &TessellationParams) -> Vec<Polyline> {
    let mut polylines = Vec::new();
    let mut points: Vec<Point2> = Vec::new();
    // Where a command after `Close` continues from.
    let mut reopen_at: Option<Point2> = None;

    for cmd in path.commands() {
        match cmd {
            PathCommand::MoveTo(p) => {
                finish(&mut polylines, &mut points, false);
                reopen_at = None;
                points.push(*p);
            }
            PathCommand::LineTo(p) => {
                if points.is_empty() {
                    points.extend(reopen_at.take());
                }
                points.push(*p);
            }
            PathCommand::Arc(arc) => {
                if points.is_empty() {
                    points.extend(reopen_at.take());
                }
                let start = arc.start_point();
                push_distinct(&mut points, start);

                let sweep = arc.sweep();
                if sweep.abs() < TOLERANCE {
                    continue;
                }
                let n = params.arc_segments(arc, sweep.abs());
                for j in 1..=n {
                    let t = f64::from(j) / f64::from(n);
                    points.push(arc_point_at(&arc.center, arc.radius, arc.start_angle, sweep, t));
                }
            }
            PathCommand::Close => {
                // A repeated close keeps the start of the subpath it closed.
                if let Some(first) = points.first() {
                    reopen_at = Some(*first);
                }
                finish(&mut polylines, &mut points, true);
            }
        }
    }
    finish(&mut polylines, &mut points, false);

    debug!(
        commands = path.len(),
        subpaths = polylines.len(),
        points = polylines.iter().map(|p| p.points.len()).sum::<usize>(),
        "flattened path"
    );

    polylines
}

fn push_distinct(points: &mut Vec<Point2>, p: Point2) {
    if points.last().is_some_and(|last| (last - p).norm() < TOLERANCE) {
        return;
    }
    points.push(p);
}

fn finish(polylines: &mut Vec<Polyline>, points: &mut Vec<Point2>, closed: bool) {
    if points.is_empty() {
        return;
    }
    polylines.push(Polyline {
        points: std::mem::take(points),
        closed,
    });
}
