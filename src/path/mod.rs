mod shapes;

pub use shapes::{circle_at, line_at, line_from};

use crate::math::arc_2d::{arc_point_at, arc_sweep};
use crate::math::{Point2, Vector2};

/// A circular arc drawn by [`PathCommand::Arc`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    /// Center of the arc's circle.
    pub center: Point2,
    /// Radius of the arc's circle.
    pub radius: f64,
    /// Start angle in radians, `0` along `+x`.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Whether the arc runs with decreasing angle.
    pub clockwise: bool,
}

impl ArcSegment {
    /// Returns the signed sweep angle of the arc.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        arc_sweep(self.start_angle, self.end_angle, self.clockwise)
    }

    /// Returns the point where the arc begins.
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        arc_point_at(&self.center, self.radius, self.start_angle, 0.0, 0.0)
    }

    /// Returns the point where the arc ends.
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        arc_point_at(&self.center, self.radius, self.start_angle, self.sweep(), 1.0)
    }
}

/// A single drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Starts a new subpath at a point.
    MoveTo(Point2),
    /// Draws a straight line from the current point.
    LineTo(Point2),
    /// Draws a circular arc.
    ///
    /// When the path already has a current point, a straight line joins it
    /// to the arc's start point first.
    Arc(ArcSegment),
    /// Closes the current subpath back to its start.
    Close,
}

/// An ordered sequence of drawing commands, consumed by a renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the drawing commands.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns the number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if the path has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the first point the path visits.
    #[must_use]
    pub fn first_point(&self) -> Option<Point2> {
        self.commands.iter().find_map(|cmd| match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::Arc(arc) => Some(arc.start_point()),
            PathCommand::Close => None,
        })
    }

    /// Returns the point where the next command would continue from.
    #[must_use]
    pub fn current_point(&self) -> Option<Point2> {
        let mut start = None;
        let mut current = None;
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) => {
                    start = Some(*p);
                    current = Some(*p);
                }
                PathCommand::LineTo(p) => {
                    start = start.or(Some(*p));
                    current = Some(*p);
                }
                PathCommand::Arc(arc) => {
                    start = start.or_else(|| Some(arc.start_point()));
                    current = Some(arc.end_point());
                }
                PathCommand::Close => current = start,
            }
        }
        current
    }

    /// Appends the commands of another path.
    pub fn extend(&mut self, other: &Path) {
        self.commands.extend_from_slice(&other.commands);
    }

    /// Moves every point of the path by `offset`.
    pub fn translate(&mut self, offset: &Vector2) {
        for cmd in &mut self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => *p += *offset,
                PathCommand::Arc(arc) => arc.center += *offset,
                PathCommand::Close => {}
            }
        }
    }
}

/// Builder for constructing paths.
///
/// Tracks the current point so that [`PathBuilder::line_to`] can start a
/// subpath when nothing has been drawn yet.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    path: Path,
    current: Option<Point2>,
    start: Option<Point2>,
}

impl PathBuilder {
    /// Creates a new path builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves to a point without drawing.
    #[must_use]
    pub fn move_to(mut self, to: Point2) -> Self {
        self.path.commands.push(PathCommand::MoveTo(to));
        self.current = Some(to);
        self.start = Some(to);
        self
    }

    /// Draws a line to a point, or moves there if there is no current point.
    #[must_use]
    pub fn line_to(mut self, to: Point2) -> Self {
        if self.current.is_none() {
            return self.move_to(to);
        }
        self.path.commands.push(PathCommand::LineTo(to));
        self.current = Some(to);
        self
    }

    /// Draws a circular arc around `center`.
    #[must_use]
    pub fn arc(
        mut self,
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) -> Self {
        let arc = ArcSegment {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        };
        if self.current.is_none() {
            self.start = Some(arc.start_point());
        }
        self.path.commands.push(PathCommand::Arc(arc));
        self.current = Some(arc.end_point());
        self
    }

    /// Closes the current subpath.
    #[must_use]
    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self.current = self.start;
        self
    }

    /// Returns the current point, if any.
    #[must_use]
    pub fn current_point(&self) -> Option<Point2> {
        self.current
    }

    /// Finishes building and returns the path.
    #[must_use]
    pub fn build(self) -> Path {
        self.path
    }
}
