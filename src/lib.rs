pub mod error;
pub mod math;
pub mod path;
pub mod tessellation;

pub use error::{GlyphPathError, Result};
pub use math::{centroid, gravity_offset, point_from_center, Point2, Vector2};
pub use path::{circle_at, line_at, line_from, ArcSegment, Path, PathBuilder, PathCommand};
pub use tessellation::{flatten, Polyline, TessellationParams};
