//! Plane geometry — points, lines and segments.

pub mod line;
pub mod point;
pub mod segment;

pub use line::Line;
pub use point::{Pt, Vec2};
pub use segment::{Segment, SegmentId, SegmentType};

/// Distances below this are treated as coincident.
pub const EPSILON: f64 = 1e-9;
