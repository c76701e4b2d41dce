//! Segments — oriented straight elements of a sketch, and dot strokes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::line::Line;
use super::point::{Pt, Vec2};
use super::EPSILON;

/// Identity of a segment within a sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SegmentId(pub u64);

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seg#{}", self.0)
    }
}

/// What kind of element a segment is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentType {
    /// A straight line from `p1` to `p2`.
    Line,
    /// A single-point stroke; `p1 == p2`.
    Dot,
}

/// An oriented element with endpoints `p1` and `p2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: SegmentId,
    pub kind: SegmentType,
    pub p1: Pt,
    pub p2: Pt,
}

impl Segment {
    pub fn line(id: SegmentId, p1: Pt, p2: Pt) -> Self {
        Self {
            id,
            kind: SegmentType::Line,
            p1,
            p2,
        }
    }

    pub fn dot(id: SegmentId, at: Pt) -> Self {
        Self {
            id,
            kind: SegmentType::Dot,
            p1: at,
            p2: at,
        }
    }

    pub fn length(&self) -> f64 {
        self.p1.distance(self.p2)
    }

    /// The infinite line through `p1` and `p2`.
    pub fn as_line(&self) -> Line {
        Line::new(self.p1, self.p2)
    }

    /// Closest point on the segment span to `pt`.
    ///
    /// A zero-length segment always yields `p1`.
    pub fn nearest_point(&self, pt: Pt) -> Pt {
        if self.length() < EPSILON {
            return self.p1;
        }
        let t = self.as_line().project_param(pt).clamp(0.0, 1.0);
        self.p1.lerp(self.p2, t)
    }

    pub fn distance_to(&self, pt: Pt) -> f64 {
        pt.distance(self.nearest_point(pt))
    }

    /// Whether `pt` is strictly closer than `threshold` to the segment.
    pub fn is_near(&self, pt: Pt, threshold: f64) -> bool {
        self.distance_to(pt) < threshold
    }

    /// Resolve a parametric position `(t, s)`: `t` runs `p1 → p2`, `s` is the
    /// perpendicular offset, both in units of the segment length.
    pub fn point_at(&self, param: Vec2) -> Pt {
        let d = Vec2::between(self.p1, self.p2);
        self.p1 + d * param.x + d.perp() * param.y
    }

    /// Parametric position of `pt` relative to `line`, normalized by `length`.
    ///
    /// Returns `(t, s)` as accepted by [`Segment::point_at`]. A length below
    /// [`EPSILON`] yields `(0, 0)`.
    pub fn parameter_for_point(length: f64, line: &Line, pt: Pt) -> Vec2 {
        if length < EPSILON {
            return Vec2::default();
        }
        let dir = line.direction();
        let dir_len = dir.mag();
        if dir_len < EPSILON {
            return Vec2::default();
        }
        let along = Vec2::between(line.start, pt).dot(dir) / dir_len;
        Vec2::new(along / length, line.signed_offset(pt) / length)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} ({:.2}, {:.2}) -> ({:.2}, {:.2})",
            self.id, self.kind, self.p1.x, self.p1.y, self.p2.x, self.p2.y
        )
    }
}
