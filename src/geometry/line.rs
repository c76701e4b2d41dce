//! Infinite line through two points.

use super::point::{Pt, Vec2};

/// An unbounded line passing through `start` and `end`, oriented start → end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Pt,
    pub end: Pt,
}

impl Line {
    pub fn new(start: Pt, end: Pt) -> Self {
        Self { start, end }
    }

    pub fn direction(&self) -> Vec2 {
        Vec2::between(self.start, self.end)
    }

    /// Position of the orthogonal projection of `pt`, measured along the line
    /// in units of `|end - start|`. Not clamped. Zero for a degenerate line.
    pub fn project_param(&self, pt: Pt) -> f64 {
        let d = self.direction();
        let len_sq = d.dot(d);
        if len_sq < super::EPSILON * super::EPSILON {
            return 0.0;
        }
        Vec2::between(self.start, pt).dot(d) / len_sq
    }

    /// Signed distance from the line; positive on the left of start → end.
    pub fn signed_offset(&self, pt: Pt) -> f64 {
        let d = self.direction();
        let len = d.mag();
        if len < super::EPSILON {
            return 0.0;
        }
        Vec2::between(self.start, pt).dot(d.perp()) / len
    }
}
