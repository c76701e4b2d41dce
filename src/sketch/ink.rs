//! Ink — a pen stroke already segmented into geometric elements.

use crate::geometry::{Pt, Segment, SegmentId, SegmentType};

/// The segments recovered from one ink stroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ink {
    pub segments: Vec<Segment>,
}

impl Ink {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// A stroke consisting of a single dot at `at`.
    pub fn dot(at: Pt) -> Self {
        Self::new(vec![Segment::dot(SegmentId(0), at)])
    }

    /// The dot segment, if this ink is exactly one dot.
    pub fn single_dot(&self) -> Option<&Segment> {
        match self.segments.as_slice() {
            [seg] if seg.kind == SegmentType::Dot => Some(seg),
            _ => None,
        }
    }
}
