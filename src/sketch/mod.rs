//! Sketch model — the geometry collaborator recognizers read from and commit to.

pub mod book;
pub mod guide;
pub mod ink;

pub use book::SketchBook;
pub use guide::GuidePoint;
pub use ink::Ink;

use crate::geometry::{Pt, Segment, SegmentId};

/// The operations a recognizer needs from the sketch it works against.
pub trait GeometryModel {
    /// All current segments. The order is stable for one query only.
    fn segments(&self) -> Vec<Segment>;

    /// Current state of a segment, if it is still part of the model.
    fn segment(&self, id: SegmentId) -> Option<Segment> {
        self.segments().into_iter().find(|s| s.id == id)
    }

    /// Replace `seg` with pieces divided at `at`, returning the pieces.
    fn split_segment(&mut self, seg: &Segment, at: Pt) -> Vec<Segment>;

    /// Register a new guide point.
    fn add_guide_point(&mut self, gp: GuidePoint);
}
