//! SketchBook — in-memory geometry model holding segments and guide points.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::guide::GuidePoint;
use super::GeometryModel;
use crate::geometry::{Pt, Segment, SegmentId, EPSILON};

/// Segments in insertion order plus registered guide points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SketchBook {
    #[serde(default)]
    segments: Vec<Segment>,
    #[serde(default)]
    guide_points: Vec<GuidePoint>,
    /// Next id to hand out. Saved with the sketch so ids of removed
    /// segments are not reused after a reload.
    #[serde(default)]
    next_id: u64,
}

impl SketchBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a straight segment from `p1` to `p2` and return it.
    pub fn add_line(&mut self, p1: Pt, p2: Pt) -> Segment {
        let seg = Segment::line(self.alloc_id(), p1, p2);
        self.segments.push(seg);
        seg
    }

    /// Remove a segment, returning it if it was present.
    pub fn remove_segment(&mut self, id: SegmentId) -> Option<Segment> {
        let idx = self.segments.iter().position(|s| s.id == id)?;
        Some(self.segments.remove(idx))
    }

    pub fn guide_points(&self) -> &[GuidePoint] {
        &self.guide_points
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Next unused id. Skips past ids already present, so sketches loaded
    /// from YAML never collide with their own segments.
    fn alloc_id(&mut self) -> SegmentId {
        let floor = self
            .segments
            .iter()
            .map(|s| s.id.0 + 1)
            .max()
            .unwrap_or(0);
        let id = self.next_id.max(floor);
        self.next_id = id + 1;
        SegmentId(id)
    }
}

impl GeometryModel for SketchBook {
    fn segments(&self) -> Vec<Segment> {
        self.segments.clone()
    }

    fn segment(&self, id: SegmentId) -> Option<Segment> {
        self.segments.iter().find(|s| s.id == id).copied()
    }

    /// Replace `seg` by `p1 → at` and `at → p2`, keeping its enumeration slot.
    ///
    /// Splitting within [`EPSILON`] of an endpoint leaves the sketch untouched
    /// and returns the current segment alone. Unknown segments yield nothing.
    fn split_segment(&mut self, seg: &Segment, at: Pt) -> Vec<Segment> {
        let Some(idx) = self.segments.iter().position(|s| s.id == seg.id) else {
            return Vec::new();
        };
        let current = self.segments[idx];
        if at.distance(current.p1) < EPSILON || at.distance(current.p2) < EPSILON {
            debug!(segment = %current, "split point coincides with endpoint, not splitting");
            return vec![current];
        }

        let first = Segment::line(self.alloc_id(), current.p1, at);
        let second = Segment::line(self.alloc_id(), at, current.p2);
        self.segments[idx] = first;
        self.segments.insert(idx + 1, second);
        debug!(old = %current, first = %first, second = %second, "split segment");
        vec![first, second]
    }

    fn add_guide_point(&mut self, gp: GuidePoint) {
        self.guide_points.push(gp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn book_with_two_lines() -> (SketchBook, Segment, Segment) {
        let mut book = SketchBook::new();
        let a = book.add_line(Pt::new(0.0, 0.0), Pt::new(100.0, 0.0));
        let b = book.add_line(Pt::new(0.0, 50.0), Pt::new(100.0, 50.0));
        (book, a, b)
    }

    #[test]
    fn ids_are_unique_and_ordered() {
        let (book, a, b) = book_with_two_lines();
        assert_eq!(a.id, SegmentId(0));
        assert_eq!(b.id, SegmentId(1));
        assert_eq!(book.segment_count(), 2);
    }

    #[test]
    fn split_replaces_segment_in_place() {
        let (mut book, a, b) = book_with_two_lines();
        let pieces = book.split_segment(&a, Pt::new(30.0, 0.0));

        assert_eq!(pieces.len(), 2);
        assert!(book.segment(a.id).is_none());
        let ids: Vec<_> = book.segments().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![pieces[0].id, pieces[1].id, b.id]);
    }

    #[test]
    fn split_pieces_reconstruct_original() {
        let (mut book, a, _) = book_with_two_lines();
        let pieces = book.split_segment(&a, Pt::new(30.0, 0.0));

        assert_eq!(pieces[0].p1, a.p1);
        assert_eq!(pieces[0].p2, Pt::new(30.0, 0.0));
        assert_eq!(pieces[1].p1, Pt::new(30.0, 0.0));
        assert_eq!(pieces[1].p2, a.p2);
        let total: f64 = pieces.iter().map(Segment::length).sum();
        assert_approx_eq!(total, a.length());
    }

    #[test]
    fn split_at_endpoint_is_noop() {
        let (mut book, a, _) = book_with_two_lines();
        let before = book.clone();
        let pieces = book.split_segment(&a, a.p2);

        assert_eq!(pieces, vec![a]);
        assert_eq!(book, before);
    }

    #[test]
    fn split_unknown_segment_yields_nothing() {
        let (mut book, a, _) = book_with_two_lines();
        book.remove_segment(a.id);
        assert!(book.split_segment(&a, Pt::new(10.0, 0.0)).is_empty());
        assert_eq!(book.segment_count(), 1);
    }

    #[test]
    fn loaded_sketch_allocates_fresh_ids() {
        let yaml = r#"
segments:
  - id: 4
    kind: Line
    p1: { x: 0.0, y: 0.0 }
    p2: { x: 10.0, y: 0.0 }
"#;
        let mut book: SketchBook = serde_yaml::from_str(yaml).unwrap();
        let added = book.add_line(Pt::new(0.0, 5.0), Pt::new(10.0, 5.0));
        assert_eq!(added.id, SegmentId(5));
    }

    #[test]
    fn removed_ids_stay_retired_across_reload() {
        let (mut book, _, b) = book_with_two_lines();
        book.remove_segment(b.id);

        let yaml = serde_yaml::to_string(&book).unwrap();
        let mut reloaded: SketchBook = serde_yaml::from_str(&yaml).unwrap();
        let added = reloaded.add_line(Pt::new(0.0, 5.0), Pt::new(10.0, 5.0));
        assert_ne!(added.id, b.id);
        assert!(added.id.0 > b.id.0);
    }

    #[test]
    fn guide_points_are_registered_in_order() {
        let mut book = SketchBook::new();
        book.add_guide_point(GuidePoint::free(Pt::new(1.0, 1.0)));
        book.add_guide_point(GuidePoint::free(Pt::new(2.0, 2.0)));
        assert_eq!(book.guide_points().len(), 2);
        assert_eq!(book.guide_points()[1].location(), Pt::new(2.0, 2.0));
    }
}
