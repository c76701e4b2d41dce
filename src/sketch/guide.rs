//! Guide points — reference locations used by later constraint operations.

use serde::{Deserialize, Serialize};

use crate::geometry::{Pt, Segment, SegmentId, Vec2};

/// A reference point, either free-standing or attached to a segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GuidePoint {
    /// A fixed coordinate with no geometric attachment.
    Free { at: Pt },
    /// A parametric position `(t, s)` on a snapshot of the segment taken when
    /// the guide point was created.
    Anchored { segment: Segment, param: Vec2 },
}

impl GuidePoint {
    pub fn free(at: Pt) -> Self {
        GuidePoint::Free { at }
    }

    pub fn anchored(segment: Segment, param: Vec2) -> Self {
        GuidePoint::Anchored { segment, param }
    }

    /// The point this guide refers to.
    pub fn location(&self) -> Pt {
        match self {
            GuidePoint::Free { at } => *at,
            GuidePoint::Anchored { segment, param } => segment.point_at(*param),
        }
    }

    /// The anchoring segment, if any.
    pub fn segment_id(&self) -> Option<SegmentId> {
        match self {
            GuidePoint::Free { .. } => None,
            GuidePoint::Anchored { segment, .. } => Some(segment.id),
        }
    }

    pub fn param(&self) -> Option<Vec2> {
        match self {
            GuidePoint::Free { .. } => None,
            GuidePoint::Anchored { param, .. } => Some(*param),
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, GuidePoint::Free { .. })
    }
}
