//! Recognized items — precomputed model changes, committed later by activation.
//!
//! Recognition only reads the sketch. Each recognizer returns a
//! [`RecognizedRawItem`] describing what should happen; the caller decides
//! whether to activate it, and activation is the only step that writes.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use super::error::RecognizerError;
use crate::geometry::{Pt, Segment, Vec2};
use crate::sketch::{GeometryModel, GuidePoint};

/// Interaction hints attached to a recognized item for the surrounding UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UiHint {
    FatDotReferencePoint,
    OvertraceToSelectSegment,
    EncircleEndpointsToMerge,
}

/// Which end of a segment a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl Endpoint {
    /// Parametric marker for this end: `(0, 0)` for start, `(1, 0)` for end.
    pub fn param(self) -> Vec2 {
        match self {
            Endpoint::Start => Vec2::new(0.0, 0.0),
            Endpoint::End => Vec2::new(1.0, 0.0),
        }
    }
}

/// The model change an item performs when activated.
#[derive(Debug, Clone, PartialEq)]
pub enum RawAction {
    /// Nothing to do.
    Noop,
    /// Guide point on one end of an existing segment.
    EndpointReference { segment: Segment, end: Endpoint },
    /// Split `segment` at the point nearest `location` and anchor a guide
    /// point there.
    InteriorReference { segment: Segment, location: Pt },
    /// Free-standing guide point at `location`.
    FreeReference { location: Pt },
}

/// Result of raw-ink recognition: validity, UI hints and a deferred action.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedRawItem {
    ok: bool,
    hints: BTreeSet<UiHint>,
    action: RawAction,
}

impl RecognizedRawItem {
    /// The item returned when ink doesn't match.
    pub fn noop() -> Self {
        Self {
            ok: false,
            hints: BTreeSet::new(),
            action: RawAction::Noop,
        }
    }

    pub fn new(action: RawAction, hints: impl IntoIterator<Item = UiHint>) -> Self {
        Self {
            ok: true,
            hints: hints.into_iter().collect(),
            action,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn is_noop(&self) -> bool {
        self.action == RawAction::Noop
    }

    pub fn hints(&self) -> &BTreeSet<UiHint> {
        &self.hints
    }

    pub fn action(&self) -> &RawAction {
        &self.action
    }

    /// Commit the action against `model`, consuming the item.
    ///
    /// Returns the registered guide point, or `None` for a no-op. Segment
    /// geometry is reread from the model; if the referenced segment is gone
    /// nothing is changed and [`RecognizerError::StaleSegment`] is returned.
    pub fn activate<M>(self, model: &mut M) -> Result<Option<GuidePoint>, RecognizerError>
    where
        M: GeometryModel + ?Sized,
    {
        let gp = match self.action {
            RawAction::Noop => return Ok(None),
            RawAction::EndpointReference { segment, end } => {
                let live = model
                    .segment(segment.id)
                    .ok_or(RecognizerError::StaleSegment(segment.id))?;
                GuidePoint::anchored(live, end.param())
            }
            RawAction::InteriorReference { segment, location } => {
                let live = model
                    .segment(segment.id)
                    .ok_or(RecognizerError::StaleSegment(segment.id))?;
                split_and_anchor(model, &live, location)
            }
            RawAction::FreeReference { location } => GuidePoint::free(location),
        };

        debug!(guide_point = ?gp, location = ?gp.location(), "adding guide point");
        model.add_guide_point(gp.clone());
        Ok(Some(gp))
    }
}

/// Split `seg` at the point nearest `location` and build a guide point
/// anchored to the piece that contains it.
fn split_and_anchor<M>(model: &mut M, seg: &Segment, location: Pt) -> GuidePoint
where
    M: GeometryModel + ?Sized,
{
    let near_pt = seg.nearest_point(location);
    debug!(segment = %seg, split_point = ?near_pt, "splitting segment");

    let pieces = model.split_segment(seg, near_pt);
    let Some(anchor) = closest_piece(&pieces, near_pt) else {
        warn!(segment = %seg, "split returned no pieces, using a free guide point");
        return GuidePoint::free(near_pt);
    };

    let param = Segment::parameter_for_point(anchor.length(), &anchor.as_line(), near_pt);
    debug!(anchor = %anchor, param = ?param, "anchoring guide point");
    GuidePoint::anchored(anchor, param)
}

/// The piece nearest `at`; earlier pieces win ties.
fn closest_piece(pieces: &[Segment], at: Pt) -> Option<Segment> {
    let mut best: Option<(Segment, f64)> = None;
    for piece in pieces {
        let d = piece.distance_to(at);
        match best {
            Some((_, best_d)) if best_d <= d => {}
            _ => best = Some((*piece, d)),
        }
    }
    best.map(|(piece, _)| piece)
}
