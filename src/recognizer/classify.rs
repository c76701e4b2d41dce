//! Nearness classification — what a dot at a given location refers to.
//!
//! Cases are tried in a fixed priority. For each segment, in the order the
//! model enumerates them, the per-segment rules run start → end → interior;
//! the first segment with any match decides the case. This is first-match,
//! not nearest-of-all: a later segment that is closer never wins.
//! Suggested points and guide lines hold their slots in the ordering but do
//! not match anything yet. A dot that matches nothing is a free point.

use crate::geometry::{Pt, Segment};

use super::config::RecognizerConfig;

/// The outcome of classifying a dot location.
#[derive(Debug, Clone, PartialEq)]
pub enum DotCase {
    /// Near `p1` of the segment.
    EndpointStart(Segment),
    /// Near `p2` of the segment.
    EndpointEnd(Segment),
    /// Near the segment away from both endpoints; carries the dot location.
    Interior(Segment, Pt),
    /// Near a computed suggestion such as a midpoint. Not produced yet.
    SuggestedPoint(Pt),
    /// Near a guide line. Not produced yet.
    GuideLine(Pt),
    /// Near nothing.
    FreePoint(Pt),
}

type SegmentRule = fn(&Segment, Pt, f64) -> Option<DotCase>;
type StageRule = fn(Pt, f64) -> Option<DotCase>;

const SEGMENT_RULES: [SegmentRule; 3] = [near_start, near_end, near_interior];
const LATER_STAGES: [StageRule; 2] = [near_suggested_point, near_guide_line];

/// Classify a dot at `loc` against `segments`. Pure; never touches the model.
pub fn classify(loc: Pt, segments: &[Segment], config: &RecognizerConfig) -> DotCase {
    let threshold = config.nearness_threshold;
    segments
        .iter()
        .find_map(|seg| SEGMENT_RULES.iter().find_map(|rule| rule(seg, loc, threshold)))
        .or_else(|| LATER_STAGES.iter().find_map(|stage| stage(loc, threshold)))
        .unwrap_or(DotCase::FreePoint(loc))
}

fn near_start(seg: &Segment, loc: Pt, threshold: f64) -> Option<DotCase> {
    (loc.distance(seg.p1) < threshold).then_some(DotCase::EndpointStart(*seg))
}

fn near_end(seg: &Segment, loc: Pt, threshold: f64) -> Option<DotCase> {
    (loc.distance(seg.p2) < threshold).then_some(DotCase::EndpointEnd(*seg))
}

fn near_interior(seg: &Segment, loc: Pt, threshold: f64) -> Option<DotCase> {
    seg.is_near(loc, threshold).then_some(DotCase::Interior(*seg, loc))
}

// TODO: match suggested points once segment selection produces them.
fn near_suggested_point(_loc: Pt, _threshold: f64) -> Option<DotCase> {
    None
}

// TODO: match guide lines once guides can be drawn.
fn near_guide_line(_loc: Pt, _threshold: f64) -> Option<DotCase> {
    None
}
