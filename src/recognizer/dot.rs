//! Dot reference recognizer — a single dot becomes a guide point.
//!
//! A dot near a segment endpoint references that endpoint, a dot near a
//! segment's interior splits the segment there, and a dot near nothing
//! becomes a free-standing guide point.

use tracing::debug;

use super::classify::{classify, DotCase};
use super::config::RecognizerConfig;
use super::error::RecognizerError;
use super::item::{Endpoint, RawAction, RecognizedRawItem, UiHint};
use super::{RecognizerKind, SketchRecognizer};
use crate::geometry::{Pt, Segment};
use crate::sketch::{GeometryModel, Ink};

const REFERENCE_HINTS: [UiHint; 3] = [
    UiHint::FatDotReferencePoint,
    UiHint::OvertraceToSelectSegment,
    UiHint::EncircleEndpointsToMerge,
];

/// Recognizes single-dot ink as a reference point.
#[derive(Debug, Clone, Default)]
pub struct DotReferenceRecognizer {
    config: RecognizerConfig,
}

impl DotReferenceRecognizer {
    pub fn new(config: RecognizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Build the deferred item for a classified case.
    pub fn item_for(case: DotCase) -> RecognizedRawItem {
        match case {
            DotCase::EndpointStart(seg) => endpoint_item(seg, Endpoint::Start),
            DotCase::EndpointEnd(seg) => endpoint_item(seg, Endpoint::End),
            DotCase::Interior(seg, loc) => interior_item(seg, loc),
            DotCase::SuggestedPoint(_) | DotCase::GuideLine(_) => RecognizedRawItem::noop(),
            DotCase::FreePoint(loc) => free_item(loc),
        }
    }
}

impl SketchRecognizer for DotReferenceRecognizer {
    fn name(&self) -> &'static str {
        "dot reference"
    }

    fn kind(&self) -> RecognizerKind {
        RecognizerKind::SingleRaw
    }

    fn apply_raw(&self, ink: &Ink, model: &dyn GeometryModel) -> RecognizedRawItem {
        let Some(dot) = ink.single_dot() else {
            return RecognizedRawItem::noop();
        };
        let loc = dot.p1;
        let case = classify(loc, &model.segments(), &self.config);
        debug!(location = ?loc, case = ?case, "classified dot");
        Self::item_for(case)
    }

    fn apply_template(
        &self,
        _primitives: &[Segment],
    ) -> Result<Vec<RecognizedRawItem>, RecognizerError> {
        Err(RecognizerError::TemplateUnsupported {
            recognizer: self.name(),
        })
    }
}

fn endpoint_item(segment: Segment, end: Endpoint) -> RecognizedRawItem {
    RecognizedRawItem::new(RawAction::EndpointReference { segment, end }, REFERENCE_HINTS)
}

fn interior_item(segment: Segment, location: Pt) -> RecognizedRawItem {
    RecognizedRawItem::new(
        RawAction::InteriorReference { segment, location },
        REFERENCE_HINTS,
    )
}

fn free_item(location: Pt) -> RecognizedRawItem {
    RecognizedRawItem::new(RawAction::FreeReference { location }, REFERENCE_HINTS)
}
