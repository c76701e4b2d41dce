//! Error types for sketch recognizers.

use crate::geometry::SegmentId;

/// Failures a recognizer can report. Ink that simply doesn't match is not
/// an error; it produces a no-op item instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecognizerError {
    /// Template (multi-stroke trained shape) recognition was requested from a
    /// recognizer that only handles raw ink.
    #[error("{recognizer} can't do templates")]
    TemplateUnsupported { recognizer: &'static str },

    /// The segment a recognized item refers to was removed from the model
    /// before the item was activated.
    #[error("segment {0} is no longer part of the sketch")]
    StaleSegment(SegmentId),
}
