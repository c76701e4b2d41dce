//! Recognizers — turn ink into deferred changes to the sketch.
//!
//! A recognizer inspects ink against the current geometry and returns a
//! [`RecognizedRawItem`]. Nothing is written until the item is activated.

pub mod classify;
pub mod config;
pub mod dot;
pub mod error;
pub mod item;

pub use classify::{classify, DotCase};
pub use config::RecognizerConfig;
pub use dot::DotReferenceRecognizer;
pub use error::RecognizerError;
pub use item::{Endpoint, RawAction, RecognizedRawItem, UiHint};

use crate::geometry::Segment;
use crate::sketch::{GeometryModel, Ink};

/// How a recognizer consumes its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognizerKind {
    /// Looks at one raw ink stroke at a time.
    SingleRaw,
    /// Matches trained multi-stroke templates.
    Template,
}

/// Common interface for the recognizers a dispatch layer tries in turn.
pub trait SketchRecognizer {
    fn name(&self) -> &'static str;

    fn kind(&self) -> RecognizerKind;

    /// Recognize raw ink. Ink this recognizer doesn't handle yields
    /// [`RecognizedRawItem::noop`], never an error.
    fn apply_raw(&self, ink: &Ink, model: &dyn GeometryModel) -> RecognizedRawItem;

    /// Recognize template primitives.
    fn apply_template(
        &self,
        primitives: &[Segment],
    ) -> Result<Vec<RecognizedRawItem>, RecognizerError>;
}
