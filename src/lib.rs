//! sketchref — dot gestures over a vector sketch become guide points.
//!
//! A dot near a segment endpoint references the endpoint, a dot near a
//! segment's interior splits the segment and references the split point,
//! and any other dot becomes a free-standing guide point.

pub mod geometry;
pub mod recognizer;
pub mod sketch;
