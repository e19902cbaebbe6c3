//! Structural segmentation of the flattened document.
//!
//! Three nested splitting passes recover the plan tree from a single
//! linear text stream: areas, then sections within each area, then
//! competencies within each section. All three share one generic
//! marker-splitting primitive.

mod marker;
mod patterns;
mod segmenter;

pub use marker::{split_markers, MarkerSegment, MarkerSplit};
pub use patterns::{AREA_MARKER, COMPETENCY_MARKER, SECTION_MARKER};
pub use segmenter::parse_plan;
