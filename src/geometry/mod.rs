pub mod contour;
pub mod segment;

pub use contour::Contour;
pub use segment::{Arc, Line, Segment, SegmentKind};
