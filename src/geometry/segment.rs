use crate::error::{GeometryError, Result};
use crate::math::tolerance::approx_eq;
use crate::math::{Point2, TOLERANCE};

/// A straight segment between two points.
#[derive(Debug, Clone)]
pub struct Line {
    start: Point2,
    end: Point2,
}

impl Line {
    /// Creates a new line segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }
}

/// A circular arc between two points.
///
/// Defined by its endpoints, the center and radius of the supporting
/// circle, and a traversal direction. Both endpoints must lie on the
/// supporting circle.
#[derive(Debug, Clone)]
pub struct Arc {
    start: Point2,
    end: Point2,
    center: Point2,
    radius: f64,
    clockwise: bool,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive, or if either
    /// endpoint is further than [`TOLERANCE`] from the supporting circle.
    pub fn new(
        start: Point2,
        end: Point2,
        center: Point2,
        radius: f64,
        clockwise: bool,
    ) -> Result<Self> {
        if radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius).into());
        }

        for point in [&start, &end] {
            let distance = nalgebra::distance(point, &center);
            if !approx_eq(distance, radius, TOLERANCE) {
                return Err(GeometryError::PointOffCircle {
                    x: point.x,
                    y: point.y,
                    distance,
                    radius,
                }
                .into());
            }
        }

        Ok(Self {
            start,
            end,
            center,
            radius,
            clockwise,
        })
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Returns the center of the supporting circle.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Returns the radius of the supporting circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the traversal direction.
    ///
    /// The direction is stored for consumers that traverse or render the
    /// arc; connectivity checking does not consult it.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }
}

/// Discriminates the two segment shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Line,
    Arc,
}

/// A contour segment: either a straight line or a circular arc.
///
/// The variant set is closed; consumers match exhaustively. Cloning a
/// segment produces an independent copy with identical geometry.
#[derive(Debug, Clone)]
pub enum Segment {
    /// A straight line segment.
    Line(Line),
    /// A circular arc segment.
    Arc(Arc),
}

impl Segment {
    /// Returns which shape this segment is.
    #[must_use]
    pub fn kind(&self) -> SegmentKind {
        match self {
            Self::Line(_) => SegmentKind::Line,
            Self::Arc(_) => SegmentKind::Arc,
        }
    }

    /// Returns the start point of the segment.
    #[must_use]
    pub fn start(&self) -> Point2 {
        match self {
            Self::Line(line) => line.start(),
            Self::Arc(arc) => arc.start(),
        }
    }

    /// Returns the end point of the segment.
    #[must_use]
    pub fn end(&self) -> Point2 {
        match self {
            Self::Line(line) => line.end(),
            Self::Arc(arc) => arc.end(),
        }
    }
}

impl From<Line> for Segment {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Arc> for Segment {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ConturaError;
    use approx::assert_relative_eq;

    #[test]
    fn line_reports_endpoints() {
        let line = Line::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        assert_relative_eq!(line.start().x, 0.0);
        assert_relative_eq!(line.end().x, 1.0);
        assert_relative_eq!(line.end().y, 0.0);
    }

    #[test]
    fn semicircle_arc_constructs() {
        // Semicircle from (0,1) to (0,-1) about the origin.
        let arc = Arc::new(
            Point2::new(0.0, 1.0),
            Point2::new(0.0, -1.0),
            Point2::new(0.0, 0.0),
            1.0,
            true,
        )
        .unwrap();
        assert_relative_eq!(arc.radius(), 1.0);
        assert!(arc.is_clockwise());
        assert_relative_eq!(arc.start().y, 1.0);
        assert_relative_eq!(arc.end().y, -1.0);
    }

    #[test]
    fn arc_rejects_zero_radius() {
        let result = Arc::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            0.0,
            false,
        );
        assert!(matches!(
            result,
            Err(ConturaError::Geometry(GeometryError::NonPositiveRadius(_)))
        ));
    }

    #[test]
    fn arc_rejects_negative_radius() {
        let result = Arc::new(
            Point2::new(0.0, 1.0),
            Point2::new(0.0, -1.0),
            Point2::new(0.0, 0.0),
            -1.0,
            false,
        );
        assert!(matches!(
            result,
            Err(ConturaError::Geometry(GeometryError::NonPositiveRadius(_)))
        ));
    }

    #[test]
    fn arc_rejects_start_off_circle() {
        let result = Arc::new(
            Point2::new(0.5, 0.5),
            Point2::new(0.0, -1.0),
            Point2::new(0.0, 0.0),
            1.0,
            false,
        );
        assert!(matches!(
            result,
            Err(ConturaError::Geometry(GeometryError::PointOffCircle { .. }))
        ));
    }

    #[test]
    fn arc_rejects_end_off_circle() {
        let result = Arc::new(
            Point2::new(0.0, 1.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 0.0),
            1.0,
            false,
        );
        assert!(matches!(
            result,
            Err(ConturaError::Geometry(GeometryError::PointOffCircle { .. }))
        ));
    }

    #[test]
    fn arc_accepts_endpoint_within_tolerance() {
        // Endpoint 1e-8 off the circle is still on it for our purposes.
        let arc = Arc::new(
            Point2::new(0.0, 1.0 + 1e-8),
            Point2::new(0.0, -1.0),
            Point2::new(0.0, 0.0),
            1.0,
            false,
        );
        assert!(arc.is_ok());
    }

    #[test]
    fn segment_kind_matches_variant() {
        let line: Segment = Line::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)).into();
        assert_eq!(line.kind(), SegmentKind::Line);

        let arc: Segment = Arc::new(
            Point2::new(0.0, 1.0),
            Point2::new(0.0, -1.0),
            Point2::new(0.0, 0.0),
            1.0,
            true,
        )
        .unwrap()
        .into();
        assert_eq!(arc.kind(), SegmentKind::Arc);
    }

    #[test]
    fn segment_endpoints_delegate_to_variant() {
        let segment: Segment = Line::new(Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)).into();
        assert_relative_eq!(segment.start().x, 1.0);
        assert_relative_eq!(segment.start().y, 2.0);
        assert_relative_eq!(segment.end().x, 3.0);
        assert_relative_eq!(segment.end().y, 4.0);
    }

    #[test]
    fn clone_copies_geometry() {
        let segment: Segment = Line::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)).into();
        let copy = segment.clone();
        assert_eq!(copy.kind(), segment.kind());
        assert_relative_eq!(copy.end().x, segment.end().x);
        assert_relative_eq!(copy.end().y, segment.end().y);
    }
}
