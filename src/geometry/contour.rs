use std::sync::atomic::{AtomicU8, Ordering};

use crate::error::{GeometryError, Result, TopologyError};
use crate::math::tolerance::points_coincident;
use crate::math::{Point2, TOLERANCE};

use super::segment::{Line, Segment};

// Connectivity cache states.
const CACHE_UNSET: u8 = 0;
const CACHE_VALID: u8 = 1;
const CACHE_INVALID: u8 = 2;

/// An ordered sequence of exclusively owned segments forming a 2D contour.
///
/// A contour is connected (valid) when every segment's end point coincides
/// with the next segment's start point within [`TOLERANCE`]. The result of
/// the connectivity scan is cached until the next structural mutation.
#[derive(Debug)]
pub struct Contour {
    segments: Vec<Segment>,
    // Tri-state connectivity cache. Racing readers may both run the scan,
    // but they compute the same value from the same segment sequence, so
    // relaxed ordering suffices.
    validity: AtomicU8,
}

impl Contour {
    /// Creates an empty contour.
    #[must_use]
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            validity: AtomicU8::new(CACHE_UNSET),
        }
    }

    /// Builds a contour of line segments joining each consecutive pair of
    /// `points`.
    ///
    /// The result is always connected, since adjacent segments share the
    /// exact same source point.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 points are given.
    pub fn from_polyline(points: &[Point2]) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::PolylineTooShort(points.len()).into());
        }
        let mut contour = Self::new();
        for pair in points.windows(2) {
            contour.add_segment(Segment::Line(Line::new(pair[0], pair[1])));
        }
        Ok(contour)
    }

    /// Appends a segment at the end of the contour.
    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
        self.invalidate_cache();
    }

    /// Inserts a segment at `index`, shifting subsequent segments.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is greater than [`Self::len`]. The
    /// contour is left unchanged on failure.
    pub fn insert_segment(&mut self, index: usize, segment: Segment) -> Result<()> {
        if index > self.segments.len() {
            return Err(TopologyError::IndexOutOfRange {
                index,
                len: self.segments.len(),
            }
            .into());
        }
        self.segments.insert(index, segment);
        self.invalidate_cache();
        Ok(())
    }

    /// Removes and returns the segment at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds. The contour is left
    /// unchanged on failure.
    pub fn remove_segment(&mut self, index: usize) -> Result<Segment> {
        if index >= self.segments.len() {
            return Err(TopologyError::IndexOutOfRange {
                index,
                len: self.segments.len(),
            }
            .into());
        }
        let segment = self.segments.remove(index);
        self.invalidate_cache();
        Ok(segment)
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the contour has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the segment at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Returns a mutable reference to the segment at `index`, if any.
    ///
    /// Editing a segment can change connectivity, so a successful lookup
    /// resets the cache before the reference is handed out.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Segment> {
        let segment = self.segments.get_mut(index);
        if segment.is_some() {
            *self.validity.get_mut() = CACHE_UNSET;
        }
        segment
    }

    /// Returns an iterator over the segments in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Returns a mutable iterator over the segments in insertion order.
    ///
    /// Editing a segment can change connectivity, so the cache is reset
    /// when the iterator is created.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Segment> {
        self.invalidate_cache();
        self.segments.iter_mut()
    }

    /// Returns whether consecutive segments form a continuous path.
    ///
    /// Contours with fewer than 2 segments are trivially connected. The
    /// scan short-circuits on the first gap; its result is cached until
    /// the next mutation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self.validity.load(Ordering::Relaxed) {
            CACHE_VALID => true,
            CACHE_INVALID => false,
            _ => {
                let valid = self.check_connectivity();
                let state = if valid { CACHE_VALID } else { CACHE_INVALID };
                self.validity.store(state, Ordering::Relaxed);
                valid
            }
        }
    }

    /// Returns whether the contour forms a closed loop: connected, with
    /// the last segment's end coinciding with the first segment's start.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => {
                self.is_valid() && points_coincident(&last.end(), &first.start(), TOLERANCE)
            }
            _ => false,
        }
    }

    fn check_connectivity(&self) -> bool {
        self.segments
            .windows(2)
            .all(|pair| points_coincident(&pair[0].end(), &pair[1].start(), TOLERANCE))
    }

    fn invalidate_cache(&mut self) {
        *self.validity.get_mut() = CACHE_UNSET;
    }
}

impl Default for Contour {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Contour {
    // Every segment is duplicated; the clone starts with an unset cache.
    fn clone(&self) -> Self {
        Self {
            segments: self.segments.clone(),
            validity: AtomicU8::new(CACHE_UNSET),
        }
    }
}

impl<'a> IntoIterator for &'a Contour {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Contour {
    type Item = &'a mut Segment;
    type IntoIter = std::slice::IterMut<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
