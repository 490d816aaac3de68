use slotmap::SlotMap;

use crate::error::TopologyError;
use crate::geometry::Contour;

slotmap::new_key_type! {
    /// Unique identifier for a contour in a [`ContourSet`].
    pub struct ContourId;
}

/// Insertion-ordered arena that owns a collection of contours.
///
/// Contours are addressed by stable [`ContourId`] handles, so query
/// results can refer back to set members without borrowing or copying
/// them. Iteration follows insertion order.
#[derive(Debug, Default)]
pub struct ContourSet {
    contours: SlotMap<ContourId, Contour>,
    order: Vec<ContourId>,
}

impl ContourSet {
    /// Creates a new, empty contour set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a contour and returns its ID.
    pub fn add(&mut self, contour: Contour) -> ContourId {
        let id = self.contours.insert(contour);
        self.order.push(id);
        id
    }

    /// Removes a contour from the set and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is not present in the set.
    pub fn remove(&mut self, id: ContourId) -> Result<Contour, TopologyError> {
        let contour = self
            .contours
            .remove(id)
            .ok_or(TopologyError::ContourNotFound)?;
        self.order.retain(|&other| other != id);
        Ok(contour)
    }

    /// Returns a reference to the contour data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is not present in the set.
    pub fn contour(&self, id: ContourId) -> Result<&Contour, TopologyError> {
        self.contours.get(id).ok_or(TopologyError::ContourNotFound)
    }

    /// Returns a mutable reference to the contour data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is not present in the set.
    pub fn contour_mut(&mut self, id: ContourId) -> Result<&mut Contour, TopologyError> {
        self.contours
            .get_mut(id)
            .ok_or(TopologyError::ContourNotFound)
    }

    /// Returns the IDs of all contours in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[ContourId] {
        &self.order
    }

    /// Returns an iterator over `(id, contour)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ContourId, &Contour)> + '_ {
        self.order.iter().map(|&id| (id, &self.contours[id]))
    }

    /// Returns the number of contours in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the set contains no contours.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
