use rayon::prelude::*;

use crate::topology::{ContourId, ContourSet};

/// Splits a contour set into connected and disconnected members.
///
/// Connectivity is computed for every contour in parallel; each scan
/// touches only that contour's own state. The merge preserves the set's
/// insertion order within both halves, and every member lands in exactly
/// one half. The set itself is never mutated or copied.
#[must_use]
pub fn partition_by_validity(set: &ContourSet) -> (Vec<ContourId>, Vec<ContourId>) {
    let entries: Vec<_> = set.iter().collect();
    let flags: Vec<(ContourId, bool)> = entries
        .par_iter()
        .map(|&(id, contour)| (id, contour.is_valid()))
        .collect();

    let mut valid = Vec::new();
    let mut invalid = Vec::new();
    for (id, connected) in flags {
        if connected {
            valid.push(id);
        } else {
            invalid.push(id);
        }
    }
    (valid, invalid)
}

/// Returns the IDs of all connected contours in insertion order.
#[must_use]
pub fn find_valid(set: &ContourSet) -> Vec<ContourId> {
    set.iter()
        .filter(|(_, contour)| contour.is_valid())
        .map(|(id, _)| id)
        .collect()
}

/// Returns the IDs of all disconnected contours in insertion order.
#[must_use]
pub fn find_invalid(set: &ContourSet) -> Vec<ContourId> {
    set.iter()
        .filter(|(_, contour)| !contour.is_valid())
        .map(|(id, _)| id)
        .collect()
}
