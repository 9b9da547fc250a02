//! An ordered collection of mappings.

use serde::Deserialize;
use serde::Serialize;

use crate::liftover::Mapping;

/// The mappings produced by lifting over a sequence of intervals.
///
/// A batch is exactly the concatenation of the mappings for each interval, in
/// the order the intervals were given. Nothing is deduplicated, reordered, or
/// filtered.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch(Vec<Mapping>);

impl Batch {
    /// Gets the number of mappings within the batch.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether or not the batch contains no mappings.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the mappings in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Mapping> {
        self.0.iter()
    }

    /// Consumes `self` and returns the inner mappings.
    pub fn into_inner(self) -> Vec<Mapping> {
        self.0
    }
}

impl From<Vec<Mapping>> for Batch {
    fn from(mappings: Vec<Mapping>) -> Self {
        Self(mappings)
    }
}

impl IntoIterator for Batch {
    type Item = Mapping;
    type IntoIter = std::vec::IntoIter<Mapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a Mapping;
    type IntoIter = std::slice::Iter<'a, Mapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
