//! Pairs of regions that correspond across two assemblies.

use serde::Deserialize;
use serde::Serialize;

use crate::core::Region;

/// A correspondence between a piece of a queried interval (the original
/// region, on the source assembly) and the region it maps onto (the mapped
/// region, on the target assembly).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    /// The region on the source assembly.
    original: Region,

    /// The region on the target assembly.
    mapped: Region,
}

impl Mapping {
    /// Creates a new [`Mapping`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ensembl_liftover::core::Interval;
    /// use ensembl_liftover::core::Region;
    /// use ensembl_liftover::core::Strand;
    /// use ensembl_liftover::liftover::Mapping;
    ///
    /// let original = Region::new(
    ///     Interval::new("1", 1000, 1999),
    ///     Strand::Positive,
    ///     "chromosome",
    ///     "GRCh37",
    /// );
    /// let mapped = Region::new(
    ///     Interval::new("1", 5000, 5999),
    ///     Strand::Positive,
    ///     "chromosome",
    ///     "GRCh38",
    /// );
    ///
    /// let mapping = Mapping::new(original.clone(), mapped.clone());
    /// assert_eq!(mapping.original(), &original);
    /// assert_eq!(mapping.mapped(), &mapped);
    /// ```
    pub fn new(original: Region, mapped: Region) -> Self {
        Self { original, mapped }
    }

    /// Gets the region on the source assembly.
    pub fn original(&self) -> &Region {
        &self.original
    }

    /// Consumes `self` and returns the region on the source assembly.
    pub fn into_original(self) -> Region {
        self.original
    }

    /// Gets the region on the target assembly.
    pub fn mapped(&self) -> &Region {
        &self.mapped
    }

    /// Consumes `self` and returns the region on the target assembly.
    pub fn into_mapped(self) -> Region {
        self.mapped
    }

    /// Consumes `self` and returns the original and mapped regions.
    pub fn into_parts(self) -> (Region, Region) {
        (self.original, self.mapped)
    }
}

impl std::fmt::Display for Mapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.original, self.mapped)
    }
}
