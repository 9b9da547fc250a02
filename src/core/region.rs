//! An interval annotated with its strand, coordinate system, and assembly.

use serde::Deserialize;
use serde::Serialize;

use crate::core::interval::Position;
use crate::core::Interval;
use crate::core::Strand;

/// A region on a particular assembly of a genome.
///
/// A region is an [`Interval`] plus the strand it sits on, the name of the
/// coordinate system (e.g., `chromosome`), and the assembly the coordinates
/// are expressed in (e.g., `GRCh38`).
///
/// When serialized, the fields of the interval are placed alongside the
/// annotations (`name`, `start`, `end`, `strand`, `coord_system`,
/// `assembly`).
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// The underlying interval.
    #[serde(flatten)]
    interval: Interval,

    /// The strand.
    strand: Strand,

    /// The name of the coordinate system.
    coord_system: String,

    /// The assembly version.
    assembly: String,
}

impl Region {
    /// Creates a new [`Region`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ensembl_liftover::core::Interval;
    /// use ensembl_liftover::core::Region;
    /// use ensembl_liftover::core::Strand;
    ///
    /// let interval = Interval::new("1", 1000, 2000);
    /// let region = Region::new(interval, Strand::Positive, "chromosome", "GRCh38");
    ///
    /// assert_eq!(region.name(), "1");
    /// assert_eq!(region.assembly(), "GRCh38");
    /// ```
    pub fn new(
        interval: Interval,
        strand: Strand,
        coord_system: impl Into<String>,
        assembly: impl Into<String>,
    ) -> Self {
        Self {
            interval,
            strand,
            coord_system: coord_system.into(),
            assembly: assembly.into(),
        }
    }

    /// Gets the underlying interval.
    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    /// Gets the name of the sequence region.
    pub fn name(&self) -> &str {
        self.interval.name()
    }

    /// Gets the start position.
    pub fn start(&self) -> Position {
        self.interval.start()
    }

    /// Gets the end position.
    pub fn end(&self) -> Position {
        self.interval.end()
    }

    /// Gets the strand.
    pub fn strand(&self) -> Strand {
        self.strand
    }

    /// Gets the name of the coordinate system.
    pub fn coord_system(&self) -> &str {
        &self.coord_system
    }

    /// Gets the assembly version.
    pub fn assembly(&self) -> &str {
        &self.assembly
    }

    /// Creates a new [`Region`] covering `interval` that shares the strand,
    /// coordinate system, and assembly of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ensembl_liftover::core::Interval;
    /// use ensembl_liftover::core::Region;
    /// use ensembl_liftover::core::Strand;
    ///
    /// let region = Region::new(
    ///     Interval::new("1", 1000, 2000),
    ///     Strand::Positive,
    ///     "chromosome",
    ///     "GRCh37",
    /// );
    ///
    /// let sub = region.with_interval(Interval::new("1", 1000, 1499));
    /// assert_eq!(sub.end(), 1499);
    /// assert_eq!(sub.assembly(), "GRCh37");
    /// ```
    pub fn with_interval(&self, interval: Interval) -> Self {
        Self {
            interval,
            strand: self.strand,
            coord_system: self.coord_system.clone(),
            assembly: self.assembly.clone(),
        }
    }
}

impl std::fmt::Display for Region {
    /// Formats the region the way Ensembl names slices
    /// (`<coord_system>:<assembly>:<name>:<start>:<end>:<strand>`).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}:{}",
            self.coord_system,
            self.assembly,
            self.name(),
            self.start(),
            self.end(),
            self.strand.as_number()
        )
    }
}
