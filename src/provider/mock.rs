//! An in-memory provider, primarily for testing.

use std::cell::Cell;
use std::collections::HashMap;
use std::collections::HashSet;

use tracing::debug;

use crate::core::Interval;
use crate::core::Region;
use crate::core::Strand;
use crate::provider::Error;
use crate::provider::Projection;
use crate::provider::Provider;
use crate::provider::Result;
use crate::provider::Segment;

/// The coordinate system reported for every queried region.
const COORD_SYSTEM: &str = "chromosome";

/// A provider that answers from a fixed table of projections.
///
/// Intervals that have not been registered project onto nothing. Intervals
/// registered with [`MockProvider::fail_on()`] fail with
/// [`Error::UnknownSequence`].
///
/// # Examples
///
/// ```
/// use ensembl_liftover::core::Interval;
/// use ensembl_liftover::core::Region;
/// use ensembl_liftover::core::Strand;
/// use ensembl_liftover::provider::mock::MockProvider;
/// use ensembl_liftover::provider::Provider;
/// use ensembl_liftover::provider::Segment;
///
/// let interval = Interval::new("1", 1000, 2000);
/// let target = Region::new(
///     Interval::new("1", 5000, 6000),
///     Strand::Positive,
///     "chromosome",
///     "GRCh38",
/// );
///
/// let provider = MockProvider::default().with_segments(
///     interval.clone(),
///     vec![Segment::new(0, 1000, target)],
/// );
///
/// let projection = provider.project(&interval, "GRCh37", "GRCh38")?;
/// assert_eq!(projection.segments().len(), 1);
/// assert_eq!(provider.calls(), 1);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct MockProvider {
    /// The registered segments for each interval.
    projections: HashMap<Interval, Vec<Segment>>,

    /// The intervals for which projection fails.
    failures: HashSet<Interval>,

    /// The assemblies the provider knows about. Empty means all of them.
    assemblies: HashSet<String>,

    /// The number of times [`Provider::project()`] has been called.
    calls: Cell<usize>,
}

impl MockProvider {
    /// Registers the segments that `interval` projects onto.
    pub fn with_segments(mut self, interval: Interval, segments: Vec<Segment>) -> Self {
        self.projections.insert(interval, segments);
        self
    }

    /// Registers `interval` as failing when projected.
    pub fn fail_on(mut self, interval: Interval) -> Self {
        self.failures.insert(interval);
        self
    }

    /// Registers an assembly as known. Once any assembly is registered,
    /// projections to or from unregistered assemblies fail with
    /// [`Error::UnknownAssembly`].
    pub fn with_assembly(mut self, assembly: impl Into<String>) -> Self {
        self.assemblies.insert(assembly.into());
        self
    }

    /// Gets the number of projections that have been requested.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Checks that an assembly is known to the provider.
    fn check_assembly(&self, assembly: &str) -> Result<()> {
        if self.assemblies.is_empty() || self.assemblies.contains(assembly) {
            Ok(())
        } else {
            Err(Error::UnknownAssembly(assembly.to_string()))
        }
    }
}

impl Provider for MockProvider {
    fn project(&self, interval: &Interval, source: &str, target: &str) -> Result<Projection> {
        self.calls.set(self.calls.get() + 1);
        debug!("mock projection of {interval} from {source} to {target}");

        self.check_assembly(source)?;
        self.check_assembly(target)?;

        if self.failures.contains(interval) {
            return Err(Error::UnknownSequence(interval.name().to_string()));
        }

        let source = Region::new(interval.clone(), Strand::Positive, COORD_SYSTEM, source);
        let segments = self.projections.get(interval).cloned().unwrap_or_default();

        Ok(Projection::new(source, segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_interval_projects_to_nothing() -> Result<()> {
        let provider = MockProvider::default();
        let interval = Interval::new("1", 1, 10);

        let projection = provider.project(&interval, "GRCh37", "GRCh38")?;
        assert!(projection.is_empty());
        assert_eq!(projection.source().interval(), &interval);
        assert_eq!(projection.source().assembly(), "GRCh37");
        assert_eq!(projection.source().coord_system(), "chromosome");

        Ok(())
    }

    #[test]
    fn failing_interval() {
        let interval = Interval::new("Z", 1, 10);
        let provider = MockProvider::default().fail_on(interval.clone());

        let err = provider.project(&interval, "GRCh37", "GRCh38").unwrap_err();
        assert!(matches!(err, Error::UnknownSequence(ref name) if name == "Z"));
        assert_eq!(provider.calls(), 1);
    }

    #[test]
    fn unknown_assembly() {
        let provider = MockProvider::default()
            .with_assembly("GRCh37")
            .with_assembly("GRCh38");

        let err = provider
            .project(&Interval::new("1", 1, 10), "NCBI36", "GRCh38")
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown assembly: NCBI36");
    }
}
