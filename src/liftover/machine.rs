//! A machine for lifting over intervals from a source assembly to a target
//! assembly.

use tracing::info;
use tracing::warn;

use crate::core::Interval;
use crate::liftover::projector;
use crate::liftover::Batch;
use crate::liftover::Mapping;
use crate::provider;
use crate::provider::Provider;

pub mod builder;

pub use builder::Builder;

/// An error related to lifting over intervals.
#[derive(Debug)]
pub enum Error {
    /// The provider failed while projecting the interval.
    Provider(Interval, provider::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Provider(interval, err) => {
                write!(f, "provider error while lifting over {interval}: {err}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Provider(_, err) => Some(err),
        }
    }
}

/// A [`Result`](std::result::Result) with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// A machine for lifting over intervals from a source assembly to a target
/// assembly.
///
/// The machine borrows its [`Provider`] for its whole lifetime and never
/// mutates it. Intervals are lifted over one at a time, in order.
///
/// Generally, you will want to use a [`builder::Builder`] to construct one of
/// these.
#[derive(Debug)]
pub struct Machine<'a, P>
where
    P: Provider,
{
    /// The provider of projections.
    provider: &'a P,

    /// The assembly that intervals are expressed in.
    source: String,

    /// The assembly that intervals are lifted over to.
    target: String,
}

impl<'a, P> Machine<'a, P>
where
    P: Provider,
{
    /// Gets the source assembly.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Gets the target assembly.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Lifts over a single `interval`.
    ///
    /// An interval that does not map onto the target assembly returns an empty
    /// [`Vec`].
    pub fn liftover(&self, interval: &Interval) -> Result<Vec<Mapping>> {
        let projection = self
            .provider
            .project(interval, &self.source, &self.target)
            .map_err(|err| Error::Provider(interval.clone(), err))?;

        let mappings = projector::project(interval, projection);

        if mappings.is_empty() {
            warn!(
                "{interval} does not map from {} to {}",
                self.source, self.target
            );
        }

        Ok(mappings)
    }

    /// Lifts over every interval in `intervals`, in order.
    ///
    /// All mappings for an interval appear in the returned [`Batch`] before any
    /// mapping for the next interval. If the provider fails for any interval,
    /// the error is returned and no mappings are.
    ///
    /// # Examples
    ///
    /// ```
    /// use ensembl_liftover::core::Interval;
    /// use ensembl_liftover::liftover::machine::Builder;
    /// use ensembl_liftover::provider::mock::MockProvider;
    ///
    /// let provider = MockProvider::default();
    /// let machine = Builder::default()
    ///     .source_assembly("GRCh37")
    ///     .target_assembly("GRCh38")
    ///     .try_build_from(&provider)?;
    ///
    /// let intervals = vec![Interval::new("1", 1, 10), Interval::new("2", 1, 10)];
    /// let batch = machine.liftover_all(&intervals)?;
    ///
    /// assert!(batch.is_empty());
    /// assert_eq!(provider.calls(), 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn liftover_all<'i, I>(&self, intervals: I) -> Result<Batch>
    where
        I: IntoIterator<Item = &'i Interval>,
    {
        let mut mappings = Vec::new();
        let mut count = 0usize;

        for interval in intervals {
            mappings.extend(self.liftover(interval)?);
            count += 1;
        }

        info!(
            "lifted over {count} interval(s) from {} to {}, producing {} mapping(s)",
            self.source,
            self.target,
            mappings.len()
        );

        Ok(Batch::from(mappings))
    }
}
