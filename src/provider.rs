//! Providers of coordinate projections between genome assemblies.
//!
//! The actual work of projecting an interval from one assembly to another is
//! carried out by an external service. A [`Provider`] is the seam between this
//! crate and that service: given an [`Interval`] on a source assembly, it
//! returns a [`Projection`] describing the queried region and the (possibly
//! fragmented) [`Segment`]s it maps onto within the target assembly.
//!
//! Two providers ship with this crate:
//!
//! - [`rest::Client`], which queries the Ensembl REST service.
//! - [`mock::MockProvider`], an in-memory provider for testing.

use crate::core::interval::Position;
use crate::core::Interval;
use crate::core::Region;

pub mod mock;
pub mod rest;

/// An error related to a [`Provider`].
#[derive(Debug)]
pub enum Error {
    /// A session with the provider could not be established.
    Session(reqwest::Error),

    /// The address of the provider is not a usable URL.
    InvalidServer(String),

    /// The provider could not be reached.
    Transport(reqwest::Error),

    /// The provider rejected the request.
    Rejected {
        /// The status code returned by the provider.
        status: u16,

        /// The message returned by the provider.
        message: String,
    },

    /// The response from the provider could not be understood.
    InvalidResponse(String),

    /// The assembly is not known to the provider.
    UnknownAssembly(String),

    /// The sequence region is not known to the provider.
    UnknownSequence(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Session(err) => write!(f, "could not establish session: {err}"),
            Error::InvalidServer(reason) => write!(f, "invalid server: {reason}"),
            Error::Transport(err) => write!(f, "could not reach provider: {err}"),
            Error::Rejected { status, message } => {
                write!(f, "provider rejected request ({status}): {message}")
            }
            Error::InvalidResponse(reason) => write!(f, "invalid response: {reason}"),
            Error::UnknownAssembly(assembly) => write!(f, "unknown assembly: {assembly}"),
            Error::UnknownSequence(name) => write!(f, "unknown sequence region: {name}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Session(err) | Error::Transport(err) => Some(err),
            _ => None,
        }
    }
}

/// A [`Result`](std::result::Result) with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// One contiguous piece of a projection.
///
/// The source side of a segment is expressed as 0-based offsets relative to
/// the start of the queried interval. The target side is the region on the
/// target assembly exactly as reported by the provider.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Segment {
    /// The offset of the first projected position within the queried interval.
    source_offset_start: Position,

    /// The offset of the last projected position within the queried interval.
    source_offset_end: Position,

    /// The region on the target assembly.
    target: Region,
}

impl Segment {
    /// Creates a new [`Segment`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ensembl_liftover::core::Interval;
    /// use ensembl_liftover::core::Region;
    /// use ensembl_liftover::core::Strand;
    /// use ensembl_liftover::provider::Segment;
    ///
    /// let target = Region::new(
    ///     Interval::new("1", 5000, 5999),
    ///     Strand::Positive,
    ///     "chromosome",
    ///     "GRCh38",
    /// );
    ///
    /// let segment = Segment::new(0, 999, target);
    /// assert_eq!(segment.source_offset_end(), 999);
    /// ```
    pub fn new(source_offset_start: Position, source_offset_end: Position, target: Region) -> Self {
        Self {
            source_offset_start,
            source_offset_end,
            target,
        }
    }

    /// Gets the offset of the first projected position within the queried
    /// interval.
    pub fn source_offset_start(&self) -> Position {
        self.source_offset_start
    }

    /// Gets the offset of the last projected position within the queried
    /// interval.
    pub fn source_offset_end(&self) -> Position {
        self.source_offset_end
    }

    /// Gets the region on the target assembly.
    pub fn target(&self) -> &Region {
        &self.target
    }

    /// Consumes `self` and returns the region on the target assembly.
    pub fn into_target(self) -> Region {
        self.target
    }
}

/// The result of projecting a single interval.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Projection {
    /// The queried region on the source assembly.
    source: Region,

    /// The segments, in the order they were reported by the provider.
    segments: Vec<Segment>,
}

impl Projection {
    /// Creates a new [`Projection`].
    pub fn new(source: Region, segments: Vec<Segment>) -> Self {
        Self { source, segments }
    }

    /// Gets the queried region on the source assembly.
    pub fn source(&self) -> &Region {
        &self.source
    }

    /// Gets the projected segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns whether or not nothing within the queried region projected onto
    /// the target assembly.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Consumes `self` and returns the source region and the segments.
    pub fn into_parts(self) -> (Region, Vec<Segment>) {
        (self.source, self.segments)
    }
}

/// A service capable of projecting intervals between assemblies.
pub trait Provider {
    /// Projects `interval`, expressed on the `source` assembly, onto the
    /// `target` assembly.
    ///
    /// A region that does not map onto the target assembly at all yields a
    /// [`Projection`] with no segments rather than an error.
    fn project(&self, interval: &Interval, source: &str, target: &str) -> Result<Projection>;
}
