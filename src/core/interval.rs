//! A closed interval on a named sequence region (typically a chromosome).
//!
//! Both the start and the end positions are included within the interval, and
//! positions are counted the way the Ensembl services count them (1-based).
//!
//! ```text
//! ================ chr1 ===============
//!
//! | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 |
//! -------------------------------------
//! |   |   | X | X | X | X | X |   |   |  <= chr1:3-7
//! ```
//!
//! ## Parsing Intervals
//!
//! Intervals can be parsed from a string in the form `<name>:<start>-<end>`
//! (e.g., `chr1:1000-2000`). The Ensembl-style separator `..` is also accepted
//! (e.g., `chr1:1000..2000`).

use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

/// A position within a sequence region.
pub type Position = u64;

/// The pattern for a textual region (`<name>:<start>-<end>`).
static REGION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:\s]+):(\d+)(?:-|\.\.)(\d+)$").unwrap());

/// An error related to an interval.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// The name of the sequence region was empty.
    EmptyName,

    /// The start position is greater than the end position.
    StartGreaterThanEnd(Position, Position),

    /// The start position could not be parsed.
    InvalidStart(ParseIntError),

    /// The end position could not be parsed.
    InvalidEnd(ParseIntError),

    /// Could not parse an interval from the given value.
    ParseError(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyName => write!(f, "sequence region name cannot be empty"),
            Error::StartGreaterThanEnd(start, end) => write!(
                f,
                "start position ({start}) cannot be greater than the end position ({end})"
            ),
            Error::InvalidStart(err) => write!(f, "invalid start position: {err}"),
            Error::InvalidEnd(err) => write!(f, "invalid end position: {err}"),
            Error::ParseError(value) => {
                write!(f, "could not parse interval from the value: {value}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// A closed interval on a named sequence region.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// The name of the sequence region (e.g., `chr1` or `1`).
    name: String,

    /// The start position (inclusive).
    start: Position,

    /// The end position (inclusive).
    end: Position,
}

impl Interval {
    /// Creates a new [`Interval`] without checking its values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ensembl_liftover::core::Interval;
    ///
    /// let interval = Interval::new("chr1", 1000, 2000);
    /// assert_eq!(interval.name(), "chr1");
    /// ```
    pub fn new(name: impl Into<String>, start: Position, end: Position) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// Attempts to create a new [`Interval`].
    ///
    /// The name must not be empty and the start position must not be greater
    /// than the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ensembl_liftover::core::Interval;
    ///
    /// Interval::try_new("chr1", 1000, 2000)?;
    /// assert!(Interval::try_new("chr1", 2000, 1000).is_err());
    /// assert!(Interval::try_new("", 1000, 2000).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_new(name: impl Into<String>, start: Position, end: Position) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        if start > end {
            return Err(Error::StartGreaterThanEnd(start, end));
        }

        Ok(Self { name, start, end })
    }

    /// Attempts to create a new [`Interval`] from unparsed values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ensembl_liftover::core::Interval;
    ///
    /// let interval = Interval::try_from_parts("chr1", "1000", "2000")?;
    /// assert_eq!(interval.start(), 1000);
    /// assert_eq!(interval.end(), 2000);
    ///
    /// assert!(Interval::try_from_parts("chr1", "one", "2000").is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_from_parts(name: &str, start: &str, end: &str) -> Result<Self> {
        let start = start.parse().map_err(Error::InvalidStart)?;
        let end = end.parse().map_err(Error::InvalidEnd)?;
        Self::try_new(name, start, end)
    }

    /// Gets the name of the sequence region.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the start position.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Gets the end position.
    pub fn end(&self) -> Position {
        self.end
    }

    /// Consumes `self` and returns the name, start, and end of the interval.
    ///
    /// # Examples
    ///
    /// ```
    /// use ensembl_liftover::core::Interval;
    ///
    /// let (name, start, end) = Interval::new("chr1", 1000, 2000).into_parts();
    /// assert_eq!(name, "chr1");
    /// assert_eq!(start, 1000);
    /// assert_eq!(end, 2000);
    /// ```
    pub fn into_parts(self) -> (String, Position, Position) {
        (self.name, self.start, self.end)
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let captures = REGION
            .captures(s.trim())
            .ok_or_else(|| Error::ParseError(s.to_string()))?;

        // SAFETY: all three groups are required by the pattern, so they will
        // always be present after a successful match.
        let name = captures.get(1).unwrap().as_str();
        let start = captures.get(2).unwrap().as_str();
        let end = captures.get(3).unwrap().as_str();

        Self::try_from_parts(name, start, end)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.name, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_interval() -> Result<()> {
        let interval = Interval::try_new("chr1", 1000, 2000)?;
        assert_eq!(interval.name(), "chr1");
        assert_eq!(interval.start(), 1000);
        assert_eq!(interval.end(), 2000);

        // Single position intervals are allowed.
        Interval::try_new("chr1", 1000, 1000)?;

        Ok(())
    }

    #[test]
    fn unchecked_interval_keeps_values() {
        let interval = Interval::new("", 20, 10);
        assert_eq!(interval.name(), "");
        assert_eq!(interval.start(), 20);
        assert_eq!(interval.end(), 10);
    }

    #[test]
    fn start_greater_than_end() {
        let err = Interval::try_new("chr1", 2000, 1000).unwrap_err();
        assert_eq!(err, Error::StartGreaterThanEnd(2000, 1000));
        assert_eq!(
            err.to_string(),
            "start position (2000) cannot be greater than the end position (1000)"
        );
    }

    #[test]
    fn empty_name() {
        let err = Interval::try_new("", 1, 2).unwrap_err();
        assert_eq!(err, Error::EmptyName);
    }

    #[test]
    fn non_numeric_positions() {
        let err = Interval::try_from_parts("chr1", "abc", "2000").unwrap_err();
        assert!(matches!(err, Error::InvalidStart(_)));

        let err = Interval::try_from_parts("chr1", "1000", "-5").unwrap_err();
        assert!(matches!(err, Error::InvalidEnd(_)));
    }

    #[test]
    fn parse_region() -> Result<()> {
        let interval = "chr1:1000-2000".parse::<Interval>()?;
        assert_eq!(interval, Interval::new("chr1", 1000, 2000));

        let interval = "X:5..10".parse::<Interval>()?;
        assert_eq!(interval, Interval::new("X", 5, 10));

        Ok(())
    }

    #[test]
    fn parse_invalid_region() {
        let err = "chr1-1000-2000".parse::<Interval>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "could not parse interval from the value: chr1-1000-2000"
        );

        let err = "chr1:2000-1000".parse::<Interval>().unwrap_err();
        assert_eq!(err, Error::StartGreaterThanEnd(2000, 1000));
    }

    #[test]
    fn display() {
        assert_eq!(Interval::new("chr1", 1, 2).to_string(), "chr1:1-2");
    }
}
