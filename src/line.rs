//! A line within an interval file.

use std::str::FromStr;

use crate::core::interval;
use crate::core::Interval;

/// The prefixes of lines that carry no interval.
const COMMENT_PREFIXES: &[&str] = &["#", "track", "browser"];

/// The minimum number of fields in a record line.
const MIN_FIELDS: usize = 3;

/// An error associated with parsing a line.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The line had too few fields.
    InvalidNumberOfFields(usize, String),

    /// The fields did not describe a valid interval.
    InvalidInterval(interval::Error, String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumberOfFields(found, line) => write!(
                f,
                "invalid number of fields: expected at least {MIN_FIELDS} fields, found {found} \
                 fields\n\nline: {line}"
            ),
            ParseError::InvalidInterval(err, line) => {
                write!(f, "invalid interval: {err}\n\nline: {line}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A line within an interval file.
///
/// Records are whitespace-delimited with the sequence region name, the start
/// position, and the end position in the first three columns. Any further
/// columns are ignored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line {
    /// An empty line.
    Empty,

    /// A comment, `track`, or `browser` line.
    Comment(String),

    /// A record describing an interval.
    Record(Interval),
}

impl FromStr for Line {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Ok(Self::Empty);
        }

        if COMMENT_PREFIXES
            .iter()
            .any(|prefix| trimmed.starts_with(prefix))
        {
            return Ok(Self::Comment(trimmed.to_string()));
        }

        let fields = trimmed.split_whitespace().collect::<Vec<_>>();

        if fields.len() < MIN_FIELDS {
            return Err(ParseError::InvalidNumberOfFields(fields.len(), s.into()));
        }

        Interval::try_from_parts(fields[0], fields[1], fields[2])
            .map(Line::Record)
            .map_err(|e| ParseError::InvalidInterval(e, s.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_line() -> Result<(), Box<dyn std::error::Error>> {
        let line = "chr1\t1000\t2000".parse::<Line>()?;
        assert_eq!(line, Line::Record(Interval::new("chr1", 1000, 2000)));

        let line = "chr1 1000  2000 name 0 +".parse::<Line>()?;
        assert_eq!(line, Line::Record(Interval::new("chr1", 1000, 2000)));

        Ok(())
    }

    #[test]
    fn test_skipped_lines() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!("".parse::<Line>()?, Line::Empty);
        assert_eq!("   \t".parse::<Line>()?, Line::Empty);
        assert!(matches!("# header".parse::<Line>()?, Line::Comment(_)));
        assert!(matches!(
            "track name=foo".parse::<Line>()?,
            Line::Comment(_)
        ));
        assert!(matches!(
            "browser position chr1:1-100".parse::<Line>()?,
            Line::Comment(_)
        ));
        Ok(())
    }

    #[test]
    fn test_too_few_fields() {
        let err = "chr1\t1000".parse::<Line>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid number of fields: expected at least 3 fields, found 2 fields\n\nline: \
             chr1\t1000"
        );
    }

    #[test]
    fn test_invalid_interval() {
        let err = "chr1\t2000\t1000".parse::<Line>().unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidInterval(
                interval::Error::StartGreaterThanEnd(2000, 1000),
                String::from("chr1\t2000\t1000")
            )
        );

        let err = "chr1\tstart\t1000".parse::<Line>().unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidInterval(interval::Error::InvalidStart(_), _)
        ));
    }
}
