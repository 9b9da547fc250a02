//! Output formats for lifted over intervals.
//!
//! - [`Format::Json`] writes the whole [`Batch`] as a single JSON array of
//!   `{"original": {...}, "mapped": {...}}` objects.
//! - [`Format::Bed`] writes one `<name> <start> <end>` line per mapping,
//!   describing only the mapped region.

use std::io;
use std::io::Write;
use std::str::FromStr;

use crate::liftover::Batch;

/// An error related to parsing a [`Format`].
#[derive(Debug, Eq, PartialEq)]
pub struct ParseError(String);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unrecognized output format `{}`: expected `bed` or `json`",
            self.0
        )
    }
}

impl std::error::Error for ParseError {}

/// An error related to writing a [`Batch`].
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),

    /// A serialization error.
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Json(err) => write!(f, "json error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
        }
    }
}

/// An output format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Format {
    /// Space-delimited mapped regions.
    #[default]
    Bed,

    /// A JSON array of mappings.
    Json,
}

impl Format {
    /// Writes `batch` to `writer` in this format.
    ///
    /// # Examples
    ///
    /// ```
    /// use ensembl_liftover::core::Interval;
    /// use ensembl_liftover::core::Region;
    /// use ensembl_liftover::core::Strand;
    /// use ensembl_liftover::format::Format;
    /// use ensembl_liftover::liftover::Batch;
    /// use ensembl_liftover::liftover::Mapping;
    ///
    /// let region = |name: &str, assembly: &str| {
    ///     Region::new(
    ///         Interval::new(name, 1000, 1999),
    ///         Strand::Positive,
    ///         "chromosome",
    ///         assembly,
    ///     )
    /// };
    ///
    /// let batch = Batch::from(vec![Mapping::new(
    ///     region("1", "GRCh37"),
    ///     region("1", "GRCh38"),
    /// )]);
    ///
    /// let mut buffer = Vec::new();
    /// Format::Bed.write(&batch, &mut buffer)?;
    /// assert_eq!(String::from_utf8(buffer)?, "1 1000 1999\n");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn write<W>(&self, batch: &Batch, mut writer: W) -> Result<(), Error>
    where
        W: Write,
    {
        match self {
            Format::Bed => write_bed(batch, &mut writer).map_err(Error::Io)?,
            Format::Json => write_json(batch, &mut writer)?,
        }

        writer.flush().map_err(Error::Io)
    }
}

/// Writes the mapped side of each mapping in `batch` as a BED-like line.
pub fn write_bed<W>(batch: &Batch, writer: &mut W) -> io::Result<()>
where
    W: Write,
{
    for mapping in batch {
        let mapped = mapping.mapped();
        writeln!(writer, "{} {} {}", mapped.name(), mapped.start(), mapped.end())?;
    }

    Ok(())
}

/// Writes `batch` as a pretty-printed JSON array.
pub fn write_json<W>(batch: &Batch, writer: &mut W) -> Result<(), Error>
where
    W: Write,
{
    serde_json::to_writer_pretty(&mut *writer, batch).map_err(Error::Json)?;
    writeln!(writer).map_err(Error::Io)
}

impl FromStr for Format {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bed" => Ok(Self::Bed),
            "json" => Ok(Self::Json),
            _ => Err(ParseError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Bed => write!(f, "bed"),
            Format::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Interval;
    use crate::core::Region;
    use crate::core::Strand;
    use crate::liftover::Mapping;

    fn batch() -> Batch {
        Batch::from(vec![Mapping::new(
            Region::new(
                Interval::new("X", 1000000, 1000100),
                Strand::Positive,
                "chromosome",
                "GRCh37",
            ),
            Region::new(
                Interval::new("X", 1039265, 1039365),
                Strand::Negative,
                "chromosome",
                "GRCh38",
            ),
        )])
    }

    #[test]
    fn parse_format() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!("bed".parse::<Format>()?, Format::Bed);
        assert_eq!("JSON".parse::<Format>()?, Format::Json);

        let err = "xml".parse::<Format>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognized output format `xml`: expected `bed` or `json`"
        );

        Ok(())
    }

    #[test]
    fn bed_writes_mapped_side_only() -> Result<(), Box<dyn std::error::Error>> {
        let mut buffer = Vec::new();
        Format::Bed.write(&batch(), &mut buffer)?;

        let output = String::from_utf8(buffer)?;
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(lines, vec!["X 1039265 1039365"]);

        Ok(())
    }

    #[test]
    fn json_reads_back() -> Result<(), Box<dyn std::error::Error>> {
        let mut buffer = Vec::new();
        Format::Json.write(&batch(), &mut buffer)?;

        let value = serde_json::from_slice::<serde_json::Value>(&buffer)?;
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 1);

        let original = &records[0]["original"];
        assert_eq!(original["name"], "X");
        assert_eq!(original["start"], 1000000);
        assert_eq!(original["end"], 1000100);
        assert_eq!(original["strand"], 1);
        assert_eq!(original["coord_system"], "chromosome");
        assert_eq!(original["assembly"], "GRCh37");

        let mapped = &records[0]["mapped"];
        assert_eq!(mapped["name"], "X");
        assert_eq!(mapped["start"], 1039265);
        assert_eq!(mapped["end"], 1039365);
        assert_eq!(mapped["strand"], -1);
        assert_eq!(mapped["coord_system"], "chromosome");
        assert_eq!(mapped["assembly"], "GRCh38");

        let parsed = serde_json::from_slice::<Batch>(&buffer)?;
        assert_eq!(parsed, batch());

        Ok(())
    }

    #[test]
    fn empty_batch() -> Result<(), Box<dyn std::error::Error>> {
        let mut buffer = Vec::new();
        Format::Json.write(&Batch::default(), &mut buffer)?;
        assert_eq!(String::from_utf8(buffer)?, "[]\n");

        let mut buffer = Vec::new();
        Format::Bed.write(&Batch::default(), &mut buffer)?;
        assert!(buffer.is_empty());

        Ok(())
    }
}
