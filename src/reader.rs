//! An interval file reader.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::{self};
use std::iter;
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::core::Interval;
use crate::line;
use crate::Line;

/// The new line character.
const NEW_LINE: char = '\n';

/// The carriage return character.
const CARRIAGE_RETURN: char = '\r';

/// An error related to a [`Reader`].
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),

    /// A line error, along with the 1-based number of the offending line.
    Line(usize, line::ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Line(number, err) => write!(f, "line {number}: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Line(_, err) => Some(err),
        }
    }
}

/// An interval file reader.
#[derive(Clone, Debug)]
pub struct Reader<T>
where
    T: BufRead,
{
    /// The inner reader.
    inner: T,

    /// The number of lines read so far.
    line_number: usize,
}

impl<T> Reader<T>
where
    T: BufRead,
{
    /// Creates an interval file reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"chr1\t1000\t2000\n";
    /// let reader = ensembl_liftover::Reader::new(&data[..]);
    /// ```
    pub fn new(inner: T) -> Self {
        Self::from(inner)
    }

    /// Gets a reference to the inner reader.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Consumes self and returns the inner reader.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Gets the number of lines read so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Reads a raw, textual line from the underlying reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"chr1\t1000\t2000\r\nchr2\t5\t10";
    /// let mut reader = ensembl_liftover::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 16);
    /// assert_eq!(buffer, "chr1\t1000\t2000");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 9);
    /// assert_eq!(buffer, "chr2\t5\t10");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 0);
    ///
    /// # Ok::<(), io::Error>(())
    /// ```
    pub fn read_line_raw(&mut self, buffer: &mut String) -> io::Result<usize> {
        let read = read_line(&mut self.inner, buffer)?;

        if read > 0 {
            self.line_number += 1;
        }

        Ok(read)
    }

    /// Attempts to read a [`Line`] from the underlying reader.
    pub fn read_line(&mut self, buffer: &mut String) -> Result<Option<Line>, Error> {
        let read = self.read_line_raw(buffer).map_err(Error::Io)?;

        match read {
            0 => Ok(None),
            _ => buffer
                .parse::<Line>()
                .map(Some)
                .map_err(|e| Error::Line(self.line_number, e)),
        }
    }

    /// Returns an iterator over the intervals in the underlying reader.
    ///
    /// Empty lines and comment lines are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use ensembl_liftover::core::Interval;
    ///
    /// let data = b"track name=test\nchr1\t1000\t2000\tfoo\n\n# comment\n2 5 10\n";
    /// let mut reader = ensembl_liftover::Reader::new(&data[..]);
    ///
    /// let intervals = reader.intervals().collect::<Result<Vec<_>, _>>()?;
    /// assert_eq!(
    ///     intervals,
    ///     vec![Interval::new("chr1", 1000, 2000), Interval::new("2", 5, 10)]
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn intervals(&mut self) -> impl Iterator<Item = Result<Interval, Error>> + '_ {
        let mut buffer = String::new();

        iter::from_fn(move || loop {
            match self.read_line(&mut buffer) {
                Ok(None) => return None,
                Ok(Some(Line::Record(interval))) => return Some(Ok(interval)),
                Ok(Some(Line::Empty)) | Ok(Some(Line::Comment(_))) => continue,
                Err(e) => return Some(Err(e)),
            }
        })
    }
}

impl<T> From<T> for Reader<T>
where
    T: BufRead,
{
    fn from(inner: T) -> Self {
        Self {
            inner,
            line_number: 0,
        }
    }
}

/// Opens an interval file for reading.
///
/// Files with a `.gz` extension are decompressed as they are read.
pub fn open(path: impl AsRef<Path>) -> io::Result<Reader<Box<dyn BufRead>>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let inner: Box<dyn BufRead> = match path.extension().and_then(|ext| ext.to_str()) {
        Some("gz") => Box::new(BufReader::new(MultiGzDecoder::new(file))),
        _ => Box::new(BufReader::new(file)),
    };

    Ok(Reader::new(inner))
}

/// Reads a line from a buffered reader, stripping the line terminator.
fn read_line<T>(reader: &mut T, buffer: &mut String) -> io::Result<usize>
where
    T: BufRead,
{
    buffer.clear();

    match reader.read_line(buffer) {
        Ok(0) => Ok(0),
        Ok(n) => {
            if buffer.ends_with(NEW_LINE) {
                buffer.pop();

                if buffer.ends_with(CARRIAGE_RETURN) {
                    buffer.pop();
                }
            }

            Ok(n)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    use super::*;

    #[test]
    fn test_read_line() {
        let data = b"hello\r\nworld!";
        let mut cursor = io::Cursor::new(data);

        let mut buffer = String::new();
        let len = read_line(&mut cursor, &mut buffer).unwrap();
        assert_eq!(buffer, "hello");
        assert_eq!(len, 7);

        let len = read_line(&mut cursor, &mut buffer).unwrap();
        assert_eq!(buffer, "world!");
        assert_eq!(len, 6);
    }

    #[test]
    fn test_intervals_in_order() -> Result<(), Box<dyn std::error::Error>> {
        let data = b"chr3\t30\t40\nchr1\t10\t20\nchr2\t1\t2\n";
        let mut reader = Reader::new(&data[..]);

        let names = reader
            .intervals()
            .map(|result| result.map(|i| i.name().to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        assert_eq!(names, vec!["chr3", "chr1", "chr2"]);

        Ok(())
    }

    #[test]
    fn test_error_reports_line_number() {
        let data = b"# header\nchr1\t10\t20\nchr1\t30\n";
        let mut reader = Reader::new(&data[..]);

        let results = reader.intervals().collect::<Vec<_>>();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());

        let err = results[1].as_ref().unwrap_err();
        assert!(matches!(err, Error::Line(3, _)));
        assert!(err.to_string().starts_with("line 3: invalid number of fields"));
    }

    #[test]
    fn test_open_gzipped() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("intervals.bed.gz");

        let mut encoder = GzEncoder::new(File::create(&path)?, Compression::default());
        encoder.write_all(b"chr1\t1000\t2000\n")?;
        encoder.finish()?;

        let intervals = open(&path)?.intervals().collect::<Result<Vec<_>, _>>()?;
        assert_eq!(intervals, vec![Interval::new("chr1", 1000, 2000)]);

        Ok(())
    }

    #[test]
    fn test_open_plain() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::Builder::new().suffix(".bed").tempfile()?;
        file.write_all(b"# header\nchr2\t5\t10\n")?;
        file.flush()?;

        let intervals = open(file.path())?.intervals().collect::<Result<Vec<_>, _>>()?;
        assert_eq!(intervals, vec![Interval::new("chr2", 5, 10)]);

        Ok(())
    }
}
