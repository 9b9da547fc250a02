//! The strand upon which a region is located.

use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// An error related to the parsing of a strand.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseStrandError {
    /// The value was not one of the recognized textual strand values.
    InvalidValue(String),

    /// The value was not `1` or `-1`.
    InvalidNumber(i64),
}

impl std::fmt::Display for ParseStrandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseStrandError::InvalidValue(value) => {
                write!(f, "parse strand error: {value} is not a valid strand")
            }
            ParseStrandError::InvalidNumber(value) => {
                write!(f, "parse strand error: {value} is not a valid strand")
            }
        }
    }
}

impl std::error::Error for ParseStrandError {}

/// The strand of a region.
///
/// Strands are serialized as the integers `1` and `-1`, which is how the
/// Ensembl services report them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Strand {
    /// The forward strand (`+`, `1`).
    Positive,

    /// The reverse strand (`-`, `-1`).
    Negative,
}

impl Strand {
    /// Gets the numeric representation of the strand.
    ///
    /// # Examples
    ///
    /// ```
    /// use ensembl_liftover::core::Strand;
    ///
    /// assert_eq!(Strand::Positive.as_number(), 1);
    /// assert_eq!(Strand::Negative.as_number(), -1);
    /// ```
    pub fn as_number(&self) -> i64 {
        match self {
            Strand::Positive => 1,
            Strand::Negative => -1,
        }
    }
}

impl FromStr for Strand {
    type Err = ParseStrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" | "1" | "+1" => Ok(Self::Positive),
            "-" | "-1" => Ok(Self::Negative),
            c => Err(ParseStrandError::InvalidValue(c.to_string())),
        }
    }
}

impl TryFrom<i64> for Strand {
    type Error = ParseStrandError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Positive),
            -1 => Ok(Self::Negative),
            n => Err(ParseStrandError::InvalidNumber(n)),
        }
    }
}

impl From<Strand> for i64 {
    fn from(strand: Strand) -> Self {
        strand.as_number()
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strand::Positive => write!(f, "+"),
            Strand::Negative => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strand_from_str() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!("+".parse::<Strand>()?, Strand::Positive);
        assert_eq!("1".parse::<Strand>()?, Strand::Positive);
        assert_eq!("-".parse::<Strand>()?, Strand::Negative);
        assert_eq!("-1".parse::<Strand>()?, Strand::Negative);

        let err = "?".parse::<Strand>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "parse strand error: ? is not a valid strand"
        );

        Ok(())
    }

    #[test]
    fn test_strand_try_from_number() {
        assert_eq!(Strand::try_from(1i64).unwrap(), Strand::Positive);
        assert_eq!(Strand::try_from(-1i64).unwrap(), Strand::Negative);
        assert_eq!(
            Strand::try_from(0i64).unwrap_err(),
            ParseStrandError::InvalidNumber(0)
        );
    }

    #[test]
    fn test_strand_serde() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(serde_json::to_string(&Strand::Negative)?, "-1");
        assert_eq!(serde_json::from_str::<Strand>("1")?, Strand::Positive);
        assert!(serde_json::from_str::<Strand>("2").is_err());
        Ok(())
    }

    #[test]
    fn test_strand_display() {
        assert_eq!(Strand::Positive.to_string(), "+");
        assert_eq!(Strand::Negative.to_string(), "-");
    }
}
