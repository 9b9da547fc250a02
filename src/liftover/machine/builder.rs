//! A builder for a [`Machine`].

use crate::liftover::Machine;
use crate::provider::Provider;

/// An error related to building a [`Machine`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// A required assembly was never provided.
    Missing(&'static str),

    /// An assembly was provided but was empty.
    Empty(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Missing(field) => write!(f, "missing {field} assembly"),
            Error::Empty(field) => write!(f, "{field} assembly cannot be empty"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A builder for a [`Machine`].
#[derive(Clone, Debug, Default)]
pub struct Builder {
    /// The assembly that intervals are expressed in.
    source: Option<String>,

    /// The assembly that intervals are lifted over to.
    target: Option<String>,
}

impl Builder {
    /// Sets the source assembly (e.g., `GRCh37`).
    pub fn source_assembly(mut self, assembly: impl Into<String>) -> Self {
        self.source = Some(assembly.into());
        self
    }

    /// Sets the target assembly (e.g., `GRCh38`).
    pub fn target_assembly(mut self, assembly: impl Into<String>) -> Self {
        self.target = Some(assembly.into());
        self
    }

    /// Builds a [`Machine`] that borrows `provider`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ensembl_liftover::liftover::machine::Builder;
    /// use ensembl_liftover::provider::mock::MockProvider;
    ///
    /// let provider = MockProvider::default();
    /// let machine = Builder::default()
    ///     .source_assembly("GRCh37")
    ///     .target_assembly("GRCh38")
    ///     .try_build_from(&provider)?;
    ///
    /// assert_eq!(machine.source(), "GRCh37");
    /// assert_eq!(machine.target(), "GRCh38");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build_from<'a, P>(&self, provider: &'a P) -> Result<Machine<'a, P>>
    where
        P: Provider,
    {
        let source = validate(self.source.as_deref(), "source")?;
        let target = validate(self.target.as_deref(), "target")?;

        Ok(Machine {
            provider,
            source,
            target,
        })
    }
}

/// Ensures an assembly was provided and is not empty.
fn validate(assembly: Option<&str>, field: &'static str) -> Result<String> {
    match assembly.map(str::trim) {
        None => Err(Error::Missing(field)),
        Some("") => Err(Error::Empty(field)),
        Some(value) => Ok(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::mock::MockProvider;

    #[test]
    fn missing_assemblies() {
        let provider = MockProvider::default();

        let err = Builder::default()
            .target_assembly("GRCh38")
            .try_build_from(&provider)
            .unwrap_err();
        assert_eq!(err, Error::Missing("source"));

        let err = Builder::default()
            .source_assembly("GRCh37")
            .try_build_from(&provider)
            .unwrap_err();
        assert_eq!(err, Error::Missing("target"));
        assert_eq!(err.to_string(), "missing target assembly");
    }

    #[test]
    fn empty_assembly() {
        let provider = MockProvider::default();

        let err = Builder::default()
            .source_assembly("  ")
            .target_assembly("GRCh38")
            .try_build_from(&provider)
            .unwrap_err();
        assert_eq!(err, Error::Empty("source"));
    }
}
