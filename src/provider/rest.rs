//! A provider backed by the Ensembl REST service.
//!
//! Projections are resolved with the assembly mapping endpoint:
//!
//! ```text
//! GET /map/:species/:asm_one/:region/:asm_two
//! ```
//!
//! Each element of the returned `mappings` array pairs a piece of the queried
//! region (`original`) with the region it maps onto (`mapped`).

use std::time::Duration;

use reqwest::blocking;
use reqwest::header;
use reqwest::StatusCode;
use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

use crate::core::interval::Position;
use crate::core::Interval;
use crate::core::Region;
use crate::core::Strand;
use crate::provider::Error;
use crate::provider::Projection;
use crate::provider::Provider;
use crate::provider::Result;
use crate::provider::Segment;

/// The default Ensembl REST server.
pub const DEFAULT_SERVER: &str = "https://rest.ensembl.org";

/// The default species.
pub const DEFAULT_SPECIES: &str = "human";

/// The default coordinate system.
pub const DEFAULT_COORD_SYSTEM: &str = "chromosome";

/// The user agent sent with every request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configuration for a [`Client`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The base URL of the server.
    server: String,

    /// The species whose assemblies are being mapped.
    species: String,

    /// The coordinate system of both the queried and the mapped regions.
    coord_system: String,

    /// The timeout for each request, if any.
    timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            species: DEFAULT_SPECIES.to_string(),
            coord_system: DEFAULT_COORD_SYSTEM.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    /// Sets the base URL of the server.
    ///
    /// # Examples
    ///
    /// ```
    /// use ensembl_liftover::provider::rest::Config;
    ///
    /// let config = Config::default().with_server("https://grch37.rest.ensembl.org/");
    /// assert_eq!(config.server(), "https://grch37.rest.ensembl.org");
    /// ```
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = server.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the species.
    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = species.into();
        self
    }

    /// Sets the coordinate system.
    pub fn with_coord_system(mut self, coord_system: impl Into<String>) -> Self {
        self.coord_system = coord_system.into();
        self
    }

    /// Sets the timeout for each request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Gets the base URL of the server.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Gets the species.
    pub fn species(&self) -> &str {
        &self.species
    }

    /// Gets the coordinate system.
    pub fn coord_system(&self) -> &str {
        &self.coord_system
    }

    /// Gets the timeout for each request.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// A client for the Ensembl REST service.
///
/// The client is built once and then shared by reference across every
/// projection within a run.
#[derive(Debug)]
pub struct Client {
    /// The inner HTTP client.
    inner: blocking::Client,

    /// The parsed base URL of the server.
    base: Url,

    /// The configuration.
    config: Config,
}

impl Client {
    /// Attempts to create a new [`Client`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ensembl_liftover::provider::rest::Client;
    /// use ensembl_liftover::provider::rest::Config;
    ///
    /// let client = Client::try_new(Config::default())?;
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_new(config: Config) -> Result<Self> {
        let base = base_url(config.server())?;
        let mut builder = blocking::Client::builder().user_agent(USER_AGENT);

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let inner = builder.build().map_err(Error::Session)?;
        Ok(Self {
            inner,
            base,
            config,
        })
    }

    /// Gets the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the URL for projecting `interval` from `source` to `target`.
    fn url(&self, interval: &Interval, source: &str, target: &str) -> Result<Url> {
        map_url(&self.base, &self.config, interval, source, target)
    }
}

impl Provider for Client {
    fn project(&self, interval: &Interval, source: &str, target: &str) -> Result<Projection> {
        let url = self.url(interval, source, target)?;
        debug!("requesting {url}");

        let response = self
            .inner
            .get(url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .send()
            .map_err(Error::Transport)?;

        let status = response.status();
        let body = response.text().map_err(Error::Transport)?;

        if !status.is_success() {
            return Err(rejection(status, error_message(&body), interval, source, target));
        }

        decode(interval, source, &self.config, &body)
    }
}

/// Parses and checks the base URL of the server.
fn base_url(server: &str) -> Result<Url> {
    let url = Url::parse(server)
        .map_err(|err| Error::InvalidServer(format!("{server}: {err}")))?;

    if url.cannot_be_a_base() {
        return Err(Error::InvalidServer(format!("{server}: cannot be used as a base url")));
    }

    Ok(url)
}

/// Builds the assembly mapping URL.
///
/// Every path segment and query value is percent-encoded, so sequence region
/// names containing reserved characters stay within their own segment.
fn map_url(
    base: &Url,
    config: &Config,
    interval: &Interval,
    source: &str,
    target: &str,
) -> Result<Url> {
    let region = format!("{}:{}..{}:1", interval.name(), interval.start(), interval.end());
    let mut url = base.clone();

    url.path_segments_mut()
        .map_err(|_| Error::InvalidServer(base.to_string()))?
        .pop_if_empty()
        .extend(["map", config.species(), source, region.as_str(), target]);

    url.query_pairs_mut()
        .append_pair("coord_system", config.coord_system())
        .append_pair("target_coord_system", config.coord_system());

    Ok(url)
}

/// The body of a successful assembly mapping response.
#[derive(Debug, Deserialize)]
struct MapResponse {
    /// The mapped pieces of the queried region.
    mappings: Vec<MapRecord>,
}

/// A single element of the `mappings` array.
#[derive(Debug, Deserialize)]
struct MapRecord {
    /// The piece of the queried region.
    original: RegionRecord,

    /// The region that piece maps onto.
    mapped: RegionRecord,
}

/// A region as reported by the service.
#[derive(Debug, Deserialize)]
struct RegionRecord {
    /// The name of the sequence region.
    seq_region_name: String,

    /// The start position.
    start: Position,

    /// The end position.
    end: Position,

    /// The strand.
    strand: Strand,

    /// The coordinate system.
    coord_system: String,

    /// The assembly.
    assembly: String,
}

impl From<RegionRecord> for Region {
    fn from(record: RegionRecord) -> Self {
        Region::new(
            Interval::new(record.seq_region_name, record.start, record.end),
            record.strand,
            record.coord_system,
            record.assembly,
        )
    }
}

/// The body of a failed request.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    /// The error message.
    error: String,
}

/// Extracts the error message from the body of a failed request.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|response| response.error)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Converts a failed request into an [`Error`].
///
/// The service answers `400 Bad Request` for identifiers it does not know.
/// Those are reported as [`Error::UnknownSequence`] or
/// [`Error::UnknownAssembly`]; everything else is [`Error::Rejected`].
fn rejection(
    status: StatusCode,
    message: String,
    interval: &Interval,
    source: &str,
    target: &str,
) -> Error {
    if status == StatusCode::BAD_REQUEST {
        let lowered = message.to_lowercase();

        if lowered.contains("no slice found") || lowered.contains("sequence region") {
            return Error::UnknownSequence(interval.name().to_string());
        }

        if lowered.contains("assembly")
            || lowered.contains("coord_system")
            || lowered.contains("coord system")
            || lowered.contains("coordinate system")
        {
            let assembly = if message.contains(source) {
                source.to_string()
            } else if message.contains(target) {
                target.to_string()
            } else {
                format!("{source} or {target}")
            };

            return Error::UnknownAssembly(assembly);
        }
    }

    Error::Rejected {
        status: status.as_u16(),
        message,
    }
}

/// Decodes the body of a successful assembly mapping response into a
/// [`Projection`] of `interval`.
fn decode(interval: &Interval, source: &str, config: &Config, body: &str) -> Result<Projection> {
    let response = serde_json::from_str::<MapResponse>(body)
        .map_err(|err| Error::InvalidResponse(err.to_string()))?;

    let queried = Region::new(
        interval.clone(),
        Strand::Positive,
        config.coord_system(),
        source,
    );

    let segments = response
        .mappings
        .into_iter()
        .map(|record| -> Result<Segment> {
            let offset = |position: Position| {
                position.checked_sub(interval.start()).ok_or_else(|| {
                    Error::InvalidResponse(format!(
                        "mapped position {position} falls before the start of {interval}"
                    ))
                })
            };

            let start = offset(record.original.start)?;
            let end = offset(record.original.end)?;

            Ok(Segment::new(start, end, Region::from(record.mapped)))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("{} segment(s) returned for {interval}", segments.len());

    Ok(Projection::new(queried, segments))
}
