//! Lifts over genomic intervals from one assembly to another using the
//! Ensembl REST service.
//!
//! ```shell
//! # A single interval, as a region or as three values.
//! ensembl-liftover X:1000000-1000100
//! ensembl-liftover X 1000000 1000100 --format json
//!
//! # Every interval within a (possibly gzipped) BED-like file.
//! ensembl-liftover --input intervals.bed.gz --output lifted.bed
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use ensembl_liftover::core::Interval;
use ensembl_liftover::format::Format;
use ensembl_liftover::liftover::machine;
use ensembl_liftover::provider::rest;
use ensembl_liftover::reader;
use tracing::debug;
use tracing::info;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// Lifts over genomic intervals between genome assemblies.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The interval to lift over, either as a region (`chr1:1000-2000`) or as
    /// three values (`chr1 1000 2000`).
    #[arg(
        num_args = 1..=3,
        conflicts_with = "input",
        required_unless_present = "input"
    )]
    interval: Vec<String>,

    /// A whitespace-delimited file of intervals to lift over (optionally
    /// gzipped). Only the first three columns are used.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// The assembly the intervals are expressed in.
    #[arg(short, long, default_value = "GRCh37")]
    source_assembly: String,

    /// The assembly to lift the intervals over to.
    #[arg(short, long, default_value = "GRCh38")]
    target_assembly: String,

    /// The output format (`bed` or `json`).
    #[arg(short, long, default_value_t = Format::Bed)]
    format: Format,

    /// The file to write the results to (defaults to stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// The Ensembl REST server.
    #[arg(long, default_value = rest::DEFAULT_SERVER)]
    server: String,

    /// The species whose assemblies are being mapped.
    #[arg(long, default_value = rest::DEFAULT_SPECIES)]
    species: String,

    /// The coordinate system of the intervals.
    #[arg(long, default_value = rest::DEFAULT_COORD_SYSTEM)]
    coord_system: String,

    /// If desired, a timeout (in seconds) for each request to the server.
    #[arg(long)]
    timeout: Option<u64>,

    #[command(flatten)]
    verbose: Verbosity,
}

/// Gathers the intervals to lift over from the command line or the input file.
fn intervals(args: &Args) -> Result<Vec<Interval>> {
    if let Some(path) = &args.input {
        info!("reading intervals from {}", path.display());

        return reader::open(path)
            .with_context(|| format!("opening {}", path.display()))?
            .intervals()
            .collect::<std::result::Result<Vec<_>, _>>()
            .with_context(|| format!("reading intervals from {}", path.display()));
    }

    let interval = match args.interval.as_slice() {
        [region] => region
            .parse::<Interval>()
            .with_context(|| format!("parsing interval `{region}`"))?,
        [name, start, end] => Interval::try_from_parts(name, start, end)
            .with_context(|| format!("parsing interval `{name} {start} {end}`"))?,
        values => bail!(
            "expected either a region (`chr1:1000-2000`) or three values (`chr1 1000 2000`), \
             found {} value(s)",
            values.len()
        ),
    };

    Ok(vec![interval])
}

fn run(args: Args) -> Result<()> {
    let intervals = intervals(&args)?;
    info!("read {} interval(s)", intervals.len());

    let mut config = rest::Config::default()
        .with_server(&args.server)
        .with_species(&args.species)
        .with_coord_system(&args.coord_system);

    if let Some(seconds) = args.timeout {
        config = config.with_timeout(Duration::from_secs(seconds));
    }

    debug!("using {:?}", config);

    let client = rest::Client::try_new(config).context("connecting to the Ensembl REST service")?;

    let machine = machine::Builder::default()
        .source_assembly(&args.source_assembly)
        .target_assembly(&args.target_assembly)
        .try_build_from(&client)
        .context("configuring the liftover")?;

    let batch = machine
        .liftover_all(&intervals)
        .context("lifting over intervals")?;

    match &args.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            args.format
                .write(&batch, BufWriter::new(file))
                .with_context(|| format!("writing {}", path.display()))?;
        }
        None => args
            .format
            .write(&batch, std::io::stdout().lock())
            .context("writing to stdout")?,
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(EnvFilter::from_default_env())
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .init(),
    };

    run(args)
}
