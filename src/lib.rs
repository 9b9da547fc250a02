//! `ensembl-liftover` is a crate for lifting over genomic intervals from one
//! genome assembly to another (e.g., `GRCh37` to `GRCh38`) using the Ensembl
//! assembly mapping service.
//!
//! The crate does not compute projections itself. Instead, it asks a
//! [`provider::Provider`] to project each interval and then assembles the
//! results into an ordered [`liftover::Batch`] of
//! [`liftover::Mapping`]s—each pairing a piece of the queried interval on the
//! source assembly with the region it maps onto on the target assembly.
//!
//! A single interval may map onto several regions on the target assembly when
//! the two assemblies differ within it. Each of those pieces produces its own
//! mapping, in the order the provider reported them. An interval that does not
//! map at all simply produces no mappings.
//!
//! ## Lifting over intervals
//!
//! The [`liftover::Machine`] facility drives the process. It cannot be
//! instantiated directly. Instead, you should use [`liftover::machine::Builder`]
//! to set the source and target assemblies and then borrow a provider with
//! [`liftover::machine::Builder::try_build_from()`].
//!
//! In practice, the provider is a [`provider::rest::Client`] talking to the
//! Ensembl REST service. Below, an in-memory provider stands in for it.
//!
//! ```
//! use ensembl_liftover::core::Interval;
//! use ensembl_liftover::core::Region;
//! use ensembl_liftover::core::Strand;
//! use ensembl_liftover::liftover::machine::Builder;
//! use ensembl_liftover::provider::mock::MockProvider;
//! use ensembl_liftover::provider::Segment;
//!
//! let interval = "X:1000000-1000100".parse::<Interval>()?;
//! let target = Region::new(
//!     Interval::new("X", 1039265, 1039365),
//!     Strand::Positive,
//!     "chromosome",
//!     "GRCh38",
//! );
//!
//! let provider =
//!     MockProvider::default().with_segments(interval.clone(), vec![Segment::new(0, 100, target)]);
//!
//! let machine = Builder::default()
//!     .source_assembly("GRCh37")
//!     .target_assembly("GRCh38")
//!     .try_build_from(&provider)?;
//!
//! for mapping in &machine.liftover_all([&interval])? {
//!     println!("{}", mapping);
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Reading intervals
//!
//! Intervals can be read from whitespace-delimited files using the [`Reader`]
//! facility (see [`reader::open()`] to open a possibly gzipped file by path).
//!
//! ```
//! let data = b"# intervals\nX\t1000000\t1000100\n";
//! let mut reader = ensembl_liftover::Reader::new(&data[..]);
//!
//! for result in reader.intervals() {
//!     let interval = result?;
//!     println!("{}", interval);
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod core;
pub mod format;
pub mod liftover;
pub mod line;
pub mod provider;
pub mod reader;

pub use line::Line;

pub use self::reader::Reader;
