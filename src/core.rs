//! Core coordinate types used across the crate.

pub mod interval;
pub mod region;
pub mod strand;

pub use interval::Interval;
pub use region::Region;
pub use strand::Strand;
