//! Facilities for lifting over intervals.

pub mod batch;
pub mod machine;
pub mod mapping;
pub mod projector;

pub use batch::Batch;
pub use machine::Machine;
pub use mapping::Mapping;
