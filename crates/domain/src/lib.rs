// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod comparator;
pub mod interval;
#[cfg(feature = "iter")]
pub mod iter;

pub use comparator::{Comparator, FnComparator, NaturalOrder, Reversed};
pub use interval::ClosedInterval;
#[cfg(feature = "iter")]
pub use iter::Points;
