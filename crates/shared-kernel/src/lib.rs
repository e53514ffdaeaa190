// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{ErrorContext, IntervalError, IntervalResult};

pub mod error;
