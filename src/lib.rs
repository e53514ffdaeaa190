// src/lib.rs
//! Closed intervals `[lower, upper]` over any ordered domain.
//!
//! A [`ClosedInterval`] stores two limit points and the [`Comparator`] that
//! orders them. Construction normalizes the limit points so the lower one
//! never compares greater than the upper one; all derivations
//! ([`ClosedInterval::to`], [`ClosedInterval::with_comparer`]) return new
//! values.
//!
//! ```rust
//! use closed_interval::{ClosedInterval, NaturalOrder};
//!
//! let hours = ClosedInterval::new(17, 9);
//! assert_eq!(hours.to_string(), "[9, 17]");
//! assert!(hours.contains(&12));
//!
//! let countdown = hours.with_comparer(NaturalOrder.reversed());
//! assert_eq!(*countdown.lower_limit_point(), 17);
//! ```
#![allow(clippy::multiple_crate_versions)]

pub use closed_interval_domain::{
    ClosedInterval, Comparator, FnComparator, NaturalOrder, Reversed, comparator,
};
#[cfg(feature = "iter")]
pub use closed_interval_domain::Points;
pub use closed_interval_shared_kernel::{ErrorContext, IntervalError, IntervalResult};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
