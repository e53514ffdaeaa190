// crates/domain/src/comparator.rs
//! Ordering strategies used to normalize and query limit points.

use std::{cmp::Ordering, fmt, rc::Rc, sync::Arc};

/// A three-way ordering over values of `T`.
///
/// Implementations are expected to be consistent (a total order) and free of
/// side effects; an interval may call `compare` any number of times.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The natural ordering of `T` as given by [`Ord`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl NaturalOrder {
    #[inline]
    pub const fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }
}

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the polarity of the wrapped comparator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<C> Reversed<C> {
    #[inline]
    pub fn into_inner(self) -> C {
        self.0
    }

    /// Undoes the reversal.
    #[inline]
    pub fn reversed(self) -> C {
        self.0
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).reverse()
    }
}

/// Adapts a closure into a [`Comparator`]. Built with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnComparator<F>(F);

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComparator").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> FnComparator<F> {
    #[inline]
    pub fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }
}

/// Creates a comparator from a closure.
///
/// ```rust
/// use closed_interval_domain::{ClosedInterval, comparator};
///
/// let by_total_order = comparator::from_fn(|a: &f64, b: &f64| a.total_cmp(b));
/// let window = ClosedInterval::new_by(2.5, -1.0, by_total_order);
/// assert_eq!(*window.lower_limit_point(), -1.0);
/// assert!(window.contains(&0.0));
/// ```
#[inline]
pub fn from_fn<T: ?Sized, F>(f: F) -> FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    FnComparator(f)
}

// A single comparator may back many intervals.

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &C {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for Box<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for Rc<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for Arc<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}
