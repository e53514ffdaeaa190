// crates/domain/src/interval.rs
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Bound, RangeBounds, RangeInclusive},
};

use closed_interval_shared_kernel::{IntervalError, IntervalResult};
use log::{debug, trace};

use crate::comparator::{Comparator, NaturalOrder};

/// A closed interval `[lower, upper]` whose limit points are ordered by `C`.
///
/// The limit points are normalized on construction: whichever of the two
/// values compares greater under the comparator becomes the upper limit
/// point, so `compare(lower, upper) != Greater` holds for every instance.
/// Instances are never changed in place; every derivation builds a new one.
///
/// ```rust
/// use closed_interval_domain::ClosedInterval;
///
/// let iv = ClosedInterval::new(90, 10);
/// assert_eq!(*iv.lower_limit_point(), 10);
/// assert_eq!(*iv.upper_limit_point(), 90);
/// assert!(iv.contains(&10) && iv.contains(&90));
/// ```
#[derive(Clone, Copy)]
pub struct ClosedInterval<T, C = NaturalOrder> {
    lower_limit_point: T,
    upper_limit_point: T,
    comparer: C,
}

impl<T: Ord> ClosedInterval<T> {
    /// Creates an interval ordered by the natural ordering of `T`.
    #[inline]
    pub fn new(a: T, b: T) -> Self {
        Self::new_by(a, b, NaturalOrder)
    }

    /// Creates the degenerate interval `[point, point]`.
    #[inline]
    pub fn from_point(point: T) -> Self
    where
        T: Clone,
    {
        Self::new(point.clone(), point)
    }
}

impl<T, C> ClosedInterval<T, C>
where
    C: Comparator<T>,
{
    /// Creates an interval whose limit points are ordered by `comparer`.
    ///
    /// Never fails because of argument order: if `a` compares greater than
    /// `b` the two are swapped.
    pub fn new_by(a: T, b: T, comparer: C) -> Self {
        if comparer.compare(&a, &b) == Ordering::Greater {
            trace!("limit points supplied in descending order, swapping");
            Self {
                lower_limit_point: b,
                upper_limit_point: a,
                comparer,
            }
        } else {
            Self {
                lower_limit_point: a,
                upper_limit_point: b,
                comparer,
            }
        }
    }

    /// Like [`ClosedInterval::new_by`], for callers whose comparator may be
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::MissingComparator`] when `comparer` is `None`.
    /// No default ordering is substituted.
    ///
    /// ```rust
    /// use closed_interval_domain::{ClosedInterval, NaturalOrder};
    ///
    /// let err = ClosedInterval::<i32, NaturalOrder>::try_new_by(1, 5, None).unwrap_err();
    /// assert!(err.is_missing_comparator());
    /// ```
    pub fn try_new_by(a: T, b: T, comparer: Option<C>) -> IntervalResult<Self> {
        let Some(comparer) = comparer else {
            debug!("rejecting interval construction without a comparator");
            return Err(IntervalError::MissingComparator);
        };
        Ok(Self::new_by(a, b, comparer))
    }

    #[inline]
    pub const fn lower_limit_point(&self) -> &T {
        &self.lower_limit_point
    }

    #[inline]
    pub const fn upper_limit_point(&self) -> &T {
        &self.upper_limit_point
    }

    #[inline]
    pub const fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Consumes the interval, returning `(lower, upper)`.
    #[inline]
    pub fn into_limit_points(self) -> (T, T) {
        (self.lower_limit_point, self.upper_limit_point)
    }

    /// Returns `true` if `candidate` lies within `[lower, upper]`, both ends
    /// included, as judged by this interval's comparator.
    #[inline]
    pub fn contains(&self, candidate: &T) -> bool {
        if self.comparer.compare(candidate, &self.lower_limit_point) == Ordering::Less {
            return false;
        }
        if self.comparer.compare(candidate, &self.upper_limit_point) == Ordering::Greater {
            return false;
        }
        true
    }

    /// Returns `true` if both limit points compare equal.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.comparer.compare(&self.lower_limit_point, &self.upper_limit_point) == Ordering::Equal
    }

    /// Builds a new interval from this interval's lower limit point to
    /// `new_upper`, ordered by the same comparator.
    ///
    /// The result is normalized again, so a `new_upper` below the current
    /// lower limit point becomes the new lower limit point.
    ///
    /// ```rust
    /// use closed_interval_domain::ClosedInterval;
    ///
    /// let start = ClosedInterval::from_point(5);
    /// assert_eq!(start.to(10), ClosedInterval::new(5, 10));
    /// assert_eq!(start.to(1), ClosedInterval::new(1, 5));
    /// ```
    pub fn to(&self, new_upper: T) -> Self
    where
        T: Clone,
        C: Clone,
    {
        Self::new_by(self.lower_limit_point.clone(), new_upper, self.comparer.clone())
    }

    /// Re-orders the stored limit points under `comparer`.
    ///
    /// The current lower and upper limit points are fed to
    /// [`ClosedInterval::new_by`] in that order, so a comparator of opposite
    /// polarity swaps them.
    ///
    /// ```rust
    /// use closed_interval_domain::{ClosedInterval, NaturalOrder};
    ///
    /// let iv = ClosedInterval::new(1, 10).with_comparer(NaturalOrder.reversed());
    /// assert_eq!(*iv.lower_limit_point(), 10);
    /// assert_eq!(*iv.upper_limit_point(), 1);
    /// ```
    pub fn with_comparer<D>(&self, comparer: D) -> ClosedInterval<T, D>
    where
        T: Clone,
        D: Comparator<T>,
    {
        ClosedInterval::new_by(
            self.lower_limit_point.clone(),
            self.upper_limit_point.clone(),
            comparer,
        )
    }
}

impl<T, C> fmt::Debug for ClosedInterval<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosedInterval")
            .field("lower_limit_point", &self.lower_limit_point)
            .field("upper_limit_point", &self.upper_limit_point)
            .finish_non_exhaustive()
    }
}

impl<T, C> fmt::Display for ClosedInterval<T, C>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower_limit_point, self.upper_limit_point)
    }
}

// Equality looks at the limit points only; comparators are stateless.
impl<T, C, D> PartialEq<ClosedInterval<T, D>> for ClosedInterval<T, C>
where
    T: PartialEq,
{
    #[inline]
    fn eq(&self, other: &ClosedInterval<T, D>) -> bool {
        self.lower_limit_point == other.lower_limit_point
            && self.upper_limit_point == other.upper_limit_point
    }
}

impl<T: Eq, C> Eq for ClosedInterval<T, C> {}

impl<T: Hash, C> Hash for ClosedInterval<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lower_limit_point.hash(state);
        self.upper_limit_point.hash(state);
    }
}

impl<T> RangeBounds<T> for ClosedInterval<T, NaturalOrder> {
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.lower_limit_point)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Included(&self.upper_limit_point)
    }
}

impl<T: Ord> From<RangeInclusive<T>> for ClosedInterval<T> {
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl<T> From<ClosedInterval<T>> for RangeInclusive<T> {
    #[inline]
    fn from(iv: ClosedInterval<T>) -> Self {
        iv.lower_limit_point..=iv.upper_limit_point
    }
}
