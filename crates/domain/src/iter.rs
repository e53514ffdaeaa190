// crates/domain/src/iter.rs
//! Point iteration for integer intervals under their natural ordering.

use std::iter::FusedIterator;

use num_traits::PrimInt;

use crate::{comparator::NaturalOrder, interval::ClosedInterval};

/// An iterator over every integer point of a [`ClosedInterval`], both limit
/// points included.
///
/// Stepping never overflows, so `[T::max_value() - 1, T::max_value()]`
/// yields exactly two points.
///
/// ```rust
/// use closed_interval_domain::ClosedInterval;
///
/// let points: Vec<_> = ClosedInterval::new(4, 1).points().collect();
/// assert_eq!(points, vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct Points<T>
where
    T: PrimInt,
{
    front: T,
    back: T,
    exhausted: bool,
}

impl<T> Points<T>
where
    T: PrimInt,
{
    /// Distance from `front` to `back`, measured in 128 bits so that spans
    /// wider than `T::max_value()` (e.g. `[-100i8, 100]`) are still exact.
    fn span(&self) -> Option<u128> {
        if let (Some(front), Some(back)) = (self.front.to_i128(), self.back.to_i128()) {
            // front <= back, so the wrapped difference is the true distance.
            return Some(back.wrapping_sub(front) as u128);
        }
        match (self.front.to_u128(), self.back.to_u128()) {
            (Some(front), Some(back)) => Some(back - front),
            _ => None,
        }
    }
}

impl<T> Iterator for Points<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = self.front + T::one();
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match self.span() {
            Some(span) => match usize::try_from(span).ok().and_then(|n| n.checked_add(1)) {
                Some(n) => (n, Some(n)),
                // More than usize::MAX points genuinely remain.
                None => (usize::MAX, None),
            },
            None => (0, None),
        }
    }
}

impl<T> DoubleEndedIterator for Points<T>
where
    T: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = self.back - T::one();
        }
        Some(current)
    }
}

impl<T> FusedIterator for Points<T> where T: PrimInt {}

impl<T> ClosedInterval<T, NaturalOrder>
where
    T: PrimInt,
{
    /// Iterates the points from the lower to the upper limit point.
    #[inline]
    pub fn points(&self) -> Points<T> {
        Points {
            front: *self.lower_limit_point(),
            back: *self.upper_limit_point(),
            exhausted: false,
        }
    }
}

impl<T> IntoIterator for ClosedInterval<T, NaturalOrder>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = Points<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points()
    }
}

impl<T> IntoIterator for &ClosedInterval<T, NaturalOrder>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = Points<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points()
    }
}
