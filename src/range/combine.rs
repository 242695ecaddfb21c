//! Pairwise set operations on ranges and their operator sugar.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::{BitAnd, BitOr, BitXor};

use super::{higher, lower, Range};
use crate::error::RangeError;

impl<T> Range<T> {
    /// Returns the range strictly between two disjoint, non-touching ranges.
    ///
    /// The result is empty when either range is empty or absent, or when the
    /// ranges overlap or touch.
    ///
    /// ```
    /// use halfopen::Range;
    ///
    /// let a = Range::new(0, 5).unwrap();
    /// let b = Range::new(10, 15).unwrap();
    /// assert_eq!(a.gap(&b), Range::new(5, 10).unwrap());
    /// assert_eq!(b.gap(&a), Range::new(5, 10).unwrap());
    /// ```
    pub fn gap<'a>(&self, other: impl Into<Option<&'a Range<T>>>) -> Range<T>
    where
        T: Clone + PartialOrd + 'a,
    {
        let other = match other.into() {
            Some(other) if !other.is_empty() => other,
            _ => return self.collapsed(),
        };
        if self.is_empty() || self.overlaps(other) || self.touches(other) {
            return self.collapsed();
        }

        let (lower_range, higher_range) = if self.compare(other) == Ordering::Less {
            (self, other)
        } else {
            (other, self)
        };
        Range::new_unchecked(lower_range.end.clone(), higher_range.start.clone())
    }

    /// Merges two overlapping or touching ranges into one.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::NotMergeable`] if the ranges neither overlap nor touch.
    pub fn merge(&self, other: &Range<T>) -> Result<Range<T>, RangeError>
    where
        T: Clone + PartialOrd + Debug,
    {
        if !self.overlaps(other) && !self.touches(other) {
            return Err(RangeError::NotMergeable {
                left: self.describe(),
                right: other.describe(),
            });
        }
        Ok(Range::new_unchecked(
            lower(&self.start, &other.start).clone(),
            higher(&self.end, &other.end).clone(),
        ))
    }

    /// Splits the range at `value` into `[start, value)` and `[value, end)`.
    ///
    /// Both halves are returned even if one of them is empty.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::SplitOutOfRange`] unless `value` is included in
    /// the range or equals its end.
    pub fn split(&self, value: T) -> Result<(Range<T>, Range<T>), RangeError>
    where
        T: Clone + PartialOrd + Debug,
    {
        if !self.includes(&value) && self.end != value {
            return Err(RangeError::SplitOutOfRange {
                value: format!("{:?}", value),
                range: self.describe(),
            });
        }
        Ok((
            Range::new_unchecked(self.start.clone(), value.clone()),
            Range::new_unchecked(value, self.end.clone()),
        ))
    }

    /// Returns the common part of two overlapping ranges.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::NoOverlap`] if the ranges do not overlap.
    pub fn intersection(&self, other: &Range<T>) -> Result<Range<T>, RangeError>
    where
        T: Clone + PartialOrd + Debug,
    {
        if !self.overlaps(other) {
            return Err(RangeError::NoOverlap {
                left: self.describe(),
                right: other.describe(),
            });
        }
        Ok(self.clip(other))
    }

    /// Intersection without the overlap check.
    pub(crate) fn clip(&self, other: &Range<T>) -> Range<T>
    where
        T: Clone + PartialOrd,
    {
        Range::new_unchecked(
            higher(&self.start, &other.start).clone(),
            lower(&self.end, &other.end).clone(),
        )
    }

    /// Returns the parts covered by exactly one of the two ranges, as an ordered pair.
    ///
    /// When one range shares a boundary with the other, one side of the pair
    /// is empty. Disjoint ranges are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::EqualOperands`] if both ranges are equal.
    pub fn exclusive(&self, other: &Range<T>) -> Result<(Range<T>, Range<T>), RangeError>
    where
        T: Clone + PartialOrd + Debug,
    {
        if self == other {
            return Err(RangeError::EqualOperands {
                left: self.describe(),
                right: other.describe(),
            });
        }

        if self.includes_range(other) {
            return Ok((
                Range::new_unchecked(self.start.clone(), other.start.clone()),
                Range::new_unchecked(other.end.clone(), self.end.clone()),
            ));
        }

        if other.includes_range(self) {
            return Ok((
                Range::new_unchecked(other.start.clone(), self.start.clone()),
                Range::new_unchecked(self.end.clone(), other.end.clone()),
            ));
        }

        if self.overlaps(other) {
            return Ok((
                Range::new_unchecked(
                    lower(&self.start, &other.start).clone(),
                    higher(&self.start, &other.start).clone(),
                ),
                Range::new_unchecked(
                    lower(&self.end, &other.end).clone(),
                    higher(&self.end, &other.end).clone(),
                ),
            ));
        }

        Ok((self.clone(), other.clone()))
    }
}

/// `&a | &b` is [`Range::merge`].
impl<'a, T> BitOr<&'a Range<T>> for &'a Range<T>
where
    T: Clone + PartialOrd + Debug,
{
    type Output = Result<Range<T>, RangeError>;

    fn bitor(self, rhs: &'a Range<T>) -> Self::Output {
        self.merge(rhs)
    }
}

/// `&a & &b` is [`Range::intersection`].
impl<'a, T> BitAnd<&'a Range<T>> for &'a Range<T>
where
    T: Clone + PartialOrd + Debug,
{
    type Output = Result<Range<T>, RangeError>;

    fn bitand(self, rhs: &'a Range<T>) -> Self::Output {
        self.intersection(rhs)
    }
}

/// `&a ^ &b` is [`Range::exclusive`].
impl<'a, T> BitXor<&'a Range<T>> for &'a Range<T>
where
    T: Clone + PartialOrd + Debug,
{
    type Output = Result<(Range<T>, Range<T>), RangeError>;

    fn bitxor(self, rhs: &'a Range<T>) -> Self::Output {
        self.exclusive(rhs)
    }
}
