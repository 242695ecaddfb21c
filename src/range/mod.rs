//! Half-open range representation `[start, end)`.

mod combine;
mod convert;
#[cfg(feature = "serde")]
mod serde_impl;
mod steps;

pub use steps::Steps;

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::ops::Sub;

use crate::error::RangeError;

/// Compares two values, treating an incomparable pair as equal.
pub(crate) fn cmp_values<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Returns the lower of two values, preferring `a` on ties.
pub(crate) fn lower<'a, T: PartialOrd>(a: &'a T, b: &'a T) -> &'a T {
    if b < a {
        b
    } else {
        a
    }
}

/// Returns the higher of two values, preferring `a` on ties.
pub(crate) fn higher<'a, T: PartialOrd>(a: &'a T, b: &'a T) -> &'a T {
    if b > a {
        b
    } else {
        a
    }
}

/// Immutable half-open range `[start, end)` over an ordered value type.
///
/// A range with `start == end` is *empty*. All empty ranges are equal to each
/// other and to [`Range::empty`], regardless of the value they sit on.
///
/// The pairwise predicates (`overlaps`, `touches`, `includes_range`, ...)
/// accept either `&Range<T>` or `None`, which stands for an absent operand.
///
/// ```
/// use halfopen::Range;
///
/// let a = Range::new(0, 10).unwrap();
/// let b = Range::new(10, 20).unwrap();
///
/// assert!(a.touches(&b));
/// assert!(!a.overlaps(&b));
/// assert_eq!(a.merge(&b).unwrap(), Range::new(0, 20).unwrap());
/// ```
#[derive(Clone, Copy)]
pub struct Range<T> {
    start: T,
    end: T,
}

impl<T> Range<T> {
    /// Creates range `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Unordered`] if `start > end` or the two values
    /// cannot be compared.
    pub fn new(start: T, end: T) -> Result<Self, RangeError>
    where
        T: PartialOrd,
    {
        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(RangeError::Unordered)
        }
    }

    /// Caller guarantees `start <= end`.
    pub(crate) const fn new_unchecked(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// The canonical empty range.
    pub fn empty() -> Self
    where
        T: Default,
    {
        Self {
            start: T::default(),
            end: T::default(),
        }
    }

    /// An empty range sitting on this range's start.
    pub(crate) fn collapsed(&self) -> Self
    where
        T: Clone,
    {
        Self::new_unchecked(self.start.clone(), self.start.clone())
    }

    pub const fn start(&self) -> &T {
        &self.start
    }

    /// End of the range. It is not part of the range itself.
    pub const fn end(&self) -> &T {
        &self.end
    }

    /// Consumes the range and returns its `(start, end)` pair.
    pub fn into_inner(self) -> (T, T) {
        (self.start, self.end)
    }

    /// Returns the measure `end - start`.
    pub fn len(&self) -> <T as Sub>::Output
    where
        T: Clone + Sub,
    {
        self.end.clone() - self.start.clone()
    }

    pub fn is_empty(&self) -> bool
    where
        T: PartialEq,
    {
        self.start == self.end
    }

    /// Returns true if `value` ∈ `[start, end)`. An absent value is never included.
    pub fn includes<'a>(&self, value: impl Into<Option<&'a T>>) -> bool
    where
        T: PartialOrd + 'a,
    {
        match value.into() {
            Some(value) => &self.start <= value && value < &self.end,
            None => false,
        }
    }

    /// Returns true if every value is included in the range.
    pub fn includes_all<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: PartialOrd + 'a,
    {
        values.into_iter().all(|value| self.includes(value))
    }

    /// Returns true if `other` lies wholly within this range.
    ///
    /// Always false when either range is empty or `other` is absent.
    pub fn includes_range<'a>(&self, other: impl Into<Option<&'a Range<T>>>) -> bool
    where
        T: PartialOrd + 'a,
    {
        let Some(other) = other.into() else {
            return false;
        };
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.includes(&other.start) && (self.includes(&other.end) || self.end == other.end)
    }

    /// Returns true if both ranges share at least one value.
    ///
    /// Touching ranges do not overlap.
    pub fn overlaps<'a>(&self, other: impl Into<Option<&'a Range<T>>>) -> bool
    where
        T: PartialOrd + 'a,
    {
        let Some(other) = other.into() else {
            return false;
        };
        if self.is_empty() || other.is_empty() {
            return false;
        }
        other.start < self.end && other.end > self.start
    }

    /// Returns true if one range ends exactly where the other starts.
    pub fn touches<'a>(&self, other: impl Into<Option<&'a Range<T>>>) -> bool
    where
        T: PartialOrd + 'a,
    {
        let Some(other) = other.into() else {
            return false;
        };
        if self.is_empty() || other.is_empty() {
            return false;
        }
        other.start == self.end || other.end == self.start
    }

    /// Total order over optional ranges.
    ///
    /// A present range is greater than an absent one, two empty ranges are
    /// equal, an empty range is lower than any non-empty one; otherwise ranges
    /// compare by `start`, then by `end`.
    pub fn compare<'a>(&self, other: impl Into<Option<&'a Range<T>>>) -> Ordering
    where
        T: PartialOrd + 'a,
    {
        let Some(other) = other.into() else {
            return Ordering::Greater;
        };
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_values(&self.start, &other.start)
                .then_with(|| cmp_values(&self.end, &other.end)),
        }
    }

    /// Returns true if this range ends strictly before `other` starts.
    ///
    /// An empty range is before every non-empty range; nothing is before an
    /// absent or empty `other`.
    pub fn is_completely_before<'a>(&self, other: impl Into<Option<&'a Range<T>>>) -> bool
    where
        T: PartialOrd + 'a,
    {
        let Some(other) = other.into() else {
            return false;
        };
        match (self.is_empty(), other.is_empty()) {
            (_, true) => false,
            (true, false) => true,
            (false, false) => self.end < other.start,
        }
    }

    /// Returns true if this range starts strictly after `other` ends.
    ///
    /// Every non-empty range is behind an absent or empty `other`; an empty
    /// range is never behind anything.
    pub fn is_completely_behind<'a>(&self, other: impl Into<Option<&'a Range<T>>>) -> bool
    where
        T: PartialOrd + 'a,
    {
        let Some(other) = other.into() else {
            return true;
        };
        match (self.is_empty(), other.is_empty()) {
            (true, true) => false,
            (false, true) => true,
            (true, false) => false,
            (false, false) => self.start > other.end,
        }
    }

    /// Debug rendering used inside error messages.
    pub(crate) fn describe(&self) -> String
    where
        T: Debug + PartialEq,
    {
        format!("{:?}", self)
    }
}

impl<T: Default> Default for Range<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: PartialEq> PartialEq for Range<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.is_empty() && other.is_empty()) || (self.start == other.start && self.end == other.end)
    }
}

impl<T: Eq> Eq for Range<T> {}

impl<T: Hash + PartialEq> Hash for Range<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_empty() {
            0u8.hash(state);
        } else {
            1u8.hash(state);
            self.start.hash(state);
            self.end.hash(state);
        }
    }
}

impl<T: PartialOrd> PartialOrd for Range<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<T: Ord> Ord for Range<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<T: Debug + PartialEq> Debug for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("∅")
        } else {
            write!(f, "[{:?}, {:?})", self.start, self.end)
        }
    }
}

impl<T: Display + PartialEq> Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("∅")
        } else {
            write!(f, "[{}, {})", self.start, self.end)
        }
    }
}
