//! A mutable, ordered list of ranges.
//!
//! [`RangeCollection`] wraps a `Vec<Range<T>>` and keeps whatever order and
//! duplicates the caller puts in. Unlike the outputs of the set operators it
//! is *not* kept canonical; [`RangeCollection::reduce`] produces a canonical
//! copy on demand.
//!
//! Read and write access to the elements is transparent via
//! `Deref<Target = [Range<T>]>` and `DerefMut`.

use std::fmt::{self, Debug, Display};
use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::bounds::BoundsProvider;
use crate::error::RangeError;
use crate::operations;
use crate::range::Range;

/// An ordered, mutable list of ranges with the set operators as methods.
///
/// ```
/// use halfopen::{Range, RangeCollection};
///
/// let r = |start, end| Range::new(start, end).unwrap();
/// let mut ranges: RangeCollection<i32> = [r(10, 20), r(0, 5)].into_iter().collect();
/// ranges.push(r(5, 10));
///
/// assert_eq!(ranges.lowest(), Ok(0));
/// assert_eq!(ranges.highest(), Ok(20));
/// assert_eq!(ranges.reduce(), vec![r(0, 20)]);
/// ```
#[derive(Clone, PartialEq)]
pub struct RangeCollection<T>(Vec<Range<T>>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl<T> RangeCollection<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates an empty collection with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Mutation methods
// ─────────────────────────────────────────────────────────────────────

impl<T> RangeCollection<T> {
    /// Appends a range at the end.
    pub fn push(&mut self, range: Range<T>) {
        self.0.push(range);
    }

    /// Inserts a range at `index`, shifting later ranges.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, range: Range<T>) {
        self.0.insert(index, range);
    }

    /// Removes and returns the range at `index`, or `None` when out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<Range<T>> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Retains only the ranges for which the predicate returns `true`.
    pub fn retain<F: FnMut(&Range<T>) -> bool>(&mut self, f: F) {
        self.0.retain(f);
    }

    /// Consumes the collection and returns the underlying `Vec`.
    pub fn into_inner(self) -> Vec<Range<T>> {
        self.0
    }

    pub fn as_slice(&self) -> &[Range<T>] {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Set operations
// ─────────────────────────────────────────────────────────────────────

impl<T: Clone + PartialOrd> RangeCollection<T> {
    /// Smallest start of any non-empty range.
    pub fn lowest(&self) -> Result<T, RangeError> {
        operations::lowest(self.0.iter().cloned())
    }

    /// Largest end of any non-empty range.
    pub fn highest(&self) -> Result<T, RangeError> {
        operations::highest(self.0.iter().cloned())
    }

    /// Returns a canonical copy of the collection.
    pub fn reduce(&self) -> RangeCollection<T> {
        Self(operations::reduce(self.0.iter().cloned()))
    }

    pub fn union(&self, other: &RangeCollection<T>) -> RangeCollection<T> {
        Self(operations::union(self.0.iter().cloned(), other.0.iter().cloned()))
    }

    pub fn intersect(&self, other: &RangeCollection<T>) -> RangeCollection<T> {
        Self(operations::intersect(self.0.iter().cloned(), other.0.iter().cloned()))
    }

    /// Everything covered by exactly one of the two collections.
    pub fn exclusive(&self, other: &RangeCollection<T>) -> RangeCollection<T> {
        Self(operations::exclusive(self.0.iter().cloned(), other.0.iter().cloned()))
    }

    pub fn overlaps(&self, other: &RangeCollection<T>) -> bool {
        operations::overlaps(self.0.iter().cloned(), other.0.iter().cloned())
    }

    /// The parts of `[min, max)` not covered by the collection.
    pub fn inverse(&self, min: T, max: T) -> Result<RangeCollection<T>, RangeError> {
        operations::inverse(self.0.iter().cloned(), min, max).map(Self)
    }

    /// The parts of the whole domain of `T` not covered by the collection.
    pub fn inverse_bounded(&self) -> RangeCollection<T>
    where
        T: BoundsProvider,
    {
        Self(operations::inverse_bounded(self.0.iter().cloned()))
    }

    pub fn is_contiguous(&self) -> bool {
        operations::is_contiguous(self.0.iter().cloned())
    }
}

// ─────────────────────────────────────────────────────────────────────
// Transparent access
// ─────────────────────────────────────────────────────────────────────

impl<T> Deref for RangeCollection<T> {
    type Target = [Range<T>];

    fn deref(&self) -> &[Range<T>] {
        &self.0
    }
}

impl<T> DerefMut for RangeCollection<T> {
    fn deref_mut(&mut self) -> &mut [Range<T>] {
        &mut self.0
    }
}

impl<T> AsRef<[Range<T>]> for RangeCollection<T> {
    fn as_ref(&self) -> &[Range<T>] {
        &self.0
    }
}

impl<T> Index<usize> for RangeCollection<T> {
    type Output = Range<T>;

    fn index(&self, index: usize) -> &Range<T> {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for RangeCollection<T> {
    fn index_mut(&mut self, index: usize) -> &mut Range<T> {
        &mut self.0[index]
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────

impl<T> From<Vec<Range<T>>> for RangeCollection<T> {
    fn from(vec: Vec<Range<T>>) -> Self {
        Self(vec)
    }
}

impl<T> From<Range<T>> for RangeCollection<T> {
    fn from(range: Range<T>) -> Self {
        Self(vec![range])
    }
}

impl<T> FromIterator<Range<T>> for RangeCollection<T> {
    fn from_iter<I: IntoIterator<Item = Range<T>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> Extend<Range<T>> for RangeCollection<T> {
    fn extend<I: IntoIterator<Item = Range<T>>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

// ─────────────────────────────────────────────────────────────────────
// Iterators
// ─────────────────────────────────────────────────────────────────────

impl<T> IntoIterator for RangeCollection<T> {
    type Item = Range<T>;
    type IntoIter = std::vec::IntoIter<Range<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a RangeCollection<T> {
    type Item = &'a Range<T>;
    type IntoIter = std::slice::Iter<'a, Range<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────────────────────────────

impl<T> Default for RangeCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug + PartialEq> Debug for RangeCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RangeCollection").field(&self.0).finish()
    }
}

impl<T: Display + PartialEq> Display for RangeCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, range) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", range)?;
        }
        write!(f, "}}")
    }
}

/// Enables `assert_eq!(collection, vec![...])` in tests.
impl<T: PartialEq> PartialEq<Vec<Range<T>>> for RangeCollection<T> {
    fn eq(&self, other: &Vec<Range<T>>) -> bool {
        self.0 == *other
    }
}

/// Enables `assert_eq!(vec![...], collection)` in tests.
impl<T: PartialEq> PartialEq<RangeCollection<T>> for Vec<Range<T>> {
    fn eq(&self, other: &RangeCollection<T>) -> bool {
        *self == other.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<T> serde::Serialize for RangeCollection<T>
where
    T: serde::Serialize + PartialEq,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for RangeCollection<T>
where
    T: serde::Deserialize<'de> + PartialOrd + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<Range<T>>::deserialize(deserializer).map(Self)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn r(start: i32, end: i32) -> Range<i32> {
        Range::new(start, end).unwrap()
    }

    fn rc(ranges: &[Range<i32>]) -> RangeCollection<i32> {
        ranges.iter().cloned().collect()
    }

    // ── Construction ──────────────────────────────────────────────────

    #[test]
    fn new_is_empty() {
        let ranges = RangeCollection::<i32>::new();
        assert!(ranges.is_empty());
        assert_eq!(ranges.len(), 0);
        assert_eq!(RangeCollection::<i32>::default(), ranges);
    }

    #[test]
    fn with_capacity_is_empty() {
        let ranges = RangeCollection::<i32>::with_capacity(8);
        assert!(ranges.is_empty());
    }

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let ranges = rc(&[r(10, 20), r(0, 5), r(10, 20), r(3, 3)]);
        assert_eq!(ranges, vec![r(10, 20), r(0, 5), r(10, 20), r(3, 3)]);
    }

    #[test]
    fn from_single_range() {
        let ranges = RangeCollection::from(r(0, 5));
        assert_eq!(ranges, vec![r(0, 5)]);
    }

    // ── Mutation ──────────────────────────────────────────────────────

    #[test]
    fn push_insert_remove() {
        let mut ranges = RangeCollection::new();
        ranges.push(r(0, 5));
        ranges.push(r(20, 25));
        ranges.insert(1, r(10, 15));
        assert_eq!(ranges, vec![r(0, 5), r(10, 15), r(20, 25)]);

        assert_eq!(ranges.remove(0), Some(r(0, 5)));
        assert_eq!(ranges.remove(9), None);
        assert_eq!(ranges.len(), 2);
    }

    #[test]
    fn retain_extend_clear() {
        let mut ranges = rc(&[r(0, 5), r(1, 1), r(10, 15)]);
        ranges.retain(|range| !range.is_empty());
        assert_eq!(ranges, vec![r(0, 5), r(10, 15)]);

        ranges.extend(vec![r(30, 40)]);
        assert_eq!(ranges.len(), 3);

        ranges.clear();
        assert!(ranges.is_empty());
    }

    #[test]
    fn index_and_slice_access() {
        let mut ranges = rc(&[r(0, 5), r(10, 15)]);
        assert_eq!(ranges[1], r(10, 15));
        ranges[0] = r(-5, 0);
        ranges.sort();
        assert_eq!(ranges.first(), Some(&r(-5, 0)));
        assert_eq!(ranges.as_slice(), &[r(-5, 0), r(10, 15)]);
        assert_eq!(ranges.into_inner(), vec![r(-5, 0), r(10, 15)]);
    }

    // ── Operations ────────────────────────────────────────────────────

    #[test]
    fn lowest_and_highest() {
        let ranges = rc(&[r(10, 20), r(-3, 0), r(5, 50)]);
        assert_eq!(ranges.lowest(), Ok(-3));
        assert_eq!(ranges.highest(), Ok(50));
    }

    #[test]
    fn extremes_of_empty_collection_fail() {
        let ranges = RangeCollection::<i32>::new();
        assert_eq!(ranges.lowest().unwrap_err().kind(), ErrorKind::NotSupported);
        assert_eq!(ranges.highest().unwrap_err().kind(), ErrorKind::NotSupported);
    }

    #[test]
    fn reduce_leaves_the_collection_untouched() {
        let ranges = rc(&[r(10, 20), r(0, 10), r(30, 40)]);
        assert_eq!(ranges.reduce(), vec![r(0, 20), r(30, 40)]);
        assert_eq!(ranges.len(), 3);
    }

    #[test]
    fn set_operations_delegate() {
        let a = rc(&[r(0, 10), r(20, 30)]);
        let b = rc(&[r(5, 25)]);
        assert_eq!(a.union(&b), vec![r(0, 30)]);
        assert_eq!(a.intersect(&b), vec![r(5, 10), r(20, 25)]);
        assert_eq!(a.exclusive(&b), vec![r(0, 5), r(10, 20), r(25, 30)]);
        assert!(a.overlaps(&b));
        assert_eq!(a.inverse(0, 40).unwrap(), vec![r(10, 20), r(30, 40)]);
        assert!(a.inverse(40, 0).is_err());
        assert_eq!(a.inverse_bounded(), vec![r(i32::MIN, 0), r(10, 20), r(30, i32::MAX)]);
    }

    #[test]
    fn contiguity() {
        assert!(rc(&[r(5, 10), r(0, 5)]).is_contiguous());
        assert!(!rc(&[r(0, 5), r(6, 10)]).is_contiguous());
        assert!(!RangeCollection::<i32>::new().is_contiguous());
    }

    // ── Formatting ────────────────────────────────────────────────────

    #[test]
    fn display() {
        assert_eq!(rc(&[r(0, 5), r(7, 7)]).to_string(), "{[0, 5), ∅}");
        assert_eq!(RangeCollection::<i32>::new().to_string(), "{}");
        assert_eq!(format!("{:?}", rc(&[r(0, 5)])), "RangeCollection([[0, 5)])");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_sequence() {
        let ranges = rc(&[r(0, 5), r(7, 7)]);
        let json = serde_json::to_string(&ranges).unwrap();
        assert_eq!(json, r#"[{"Start":0,"End":5},{}]"#);
        let back: RangeCollection<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ranges);
    }
}
