//! Conversion between `Range<i32>` and slice index ranges that may count
//! from the end, written `a..^b` below.
//!
//! A from-end offset `n` is stored in a `Range<i32>` as its bitwise
//! complement `!n`, which is always negative. That keeps `^0` distinct
//! from `0` and makes the conversion invertible.

use std::fmt;

use crate::error::RangeError;
use crate::range::Range;

/// A position in a slice, counted from the front or from the back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Index {
    FromStart(u32),
    /// `FromEnd(0)` is one past the last element.
    FromEnd(u32),
}

impl Index {
    /// Resolves the index against a slice of length `len`.
    pub fn offset(self, len: usize) -> Option<usize> {
        match self {
            Index::FromStart(value) => usize::try_from(value).ok(),
            Index::FromEnd(value) => len.checked_sub(usize::try_from(value).ok()?),
        }
    }

    fn to_i32(self) -> Result<i32, RangeError> {
        let value = self.raw();
        let signed = i32::try_from(value).map_err(|_| RangeError::IndexOverflow { value })?;
        Ok(match self {
            Index::FromStart(_) => signed,
            Index::FromEnd(_) => !signed,
        })
    }

    fn from_i32(value: i32) -> Self {
        if value < 0 {
            Index::FromEnd((!value).unsigned_abs())
        } else {
            Index::FromStart(value.unsigned_abs())
        }
    }

    fn raw(self) -> u32 {
        match self {
            Index::FromStart(value) | Index::FromEnd(value) => value,
        }
    }
}

impl From<u32> for Index {
    fn from(value: u32) -> Self {
        Index::FromStart(value)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::FromStart(value) => write!(f, "{}", value),
            Index::FromEnd(value) => write!(f, "^{}", value),
        }
    }
}

/// A slice range whose bounds may count from the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexRange {
    pub start: Index,
    pub end: Index,
}

impl IndexRange {
    pub fn new(start: Index, end: Index) -> Self {
        Self { start, end }
    }

    /// The whole slice, `0..^0`.
    pub fn full() -> Self {
        Self::new(Index::FromStart(0), Index::FromEnd(0))
    }

    /// Resolves the range against a slice of length `len`.
    ///
    /// Returns `None` if either bound falls outside the slice or the start
    /// resolves past the end.
    ///
    /// ```
    /// use halfopen::{Index, IndexRange};
    ///
    /// let data = [1, 2, 3, 4, 5];
    /// let range = IndexRange::new(Index::FromStart(1), Index::FromEnd(2));
    /// assert_eq!(&data[range.to_slice_range(data.len()).unwrap()], &[2, 3]);
    /// ```
    pub fn to_slice_range(&self, len: usize) -> Option<std::ops::Range<usize>> {
        let start = self.start.offset(len)?;
        let end = self.end.offset(len)?;
        (start <= end && end <= len).then_some(start..end)
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl TryFrom<IndexRange> for Range<i32> {
    type Error = RangeError;

    /// Maps each bound to an `i32`, complementing from-end offsets, and
    /// orders the pair.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::IndexOverflow`] for an offset above `i32::MAX`.
    fn try_from(range: IndexRange) -> Result<Self, Self::Error> {
        let start = range.start.to_i32()?;
        let end = range.end.to_i32()?;
        if end < start {
            Ok(Range::new_unchecked(end, start))
        } else {
            Ok(Range::new_unchecked(start, end))
        }
    }
}

impl From<Range<i32>> for IndexRange {
    /// Negative bounds become from-end offsets. The pair is swapped back when
    /// the `TryFrom<IndexRange>` conversion had to reorder it.
    fn from(range: Range<i32>) -> Self {
        let (start, end) = range.into_inner();
        let start = Index::from_i32(start);
        let end = Index::from_i32(end);
        let both_from_end = matches!((start, end), (Index::FromEnd(_), Index::FromEnd(_)));
        if end.raw() <= start.raw() && !both_from_end {
            IndexRange::new(end, start)
        } else {
            IndexRange::new(start, end)
        }
    }
}
