use crate::error::RangeError;
use crate::range::{cmp_values, Range};

/// Returns the smallest `start` among the non-empty ranges of `source`.
///
/// Empty ranges are skipped, so they never contribute their position.
///
/// # Errors
///
/// Returns [`RangeError::EmptySource`] if `source` has no non-empty range.
pub fn lowest<T, I>(source: I) -> Result<T, RangeError>
where
    I: IntoIterator<Item = Range<T>>,
    T: PartialOrd,
{
    source
        .into_iter()
        .filter(|range| !range.is_empty())
        .map(|range| range.into_inner().0)
        .min_by(cmp_values)
        .ok_or(RangeError::EmptySource { operation: "lowest" })
}

/// Returns the largest `end` among the non-empty ranges of `source`.
///
/// This is the largest `end` of all, not the `end` of the highest range by
/// ordering: for `[0, 100)` and `[5, 10)` it is `100`, although `[5, 10)`
/// sorts last. Empty ranges are skipped.
///
/// # Errors
///
/// Returns [`RangeError::EmptySource`] if `source` has no non-empty range.
pub fn highest<T, I>(source: I) -> Result<T, RangeError>
where
    I: IntoIterator<Item = Range<T>>,
    T: PartialOrd,
{
    source
        .into_iter()
        .filter(|range| !range.is_empty())
        .map(|range| range.into_inner().1)
        .max_by(cmp_values)
        .ok_or(RangeError::EmptySource { operation: "highest" })
}

/// Returns true if the ranges, once sorted, form one unbroken run where each
/// range ends exactly where the next one starts.
///
/// False for an empty `source`, for any empty range, and for overlapping ranges.
pub fn is_contiguous<T, I>(source: I) -> bool
where
    I: IntoIterator<Item = Range<T>>,
    T: PartialOrd,
{
    let mut ranges: Vec<Range<T>> = source.into_iter().collect();
    if ranges.is_empty() || ranges.iter().any(Range::is_empty) {
        return false;
    }
    ranges.sort_by(|a, b| a.compare(b));
    ranges.windows(2).all(|w| w[0].touches(&w[1]))
}

/// Returns true if `source` yields exactly one item. At most two items are consumed.
pub fn is_single<I: IntoIterator>(source: I) -> bool {
    let mut iter = source.into_iter();
    iter.next().is_some() && iter.next().is_none()
}
