use super::reduce;
use crate::bounds::{bounds_of, BoundsProvider};
use crate::error::RangeError;
use crate::range::Range;

/// Returns the parts of `[min, max)` not covered by `source`, in canonical form.
///
/// Ranges of `source` reaching outside `[min, max)` are clipped to it. An
/// empty `source` yields the single range `[min, max)`.
///
/// # Errors
///
/// Returns [`RangeError::InvalidBounds`] if `min > max` or the bounds cannot
/// be compared.
///
/// ```
/// use halfopen::{operations::inverse, Range};
///
/// let r = |start, end| Range::new(start, end).unwrap();
/// let holes = inverse(vec![r(2, 4), r(6, 8)], 0, 10).unwrap();
/// assert_eq!(holes, vec![r(0, 2), r(4, 6), r(8, 10)]);
/// ```
pub fn inverse<T, I>(source: I, min: T, max: T) -> Result<Vec<Range<T>>, RangeError>
where
    I: IntoIterator<Item = Range<T>>,
    T: Clone + PartialOrd,
{
    let bounds = Range::new(min, max).map_err(|_| RangeError::InvalidBounds)?;
    let reduced = reduce(source);
    if reduced.is_empty() {
        return Ok(vec![bounds]);
    }
    let (min, max) = bounds.into_inner();
    Ok(complement(&reduced, min, max))
}

/// [`inverse`] over the whole domain of `T`, as given by [`BoundsProvider`].
///
/// ```
/// use halfopen::{operations::inverse_bounded, Range};
///
/// let holes = inverse_bounded(vec![Range::new(0, 10).unwrap()]);
/// assert_eq!(holes, vec![Range::new(i32::MIN, 0).unwrap(), Range::new(10, i32::MAX).unwrap()]);
/// ```
pub fn inverse_bounded<T, I>(source: I) -> Vec<Range<T>>
where
    I: IntoIterator<Item = Range<T>>,
    T: Clone + PartialOrd + BoundsProvider,
{
    let (min, max) = bounds_of::<T>();
    complement(&reduce(source), min, max)
}

/// Walks a canonical sequence and collects the holes inside `[min, max)`.
fn complement<T: Clone + PartialOrd>(reduced: &[Range<T>], min: T, max: T) -> Vec<Range<T>> {
    let mut result = Vec::with_capacity(reduced.len() + 1);
    let mut cursor = min;
    for range in reduced {
        if range.end() <= &cursor {
            continue;
        }
        if range.start() >= &max {
            break;
        }
        if range.start() > &cursor {
            result.push(Range::new_unchecked(cursor, range.start().clone()));
        }
        cursor = range.end().clone();
    }
    if cursor < max {
        result.push(Range::new_unchecked(cursor, max));
    }
    result
}
