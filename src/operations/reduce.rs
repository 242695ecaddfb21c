use super::assertions::is_canonical;
use crate::range::{higher, Range};

/// Appends `range` to `result`, merging it into the last range when they overlap or touch.
///
/// `range` must not start before the last range in `result`.
fn merge_into<T: Clone + PartialOrd>(result: &mut Vec<Range<T>>, range: Range<T>) {
    if let Some(last) = result.last_mut() {
        if last.overlaps(&range) || last.touches(&range) {
            *last = Range::new_unchecked(last.start().clone(), higher(last.end(), range.end()).clone());
            return;
        }
    }
    result.push(range);
}

/// Brings a sequence of ranges into canonical form.
///
/// Empty ranges are dropped, the rest is sorted and every overlapping or
/// touching pair is merged. The result is sorted, non-empty, pairwise disjoint
/// and non-touching. Reducing is idempotent and ignores input order.
///
/// ```
/// use halfopen::{operations::reduce, Range};
///
/// let r = |start, end| Range::new(start, end).unwrap();
/// assert_eq!(reduce(vec![r(10, 20), r(0, 10), r(30, 30)]), vec![r(0, 20)]);
/// ```
pub fn reduce<T, I>(source: I) -> Vec<Range<T>>
where
    I: IntoIterator<Item = Range<T>>,
    T: Clone + PartialOrd,
{
    let mut sorted: Vec<Range<T>> = source.into_iter().filter(|range| !range.is_empty()).collect();
    sorted.sort_by(|a, b| a.compare(b));

    let mut reduced: Vec<Range<T>> = Vec::with_capacity(sorted.len());
    for range in sorted {
        merge_into(&mut reduced, range);
    }

    debug_assert!(is_canonical(&reduced));
    reduced
}
