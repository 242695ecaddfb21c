use std::ops::ControlFlow;

use super::reduce;
use crate::range::Range;

/// Returns true if the overall spans of two canonical sequences overlap.
///
/// For canonical input the first range holds the lowest start and the last
/// range holds the highest end.
fn spans_overlap<T: PartialOrd>(first: &[Range<T>], second: &[Range<T>]) -> bool {
    match (first.first(), first.last(), second.first(), second.last()) {
        (Some(first_low), Some(first_high), Some(second_low), Some(second_high)) => {
            !(first_high.end() < second_low.start() || second_high.end() < first_low.start())
        }
        _ => false,
    }
}

/// Visits every overlapping pair of two canonical sequences in order.
///
/// Both inputs are sorted, so ranges of `second` that end before the current
/// range of `first` are skipped for good, and the scan of `second` stops at the
/// first range that starts after it.
fn sweep<T, F>(first: &[Range<T>], second: &[Range<T>], mut visit: F)
where
    T: PartialOrd,
    F: FnMut(&Range<T>, &Range<T>) -> ControlFlow<()>,
{
    let mut cursor = 0usize;
    for a in first {
        while cursor < second.len() && second[cursor].is_completely_before(a) {
            cursor += 1;
        }
        for b in &second[cursor..] {
            if b.is_completely_behind(a) {
                break;
            }
            if a.overlaps(b) && visit(a, b).is_break() {
                return;
            }
        }
    }
}

/// Returns the intersection of two sequences in canonical form.
///
/// ```
/// use halfopen::{operations::intersect, Range};
///
/// let r = |start, end| Range::new(start, end).unwrap();
/// let first = vec![r(0, 5), r(10, 15), r(20, 25)];
/// let second = vec![r(-5, -2), r(2, 7), r(12, 17), r(22, 27), r(32, 37)];
/// assert_eq!(intersect(first, second), vec![r(2, 5), r(12, 15), r(22, 25)]);
/// ```
pub fn intersect<T, A, B>(first: A, second: B) -> Vec<Range<T>>
where
    A: IntoIterator<Item = Range<T>>,
    B: IntoIterator<Item = Range<T>>,
    T: Clone + PartialOrd,
{
    let first = reduce(first);
    let second = reduce(second);

    if !spans_overlap(&first, &second) {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(first.len().min(second.len()));
    sweep(&first, &second, |a, b| {
        result.push(a.clip(b));
        ControlFlow::Continue(())
    });
    result
}

/// Returns true if any range of `first` overlaps any range of `second`.
pub fn overlaps<T, A, B>(first: A, second: B) -> bool
where
    A: IntoIterator<Item = Range<T>>,
    B: IntoIterator<Item = Range<T>>,
    T: Clone + PartialOrd,
{
    let first = reduce(first);
    let second = reduce(second);

    if !spans_overlap(&first, &second) {
        return false;
    }

    let mut found = false;
    sweep(&first, &second, |_, _| {
        found = true;
        ControlFlow::Break(())
    });
    found
}
