use super::{reduce, union};
use crate::range::Range;

/// Returns the parts of `first` not covered by `second`, in canonical form.
///
/// ```
/// use halfopen::{operations::difference, Range};
///
/// let r = |start, end| Range::new(start, end).unwrap();
/// assert_eq!(difference(vec![r(0, 20)], vec![r(5, 10)]), vec![r(0, 5), r(10, 20)]);
/// ```
pub fn difference<T, A, B>(first: A, second: B) -> Vec<Range<T>>
where
    A: IntoIterator<Item = Range<T>>,
    B: IntoIterator<Item = Range<T>>,
    T: Clone + PartialOrd,
{
    let first = reduce(first);
    let second = reduce(second);

    let mut result = Vec::with_capacity(first.len());
    let mut next = 0usize;
    for range in &first {
        // ranges ending at or before this start cannot cut this or any later range
        while next < second.len() && second[next].end() <= range.start() {
            next += 1;
        }

        let mut cursor = range.start().clone();
        for cut in &second[next..] {
            if cut.start() >= range.end() {
                break;
            }
            if cut.start() > &cursor {
                result.push(Range::new_unchecked(cursor.clone(), cut.start().clone()));
            }
            if cut.end() > &cursor {
                cursor = cut.end().clone();
            }
        }
        if &cursor < range.end() {
            result.push(Range::new_unchecked(cursor, range.end().clone()));
        }
    }
    result
}

/// Returns the symmetric difference of two sequences: everything covered by
/// exactly one of them, in canonical form.
///
/// Computed as the union of both one-sided differences, so pieces from either
/// side that touch are merged.
pub fn exclusive<T, A, B>(first: A, second: B) -> Vec<Range<T>>
where
    A: IntoIterator<Item = Range<T>>,
    B: IntoIterator<Item = Range<T>>,
    T: Clone + PartialOrd,
{
    let first = reduce(first);
    let second = reduce(second);
    let only_first = difference(first.iter().cloned(), second.iter().cloned());
    let only_second = difference(second, first);
    union(only_first, only_second)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(start: i32, end: i32) -> Range<i32> {
        Range::new(start, end).unwrap()
    }

    #[test]
    fn difference_of_empty_sequences() {
        assert!(difference(Vec::<Range<i32>>::new(), Vec::new()).is_empty());
        assert_eq!(difference(vec![r(0, 10)], Vec::new()), vec![r(0, 10)]);
        assert!(difference(Vec::new(), vec![r(0, 10)]).is_empty());
    }

    #[test]
    fn difference_of_equal_sequences_is_empty() {
        assert!(difference(vec![r(0, 10)], vec![r(0, 10)]).is_empty());
        assert!(difference(vec![r(0, 10), r(10, 20)], vec![r(0, 20)]).is_empty());
    }

    #[test]
    fn difference_cuts_holes() {
        let result = difference(vec![r(0, 20)], vec![r(2, 4), r(6, 8), r(18, 25)]);
        assert_eq!(result, vec![r(0, 2), r(4, 6), r(8, 18)]);
    }

    #[test]
    fn difference_keeps_untouched_ranges() {
        let result = difference(vec![r(0, 5), r(10, 15)], vec![r(5, 10)]);
        assert_eq!(result, vec![r(0, 5), r(10, 15)]);
    }

    #[test]
    fn difference_across_several_ranges() {
        let result = difference(vec![r(0, 10), r(20, 30)], vec![r(5, 25)]);
        assert_eq!(result, vec![r(0, 5), r(25, 30)]);
    }

    #[test]
    fn exclusive_of_equal_sequences_is_empty() {
        assert!(exclusive(vec![r(0, 10)], vec![r(0, 10)]).is_empty());
        assert!(exclusive(vec![Range::empty(), r(0, 10)], vec![r(0, 10)]).is_empty());
        assert!(exclusive(vec![r(0, 20), r(5, 15)], vec![r(0, 20)]).is_empty());
    }

    #[test]
    fn exclusive_of_disjoint_sequences_is_their_union() {
        assert_eq!(exclusive(vec![r(0, 10)], vec![r(20, 30)]), vec![r(0, 10), r(20, 30)]);
    }

    #[test]
    fn exclusive_merges_touching_pieces() {
        assert_eq!(exclusive(vec![r(0, 10)], vec![r(10, 20)]), vec![r(0, 20)]);
    }

    #[test]
    fn exclusive_of_partial_overlap() {
        assert_eq!(exclusive(vec![r(0, 10)], vec![r(5, 15)]), vec![r(0, 5), r(10, 15)]);
    }

    #[test]
    fn exclusive_is_symmetric() {
        let first = vec![r(0, 5), r(3, 10), r(10, 15), r(18, 20)];
        let second = vec![r(1, 8), r(12, 25)];
        let expected = vec![r(0, 1), r(8, 12), r(15, 18), r(20, 25)];
        assert_eq!(exclusive(first.clone(), second.clone()), expected);
        assert_eq!(exclusive(second, first), expected);
    }
}
