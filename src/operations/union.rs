use super::reduce;
use crate::range::Range;

/// Returns the union of two sequences in canonical form.
///
/// Adjacent ranges from either side are coalesced.
pub fn union<T, A, B>(first: A, second: B) -> Vec<Range<T>>
where
    A: IntoIterator<Item = Range<T>>,
    B: IntoIterator<Item = Range<T>>,
    T: Clone + PartialOrd,
{
    reduce(first.into_iter().chain(second))
}
