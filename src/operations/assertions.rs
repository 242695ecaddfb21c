use crate::range::Range;

/// Returns true if `ranges` is canonical: no range is empty, ranges are sorted
/// by start, and each range ends strictly before the next one starts.
pub fn is_canonical<T: PartialOrd>(ranges: &[Range<T>]) -> bool {
    ranges.iter().all(|range| !range.is_empty())
        && ranges.windows(2).all(|w| w[0].end() < w[1].start())
}
