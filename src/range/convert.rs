use super::Range;
use crate::error::RangeError;

impl<T> Range<T> {
    /// Returns a copy of the range as a `(start, end)` tuple.
    pub fn as_tuple(&self) -> (T, T)
    where
        T: Clone,
    {
        (self.start.clone(), self.end.clone())
    }
}

impl<T: PartialOrd> TryFrom<(T, T)> for Range<T> {
    type Error = RangeError;

    fn try_from((start, end): (T, T)) -> Result<Self, Self::Error> {
        Range::new(start, end)
    }
}

impl<T> From<Range<T>> for (T, T) {
    fn from(range: Range<T>) -> Self {
        range.into_inner()
    }
}

impl<T: PartialOrd> TryFrom<std::ops::Range<T>> for Range<T> {
    type Error = RangeError;

    fn try_from(range: std::ops::Range<T>) -> Result<Self, Self::Error> {
        Range::new(range.start, range.end)
    }
}

impl<T> From<Range<T>> for std::ops::Range<T> {
    fn from(range: Range<T>) -> Self {
        let (start, end) = range.into_inner();
        start..end
    }
}
