//! Lazy enumeration of the values inside a range.

use std::fmt::Debug;
use std::iter::FusedIterator;

use num_traits::CheckedAdd;

use super::Range;
use crate::error::RangeError;

#[derive(Clone)]
enum State<T> {
    Fresh,
    Yielded(T),
    Finished,
}

/// Iterator over `start, stepper(start), stepper(stepper(start)), ...` up to
/// but excluding the range's end.
///
/// Created by [`Range::enumerate_by`], [`Range::enumerate_while`] and
/// [`Range::values_by`]. A stepper that goes below the start or fails to
/// increase yields one `Err` item, after which the iterator is exhausted.
#[derive(Clone)]
pub struct Steps<T, S, F> {
    range: Range<T>,
    step: S,
    stepper: F,
    state: State<T>,
}

impl<T, S, F> Steps<T, S, F> {
    /// Rewinds the iterator to the start of the range.
    pub fn restart(&mut self) {
        self.state = State::Fresh;
    }
}

impl<T> Range<T> {
    /// Enumerates the range by repeatedly applying `stepper` to the previous value.
    ///
    /// The first value is always `start`; enumeration stops before reaching `end`.
    ///
    /// ```
    /// use halfopen::Range;
    ///
    /// let range = Range::new(1, 20).unwrap();
    /// let powers: Result<Vec<_>, _> = range.enumerate_by(2, |value, factor| value * factor).collect();
    /// assert_eq!(powers.unwrap(), vec![1, 2, 4, 8, 16]);
    /// ```
    pub fn enumerate_by<S, F>(&self, step: S, mut stepper: F) -> Steps<T, S, impl FnMut(&T, &S) -> Option<T>>
    where
        T: Clone,
        F: FnMut(&T, &S) -> T,
    {
        self.enumerate_while(step, move |value: &T, step: &S| Some(stepper(value, step)))
    }

    /// Like [`Range::enumerate_by`], but a stepper returning `None` ends the
    /// enumeration, as if the next value had reached `end`.
    pub fn enumerate_while<S, F>(&self, step: S, stepper: F) -> Steps<T, S, F>
    where
        T: Clone,
        F: FnMut(&T, &S) -> Option<T>,
    {
        Steps {
            range: self.clone(),
            step,
            stepper,
            state: State::Fresh,
        }
    }

    /// Enumerates the range in increments of `step`.
    ///
    /// An addition that overflows `T` ends the enumeration, since the next
    /// value would lie past any representable `end`.
    ///
    /// ```
    /// use halfopen::Range;
    ///
    /// let range = Range::new(250u8, 255).unwrap();
    /// let values: Result<Vec<_>, _> = range.values_by(3).collect();
    /// assert_eq!(values.unwrap(), vec![250, 253]);
    /// ```
    #[allow(clippy::type_complexity)]
    pub fn values_by(&self, step: T) -> Steps<T, T, fn(&T, &T) -> Option<T>>
    where
        T: Clone + CheckedAdd,
    {
        self.enumerate_while(step, <T as CheckedAdd>::checked_add as fn(&T, &T) -> Option<T>)
    }
}

impl<T, S, F> Iterator for Steps<T, S, F>
where
    T: Clone + PartialOrd + Debug,
    F: FnMut(&T, &S) -> Option<T>,
{
    type Item = Result<T, RangeError>;

    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn next(&mut self) -> Option<Self::Item> {
        let value = match std::mem::replace(&mut self.state, State::Finished) {
            State::Finished => return None,
            State::Fresh => {
                if self.range.is_empty() {
                    return None;
                }
                self.range.start.clone()
            }
            State::Yielded(previous) => {
                let value = (self.stepper)(&previous, &self.step)?;
                if !(value < self.range.end) {
                    return None;
                }
                if value < self.range.start {
                    return Some(Err(RangeError::StepBelowStart {
                        value: format!("{:?}", value),
                        range: self.range.describe(),
                    }));
                }
                if value <= previous {
                    return Some(Err(RangeError::StepNotIncreasing {
                        value: format!("{:?}", value),
                    }));
                }
                value
            }
        };
        self.state = State::Yielded(value.clone());
        Some(Ok(value))
    }
}

impl<T, S, F> FusedIterator for Steps<T, S, F>
where
    T: Clone + PartialOrd + Debug,
    F: FnMut(&T, &S) -> Option<T>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::time::Duration;

    fn r(start: i32, end: i32) -> Range<i32> {
        Range::new(start, end).unwrap()
    }

    #[test]
    fn values_by_one() {
        let values: Vec<i32> = r(0, 5).values_by(1).map(Result::unwrap).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn values_by_larger_step_stops_before_end() {
        let values: Vec<i32> = r(0, 10).values_by(3).map(Result::unwrap).collect();
        assert_eq!(values, vec![0, 3, 6, 9]);
    }

    #[test]
    fn empty_range_yields_nothing() {
        assert_eq!(r(3, 3).values_by(1).count(), 0);
    }

    #[test]
    fn durations_by_custom_stepper() {
        let range = Range::new(Duration::from_secs(0), Duration::from_secs(3)).unwrap();
        let values: Vec<Duration> = range
            .enumerate_by(Duration::from_millis(1500), |value, step| *value + *step)
            .map(Result::unwrap)
            .collect();
        assert_eq!(values, vec![Duration::ZERO, Duration::from_millis(1500)]);
    }

    #[test]
    fn restartable() {
        let mut steps = r(0, 3).values_by(1);
        assert_eq!(steps.by_ref().count(), 3);
        assert!(steps.next().is_none());
        steps.restart();
        let again: Vec<i32> = steps.clone().map(Result::unwrap).collect();
        assert_eq!(again, vec![0, 1, 2]);
    }

    #[test]
    fn values_by_stops_at_the_type_maximum() {
        let values: Vec<i32> = r(i32::MAX - 5, i32::MAX).values_by(10).map(Result::unwrap).collect();
        assert_eq!(values, vec![i32::MAX - 5]);

        let bytes: Vec<u8> = Range::new(250u8, 255).unwrap().values_by(3).map(Result::unwrap).collect();
        assert_eq!(bytes, vec![250, 253]);
    }

    #[test]
    fn values_by_reaching_the_type_maximum_exactly() {
        let values: Vec<u8> = Range::new(253u8, 255).unwrap().values_by(1).map(Result::unwrap).collect();
        assert_eq!(values, vec![253, 254]);
    }

    #[test]
    fn enumerate_while_ends_on_none() {
        let values: Vec<i32> = r(0, 100)
            .enumerate_while(10, |value, step| (*value < 30).then(|| value + step))
            .map(Result::unwrap)
            .collect();
        assert_eq!(values, vec![0, 10, 20, 30]);
    }

    #[test]
    fn stepper_going_below_start_fails() {
        let mut steps = r(0, 10).enumerate_by(5, |value, step| value - step);
        assert_eq!(steps.next(), Some(Ok(0)));
        let err = steps.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Enumeration);
        assert!(matches!(err, RangeError::StepBelowStart { .. }));
        assert!(steps.next().is_none());
    }

    #[test]
    fn stepper_repeating_a_value_fails() {
        let mut steps = r(0, 10).enumerate_by(0, |value, step| value + step);
        assert_eq!(steps.next(), Some(Ok(0)));
        let err = steps.next().unwrap().unwrap_err();
        assert!(matches!(err, RangeError::StepNotIncreasing { .. }));
        assert!(steps.next().is_none());
    }
}
