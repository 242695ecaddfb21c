//! Domain extremes for value types.
//!
//! [`BoundsProvider`] supplies the smallest and largest representable value of
//! a type. The complement of a set of ranges needs them when no explicit
//! bounds are given (see [`inverse_bounded`](crate::operations::inverse_bounded)).

use std::time::Duration;

/// A type with a known minimum and maximum value.
///
/// Floating point types use their finite extremes, not the infinities.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no known minimum and maximum value",
    label = "`{Self}` does not implement `BoundsProvider`",
    note = "implement `BoundsProvider` for `{Self}` or pass explicit bounds to `inverse`"
)]
pub trait BoundsProvider: Sized {
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;
}

/// Returns `(T::MIN, T::MAX)`.
pub fn bounds_of<T: BoundsProvider>() -> (T, T) {
    (T::MIN, T::MAX)
}

macro_rules! impl_bounds_provider {
    ($($t:ty),* $(,)?) => {
        $(
            impl BoundsProvider for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
            }
        )*
    };
}

impl_bounds_provider!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl BoundsProvider for char {
    const MIN: Self = '\0';
    const MAX: Self = char::MAX;
}

impl BoundsProvider for bool {
    const MIN: Self = false;
    const MAX: Self = true;
}

impl BoundsProvider for Duration {
    const MIN: Self = Duration::ZERO;
    const MAX: Self = Duration::MAX;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_bounds() {
        assert_eq!(bounds_of::<i32>(), (i32::MIN, i32::MAX));
        assert_eq!(bounds_of::<u8>(), (0, 255));
    }

    #[test]
    fn float_bounds_are_finite() {
        let (min, max) = bounds_of::<f64>();
        assert!(min.is_finite());
        assert!(max.is_finite());
        assert_eq!(min, f64::MIN);
    }

    #[test]
    fn other_bounds() {
        assert_eq!(bounds_of::<char>(), ('\0', char::MAX));
        assert_eq!(bounds_of::<bool>(), (false, true));
        assert_eq!(bounds_of::<Duration>(), (Duration::ZERO, Duration::MAX));
    }
}
