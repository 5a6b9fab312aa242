//! Number predicates
//!
//! Each predicate coerces its input through [`Coerce`] first. Values that do
//! not coerce (lists, `null`, text such as `"texto"`) are rejected.

use super::combinators::Predicate;
use crate::coerce::Coerce;

/// A numeric bound accepted by [`greater_than`] and [`in_range`].
///
/// Implemented for every primitive integer and float. Integers wider than
/// 53 bits round to the nearest `f64`.
pub trait Threshold {
    /// The bound as a float.
    fn into_f64(self) -> f64;
}

macro_rules! impl_threshold {
    ($($ty:ty),* $(,)?) => {$(
        impl Threshold for $ty {
            #[inline]
            fn into_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_threshold!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Predicate for "greater than a threshold".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GreaterThan {
    threshold: f64,
}

impl<T: Coerce + ?Sized> Predicate<T> for GreaterThan {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value.to_number().is_ok_and(|n| n > self.threshold)
    }
}

/// Create a predicate that checks if a value is a number greater than `threshold`.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// assert!(greater_than(10).check(&15));
/// assert!(greater_than(10).check("15"));
/// assert!(!greater_than(10).check(&10));
/// assert!(!greater_than(10).check("abc"));
/// ```
pub fn greater_than(threshold: impl Threshold) -> GreaterThan {
    GreaterThan {
        threshold: threshold.into_f64(),
    }
}

/// Create a predicate that checks if a value is a number greater than zero.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// assert!(positive().check(&5));
/// assert!(!positive().check(&0));
/// assert!(!positive().check(&-3));
/// assert!(!positive().check("texto"));
/// ```
pub fn positive() -> GreaterThan {
    greater_than(0.0)
}

/// Predicate that checks if a value is an even integer.
#[derive(Clone, Copy, Default, Debug)]
pub struct Even;

impl<T: Coerce + ?Sized> Predicate<T> for Even {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value.to_integer().is_ok_and(|n| n % 2 == 0)
    }
}

/// Create a predicate that checks if a value coerces to an even integer.
///
/// Floats truncate before the check, so `4.7` counts as `4`.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// assert!(even().check(&4));
/// assert!(!even().check(&7));
/// assert!(!even().check("no_numero"));
/// ```
pub fn even() -> Even {
    Even
}

/// Predicate for a value within an inclusive range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InRange {
    min: f64,
    max: f64,
}

impl<T: Coerce + ?Sized> Predicate<T> for InRange {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value
            .to_number()
            .is_ok_and(|n| self.min <= n && n <= self.max)
    }
}

/// Create a predicate that checks if a value is a number between `min` and
/// `max`, both inclusive.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// let working_age = in_range(18, 65);
/// assert!(working_age.check(&18));
/// assert!(working_age.check(&65));
/// assert!(!working_age.check(&70));
/// assert!(!working_age.check("texto"));
/// ```
pub fn in_range(min: impl Threshold, max: impl Threshold) -> InRange {
    InRange {
        min: min.into_f64(),
        max: max.into_f64(),
    }
}
