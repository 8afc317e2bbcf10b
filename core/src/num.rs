//! Numeric helpers: capability traits, reductions and clamping.
//!
//! The capability traits mirror the operator protocols the helpers need. They
//! are blanket-implemented, so any type with the right operators qualifies.
//!
//! ```text
//! SupportsAdd       (+)  sum_of
//! SupportsMul       (*)  product_of
//! SupportsLessThan  (<)  bind
//! ```

use core::ops::{Add, Mul};

use crate::error::{Error, Result};

/// Types closed under `+`.
pub trait SupportsAdd: Add<Output = Self> + Sized {}

impl<T: Add<Output = T>> SupportsAdd for T {}

/// Types closed under `*`.
pub trait SupportsMul: Mul<Output = Self> + Sized {}

impl<T: Mul<Output = T>> SupportsMul for T {}

/// Types comparable with `<`.
pub trait SupportsLessThan: PartialOrd {}

impl<T: PartialOrd + ?Sized> SupportsLessThan for T {}

/// Left fold with `+`.
///
/// No identity element is assumed for `T`, so an empty input is an error
/// rather than zero.
///
/// ```
/// use auxiliary_core::{Error, sum_of};
///
/// assert_eq!(sum_of([1, 2, 3]), Ok(6));
/// assert_eq!(sum_of(Vec::<i32>::new()), Err(Error::EmptyInput));
/// ```
///
/// # Errors
///
/// [`Error::EmptyInput`] if `values` yields nothing.
pub fn sum_of<I>(values: I) -> Result<I::Item>
where
    I: IntoIterator,
    I::Item: SupportsAdd,
{
    values.into_iter().reduce(Add::add).ok_or(Error::EmptyInput)
}

/// Left fold with `*`, optionally seeded with `start`.
///
/// Without a `start`, an empty input is an error rather than one.
///
/// # Errors
///
/// [`Error::EmptyInput`] if `values` yields nothing and `start` is `None`.
pub fn product_of<I>(values: I, start: Option<I::Item>) -> Result<I::Item>
where
    I: IntoIterator,
    I::Item: SupportsMul,
{
    let values = values.into_iter();
    match start {
        Some(start) => Ok(values.fold(start, Mul::mul)),
        None => values.reduce(Mul::mul).ok_or(Error::EmptyInput),
    }
}

/// Clamps `value` into `[lower, upper]`.
///
/// Unlike [`Ord::clamp`], this accepts partially ordered types and reports
/// reversed bounds as an error instead of panicking. A value that compares
/// neither below nor above the bounds (such as NaN) is returned unchanged.
///
/// # Errors
///
/// [`Error::InvalidBounds`] if `lower > upper`.
pub fn bind<T: SupportsLessThan>(value: T, lower: T, upper: T) -> Result<T> {
    if upper < lower {
        Err(Error::InvalidBounds)
    } else if value < lower {
        Ok(lower)
    } else if upper < value {
        Ok(upper)
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, Vec};

    #[test]
    fn test_sum_of() {
        assert_eq!(sum_of(0..6), Ok(15));
        assert_eq!(sum_of([1.5, 2.25]), Ok(3.75));
        assert_eq!(sum_of(Vec::<u8>::new()), Err(Error::EmptyInput));
        assert_eq!(sum_of(Vec::<u8>::new()).unwrap_err().kind(), ErrorKind::Value);
    }

    #[test]
    fn test_product_of() {
        assert_eq!(product_of(0..6, None), Ok(0));
        assert_eq!(product_of(1..6, None), Ok(120));
        assert_eq!(product_of(Vec::<i64>::new(), None), Err(Error::EmptyInput));
        assert_eq!(product_of(Vec::<i64>::new(), Some(1)), Ok(1));
        assert_eq!(product_of([2, 3], Some(4)), Ok(24));
    }

    #[test]
    fn test_bind() {
        assert_eq!(bind(1, 0, 2), Ok(1));
        assert_eq!(bind(-100, 0, 2), Ok(0));
        assert_eq!(bind(100, 0, 2), Ok(2));
        assert_eq!(bind(100, 2, 0), Err(Error::InvalidBounds));
        assert_eq!(bind(5, 5, 5), Ok(5));
    }

    #[test]
    fn test_bind_partial_order() {
        assert_eq!(bind(0.5, 0.0, 1.0), Ok(0.5));
        assert_eq!(bind(1.5, 0.0, 1.0), Ok(1.0));
        assert!(bind(f64::NAN, 0.0, 1.0).unwrap().is_nan());
        assert_eq!(bind("m", "a", "k"), Ok("k"));
    }
}
