//! Assertions for comparing iterables in tests.
//!
//! Every assertion materializes its arguments first, so one-shot iterators
//! can be passed directly and are read once.
//!
//! ```
//! use auxiliary_core::{assert_iter_almost_eq, assert_iter_eq, assert_nested_iter_eq};
//! use auxiliary_core::seq::chunk;
//!
//! assert_iter_eq!(0..3, vec![0, 1, 2]);
//! assert_iter_almost_eq!([0.1 + 0.2, 1.0], [0.3, 1.0]);
//!
//! let chunks = chunk(&[1, 2, 3], 2).unwrap();
//! assert_nested_iter_eq!(&chunks, [vec![&1, &2], vec![&3]]);
//! ```

use std::borrow::Borrow;

use crate::{String, Vec, format, seq::ensure_same_length};

#[doc(hidden)]
pub use pretty_assertions;

/// How close two floats must be to count as equal.
///
/// With a `delta`, values match when `|a - b| <= delta`. Otherwise they match
/// when `a - b` rounded to `places` decimal places is zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerance {
    places: u32,
    delta: Option<f64>,
}

impl Tolerance {
    pub const DEFAULT_PLACES: u32 = 7;

    pub const fn places(places: u32) -> Self {
        Self {
            places,
            delta: None,
        }
    }

    pub const fn delta(delta: f64) -> Self {
        Self {
            places: Self::DEFAULT_PLACES,
            delta: Some(delta),
        }
    }

    /// Returns `true` if `a` and `b` are equal within this tolerance.
    ///
    /// Rounding to `places` sends halves to the even neighbour, so a
    /// difference of exactly half a unit in the last place is accepted.
    pub fn accepts(&self, a: f64, b: f64) -> bool {
        // Covers equal infinities, whose difference is NaN.
        if a == b {
            return true;
        }

        let diff = (a - b).abs();
        match self.delta {
            Some(delta) => diff <= delta,
            None => {
                let scale = 10f64.powi(i32::try_from(self.places).unwrap_or(i32::MAX));
                (diff * scale).round_ties_even() == 0.0
            }
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::places(Self::DEFAULT_PLACES)
    }
}

/// Collects an iterable of iterables into nested vectors.
pub fn collect_nested<I>(nested: I) -> Vec<Vec<<I::Item as IntoIterator>::Item>>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    nested
        .into_iter()
        .map(|inner| inner.into_iter().collect())
        .collect()
}

/// Compares two iterables of floats element-wise within `tolerance`.
///
/// # Errors
///
/// A description of the first difference: a length mismatch or the first
/// pair of elements outside the tolerance.
pub fn check_iter_almost_eq<A, B>(left: A, right: B, tolerance: Tolerance) -> Result<(), String>
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: Borrow<f64>,
    B::Item: Borrow<f64>,
{
    let left: Vec<f64> = left.into_iter().map(|x| *Borrow::<f64>::borrow(&x)).collect();
    let right: Vec<f64> = right.into_iter().map(|x| *Borrow::<f64>::borrow(&x)).collect();

    ensure_same_length([Some(left.len()), Some(right.len())])
        .map_err(|err| format!("{err}\n  left: {left:?}\n right: {right:?}"))?;

    match left
        .iter()
        .zip(&right)
        .position(|(&a, &b)| !tolerance.accepts(a, b))
    {
        None => Ok(()),
        Some(index) => Err(format!(
            "elements at index {index} differ: {} != {} ({tolerance:?})\n  left: {left:?}\n right: {right:?}",
            left[index], right[index],
        )),
    }
}

/// Nested counterpart of [`check_iter_almost_eq`].
///
/// # Errors
///
/// A description of the first differing row.
pub fn check_nested_iter_almost_eq<A, B>(
    left: A,
    right: B,
    tolerance: Tolerance,
) -> Result<(), String>
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: IntoIterator,
    B::Item: IntoIterator,
    <A::Item as IntoIterator>::Item: Borrow<f64>,
    <B::Item as IntoIterator>::Item: Borrow<f64>,
{
    let left = collect_nested(left);
    let right = collect_nested(right);

    ensure_same_length([Some(left.len()), Some(right.len())]).map_err(|err| format!("{err}"))?;

    for (row, (a, b)) in left.into_iter().zip(right).enumerate() {
        check_iter_almost_eq(a, b, tolerance).map_err(|err| format!("row {row}: {err}"))?;
    }
    Ok(())
}

/// Asserts that two iterables yield equal items, in order.
#[macro_export]
macro_rules! assert_iter_eq {
    ($left:expr, $right:expr $(,)?) => {{
        let left: $crate::shim::Vec<_> = ::core::iter::IntoIterator::into_iter($left).collect();
        let right: $crate::shim::Vec<_> = ::core::iter::IntoIterator::into_iter($right).collect();
        $crate::testing::pretty_assertions::assert_eq!(left, right);
    }};
}

/// Asserts that two iterables of iterables yield equal items, in order.
#[macro_export]
macro_rules! assert_nested_iter_eq {
    ($left:expr, $right:expr $(,)?) => {{
        let left = $crate::testing::collect_nested($left);
        let right = $crate::testing::collect_nested($right);
        $crate::testing::pretty_assertions::assert_eq!(left, right);
    }};
}

/// Asserts that two iterables of floats are equal within a
/// [`Tolerance`](crate::testing::Tolerance), seven decimal places by default.
#[macro_export]
macro_rules! assert_iter_almost_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_iter_almost_eq!($left, $right, $crate::testing::Tolerance::default())
    };
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        if let ::core::result::Result::Err(message) =
            $crate::testing::check_iter_almost_eq($left, $right, $tolerance)
        {
            ::core::panic!("assertion failed: iterables are not almost equal\n{}", message);
        }
    };
}

/// Nested counterpart of [`assert_iter_almost_eq!`].
#[macro_export]
macro_rules! assert_nested_iter_almost_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_nested_iter_almost_eq!($left, $right, $crate::testing::Tolerance::default())
    };
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        if let ::core::result::Result::Err(message) =
            $crate::testing::check_nested_iter_almost_eq($left, $right, $tolerance)
        {
            ::core::panic!("assertion failed: nested iterables are not almost equal\n{}", message);
        }
    };
}
