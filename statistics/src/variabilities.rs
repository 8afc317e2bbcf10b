//! Measures of spread.

use auxiliary_core::SequenceView;
use num_traits::Float;

use crate::{
    averages::{float_len, mean},
    error::{Error, Result},
};

/// Sample variance, normalized by `len - 1`.
///
/// # Errors
///
/// [`Error::InsufficientData`] if the sample has fewer than two values.
pub fn variance<'a, F: Float + 'a>(values: impl Into<SequenceView<'a, F>>) -> Result<F> {
    let values: SequenceView<'a, F> = values.into();
    if values.len() < 2 {
        return Err(Error::InsufficientData {
            needed: 2,
            found: values.len(),
        });
    }

    let center = mean(&values)?;
    let squares = values
        .iter()
        .fold(F::zero(), |acc, &value| acc + (value - center).powi(2));
    Ok(squares / float_len(values.len() - 1)?)
}

/// Sample standard deviation, the square root of [`variance`].
///
/// # Errors
///
/// [`Error::InsufficientData`] if the sample has fewer than two values.
pub fn std_dev<'a, F: Float + 'a>(values: impl Into<SequenceView<'a, F>>) -> Result<F> {
    variance(values).map(F::sqrt)
}

/// Difference between the largest and smallest value.
///
/// NaN values are ignored unless every value is NaN.
///
/// # Errors
///
/// [`Error::Empty`] if the sample has no values.
pub fn range<'a, F: Float + 'a>(values: impl Into<SequenceView<'a, F>>) -> Result<F> {
    let values: SequenceView<'a, F> = values.into();
    let (&first, rest) = values.split_first().ok_or(Error::Empty)?;

    let (lo, hi) = rest
        .iter()
        .fold((first, first), |(lo, hi), &value| (lo.min(value), hi.max(value)));
    Ok(hi - lo)
}
