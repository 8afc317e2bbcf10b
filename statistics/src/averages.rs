//! Measures of central tendency.

use core::cmp::Ordering;

use alloc::vec::Vec;
use auxiliary_core::{SequenceView, trimmed};
use num_traits::Float;

use crate::error::{Error, Result};

/// Converts a sample length to `F`.
pub(crate) fn float_len<F: Float>(len: usize) -> Result<F> {
    F::from(len).ok_or(Error::UnrepresentableLength(len))
}

/// Copies the sample in ascending order. NaN compares equal to everything.
pub(crate) fn sorted<F: Float>(values: &[F]) -> Vec<F> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Arithmetic mean.
///
/// # Errors
///
/// [`Error::Empty`] if the sample has no values.
pub fn mean<'a, F: Float + 'a>(values: impl Into<SequenceView<'a, F>>) -> Result<F> {
    let values: SequenceView<'a, F> = values.into();
    if values.is_empty() {
        return Err(Error::Empty);
    }

    let total = values.iter().fold(F::zero(), |acc, &value| acc + value);
    Ok(total / float_len(values.len())?)
}

/// Mean of the sorted sample after dropping `floor(len * fraction)` values
/// from each end.
///
/// # Errors
///
/// - [`Error::Sequence`] if `fraction` is NaN or outside `[0, 1]`
/// - [`Error::Empty`] if nothing is left after trimming
pub fn trimmed_mean<'a, F: Float + 'a>(
    values: impl Into<SequenceView<'a, F>>,
    fraction: f64,
) -> Result<F> {
    let values: SequenceView<'a, F> = values.into();
    let sorted = sorted(&values);
    let kept = trimmed(&sorted, fraction)?;
    tracing::trace!(len = sorted.len(), kept = kept.len(), "trimmed sample");
    mean(kept)
}

/// Middle value of the sorted sample, or the average of the two middle
/// values when the length is even.
///
/// # Errors
///
/// [`Error::Empty`] if the sample has no values.
pub fn median<'a, F: Float + 'a>(values: impl Into<SequenceView<'a, F>>) -> Result<F> {
    let values: SequenceView<'a, F> = values.into();
    let sorted = sorted(&values);
    let mid = sorted.len() / 2;

    match sorted.len() {
        0 => Err(Error::Empty),
        len if len % 2 == 1 => Ok(sorted[mid]),
        _ => Ok((sorted[mid - 1] + sorted[mid]) / (F::one() + F::one())),
    }
}
