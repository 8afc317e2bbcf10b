//! Symmetric trimming by a fraction of the length.

use crate::{
    error::{Error, Result},
    seq::SequenceView,
};

/// Range kept after dropping `floor(len * fraction)` elements from each end.
fn kept_range(len: usize, fraction: f64) -> Result<core::ops::Range<usize>> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(Error::invalid_argument("fraction", "must lie within [0, 1]"));
    }

    // Truncation is the floor here since both factors are non-negative.
    let n = (len as f64 * fraction) as usize;
    if n.saturating_mul(2) >= len {
        return Ok(0..0);
    }
    Ok(n..len - n)
}

/// Removes `floor(len * fraction)` elements from both ends.
///
/// Trimming half or more of the sequence leaves it empty rather than failing.
///
/// ```
/// use auxiliary_core::seq::trim;
///
/// let values: Vec<i32> = (0..10).collect();
/// assert_eq!(trim(&values, 0.1).unwrap(), [1, 2, 3, 4, 5, 6, 7, 8]);
/// assert!(trim(&values, 0.5).unwrap().is_empty());
/// ```
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `fraction` is NaN or outside `[0, 1]`.
pub fn trim<'a, T: 'a>(
    source: impl Into<SequenceView<'a, T>>,
    fraction: f64,
) -> Result<SequenceView<'a, T>> {
    let source: SequenceView<'a, T> = source.into();
    let range = kept_range(source.len(), fraction)?;
    Ok(source.narrow(range))
}

/// Borrowed counterpart of [`trim`].
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `fraction` is NaN or outside `[0, 1]`.
pub fn trimmed<T>(items: &[T], fraction: f64) -> Result<&[T]> {
    let range = kept_range(items.len(), fraction)?;
    Ok(&items[range])
}
