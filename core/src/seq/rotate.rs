//! Rotation with wraparound offsets.

use core::{iter::Chain, slice};

use crate::{Vec, seq::SequenceView};

/// Reduces `offset` into `[0, len)`; zero for an empty sequence.
///
/// Negative offsets count from the end, so `-1` selects the last element.
#[inline]
pub(crate) fn effective_offset(offset: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let magnitude = offset.unsigned_abs() % len;
    if offset < 0 && magnitude != 0 {
        len - magnitude
    } else {
        magnitude
    }
}

/// Returns `source[k..] ++ source[..k]` with `k = offset mod len`.
///
/// Owned inputs are rotated in place; borrowed ones are cloned once.
///
/// ```
/// use auxiliary_core::seq::rotate;
///
/// assert_eq!(rotate(&[0, 1, 2, 3, 4, 5], -1), [5, 0, 1, 2, 3, 4]);
/// assert_eq!(rotate(vec![0, 1, 2, 3, 4, 5], 8), [2, 3, 4, 5, 0, 1]);
/// ```
pub fn rotate<'a, T: Clone + 'a>(source: impl Into<SequenceView<'a, T>>, offset: isize) -> Vec<T> {
    let source: SequenceView<'a, T> = source.into();
    let mut items = source.into_vec();
    let k = effective_offset(offset, items.len());
    items.rotate_left(k);
    items
}

/// Lazy, zero-copy rotation of a borrowed slice.
pub fn rotated<T>(items: &[T], offset: isize) -> Chain<slice::Iter<'_, T>, slice::Iter<'_, T>> {
    let (head, tail) = items.split_at(effective_offset(offset, items.len()));
    tail.iter().chain(head.iter())
}
