//! Positional lookups and small iterator adapters.

use core::iter::{Flatten, Skip};

use crate::error::{Error, Result};

/// Returns the element that follows the first occurrence of `value`.
///
/// With `wrap`, the element after the last one is the first one.
///
/// ```
/// use auxiliary_core::{Error, seq::after};
///
/// let ring = ["north", "east", "south", "west"];
/// assert_eq!(after(&ring, &"east", false), Ok(&"south"));
/// assert_eq!(after(&ring, &"west", true), Ok(&"north"));
/// assert_eq!(after(&ring, &"west", false), Err(Error::IndexOutOfRange { index: 4, len: 4 }));
/// ```
///
/// # Errors
///
/// - [`Error::NotFound`] if `value` does not occur.
/// - [`Error::IndexOutOfRange`] if `value` first occurs last and `wrap` is off.
pub fn after<'s, T: PartialEq>(items: &'s [T], value: &T, wrap: bool) -> Result<&'s T> {
    let position = items
        .iter()
        .position(|item| item == value)
        .ok_or(Error::NotFound)?;

    let index = position + 1;
    match items.get(index) {
        Some(next) => Ok(next),
        // `position` exists, so the slice is non-empty.
        None if wrap => Ok(&items[0]),
        None => Err(Error::IndexOutOfRange {
            index,
            len: items.len(),
        }),
    }
}

/// Concatenates an iterable of iterables into one lazy iterator.
pub fn flattened<I>(nested: I) -> Flatten<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    nested.into_iter().flatten()
}

/// Lazily drops the first `count` items.
pub fn skipped<I: IntoIterator>(source: I, count: usize) -> Skip<I::IntoIter> {
    source.into_iter().skip(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, seq::chunk};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_after() {
        let values = [3, 1, 4, 1, 5];

        assert_eq!(after(&values, &3, false), Ok(&1));
        // First occurrence wins.
        assert_eq!(after(&values, &1, false), Ok(&4));
        assert_eq!(after(&values, &5, true), Ok(&3));
    }

    #[test]
    fn test_after_errors_are_index_kind() {
        let values = [3, 1, 4];

        let missing = after(&values, &9, true).unwrap_err();
        assert_eq!(missing, Error::NotFound);
        assert_eq!(missing.kind(), ErrorKind::Index);

        let last = after(&values, &4, false).unwrap_err();
        assert_eq!(last.kind(), ErrorKind::Index);

        assert_eq!(after::<i32>(&[], &1, true), Err(Error::NotFound));
    }

    #[test]
    fn test_flattened_reconstructs_chunks() {
        let values: Vec<u32> = (0..11).collect();
        for width in 1..13 {
            let chunks = chunk(&values, width).unwrap();
            let rebuilt: Vec<u32> = flattened(&chunks).copied().collect();
            assert_eq!(rebuilt, values, "width {width}");
        }
    }

    #[test]
    fn test_skipped() {
        assert_eq!(skipped(0..5, 2).collect::<Vec<_>>(), [2, 3, 4]);
        assert_eq!(skipped([1, 2], 7).count(), 0);
    }
}
