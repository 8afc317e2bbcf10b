//! Same-length guard for operations over several sized arguments.

use crate::{
    String, Vec,
    error::{Error, Result},
    seq::{SequenceView, Windowed},
};

/// Types that may report a well-defined element count.
///
/// `None` means the value has no size known up front (for example, a lazy
/// iterator). Such arguments are skipped by [`ensure_same_length`].
pub trait KnownLength {
    fn known_len(&self) -> Option<usize>;
}

impl<T> KnownLength for [T] {
    fn known_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T, const N: usize> KnownLength for [T; N] {
    fn known_len(&self) -> Option<usize> {
        Some(N)
    }
}

impl<T> KnownLength for Vec<T> {
    fn known_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> KnownLength for SequenceView<'_, T> {
    fn known_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> KnownLength for Windowed<'_, T> {
    fn known_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl KnownLength for str {
    fn known_len(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

impl KnownLength for String {
    fn known_len(&self) -> Option<usize> {
        self.as_str().known_len()
    }
}

impl<K: KnownLength + ?Sized> KnownLength for &K {
    fn known_len(&self) -> Option<usize> {
        (**self).known_len()
    }
}

impl<K: KnownLength> KnownLength for Option<K> {
    fn known_len(&self) -> Option<usize> {
        self.as_ref().and_then(KnownLength::known_len)
    }
}

/// Checks that every known length agrees.
///
/// Returns the common length, or `None` if no argument had a known size.
///
/// # Errors
///
/// [`Error::LengthMismatch`] naming the first known length and the first one
/// that differs from it.
pub fn ensure_same_length<I>(lengths: I) -> Result<Option<usize>>
where
    I: IntoIterator<Item = Option<usize>>,
{
    let mut expected = None;

    for found in lengths.into_iter().flatten() {
        match expected {
            None => expected = Some(found),
            Some(expected) if expected != found => {
                return Err(Error::LengthMismatch { expected, found });
            }
            Some(_) => {}
        }
    }

    Ok(expected)
}

/// Applies [`ensure_same_length`] to a list of [`KnownLength`] values.
///
/// ```
/// use auxiliary_core::{Error, same_length};
///
/// let xs = [1, 2, 3];
/// let ys = vec![4, 5, 6];
/// assert_eq!(same_length!(xs, ys), Ok(Some(3)));
///
/// let zs = vec![7];
/// assert_eq!(
///     same_length!(xs, zs),
///     Err(Error::LengthMismatch { expected: 3, found: 1 })
/// );
/// ```
#[macro_export]
macro_rules! same_length {
    ($($value:expr),+ $(,)?) => {
        $crate::seq::guard::ensure_same_length([
            $($crate::seq::guard::KnownLength::known_len(&$value)),+
        ])
    };
}
