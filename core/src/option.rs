//! Helpers for optional values.

use crate::error::{Error, Result};

/// Returns `value` if present, otherwise `fallback`.
#[inline]
pub fn default<T>(value: Option<T>, fallback: T) -> T {
    value.unwrap_or(fallback)
}

/// Unwraps `value` without panicking.
///
/// # Errors
///
/// [`Error::MissingValue`] if `value` is `None`.
#[inline]
pub fn get<T>(value: Option<T>) -> Result<T> {
    value.ok_or(Error::MissingValue)
}

/// Advances `iter`, yielding `None` once it is exhausted.
#[inline]
pub fn next_or_none<I: Iterator>(iter: &mut I) -> Option<I::Item> {
    iter.next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_default() {
        assert_eq!(default(Some(3), 7), 3);
        assert_eq!(default(None, 7), 7);
    }

    #[test]
    fn test_get() {
        assert_eq!(get(Some("x")), Ok("x"));

        let err = get::<u8>(None).unwrap_err();
        assert_eq!(err, Error::MissingValue);
        assert_eq!(err.kind(), ErrorKind::Unwrap);
    }

    #[test]
    fn test_next_or_none() {
        let mut iter = [1, 2].into_iter();
        assert_eq!(next_or_none(&mut iter), Some(1));
        assert_eq!(next_or_none(&mut iter), Some(2));
        assert_eq!(next_or_none(&mut iter), None);
        assert_eq!(next_or_none(&mut iter), None);
    }
}
