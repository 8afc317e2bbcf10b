//! Error type shared by every helper in this crate.
//!
//! All errors are precondition violations reported synchronously to the
//! caller. Nothing here is transient, so nothing is retried or logged.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Public error type for all helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An index fell outside `[0, len)`.
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A lookup did not find the requested element.
    #[error("element not found in sequence")]
    NotFound,

    /// The lower bound of an interval exceeds its upper bound.
    #[error("lower bound is greater than the upper bound")]
    InvalidBounds,

    /// A reduction without a start value received no elements.
    #[error("empty or invalid iterable")]
    EmptyInput,

    /// Sized arguments that must agree on their length do not.
    #[error("inconsistent argument length: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// A parameter is outside of its accepted domain.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    /// An optional value was unwrapped while absent.
    #[error("value is absent")]
    MissingValue,
}

/// Coarse classification of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Positional lookups: out-of-range indices and missing elements.
    Index,
    /// Arguments with an invalid value: bounds, empty input, lengths.
    Value,
    /// Unwrapping an absent optional value.
    Unwrap,
}

impl Error {
    pub(crate) const fn invalid_argument(name: &'static str, reason: &'static str) -> Self {
        Error::InvalidArgument { name, reason }
    }

    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::IndexOutOfRange { .. } | Error::NotFound => ErrorKind::Index,
            Error::InvalidBounds
            | Error::EmptyInput
            | Error::LengthMismatch { .. }
            | Error::InvalidArgument { .. } => ErrorKind::Value,
            Error::MissingValue => ErrorKind::Unwrap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_kinds_follow_taxonomy() {
        assert_eq!(Error::IndexOutOfRange { index: 3, len: 2 }.kind(), ErrorKind::Index);
        assert_eq!(Error::NotFound.kind(), ErrorKind::Index);
        assert_eq!(Error::InvalidBounds.kind(), ErrorKind::Value);
        assert_eq!(Error::EmptyInput.kind(), ErrorKind::Value);
        assert_eq!(
            Error::LengthMismatch { expected: 1, found: 2 }.kind(),
            ErrorKind::Value
        );
        assert_eq!(Error::invalid_argument("step", "must be positive").kind(), ErrorKind::Value);
        assert_eq!(Error::MissingValue.kind(), ErrorKind::Unwrap);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Error::IndexOutOfRange { index: 6, len: 6 }.to_string(),
            "index 6 is out of range for a sequence of length 6"
        );
        assert_eq!(
            Error::LengthMismatch { expected: 3, found: 2 }.to_string(),
            "inconsistent argument length: expected 3, found 2"
        );
        assert_eq!(
            Error::invalid_argument("width", "must be at least 1").to_string(),
            "invalid argument `width`: must be at least 1"
        );
    }
}
