//! Error type for the statistics helpers.

use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The sample has no values.
    #[error("statistic of an empty sample")]
    Empty,

    /// The sample is too small for the requested statistic.
    #[error("sample of {found} values is too small, at least {needed} required")]
    InsufficientData { needed: usize, found: usize },

    /// The sample length has no representation in the float type.
    #[error("sample length {0} cannot be represented as a float")]
    UnrepresentableLength(usize),

    #[error(transparent)]
    Sequence(#[from] auxiliary_core::Error),
}
